//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Tree construction was given no symbols.
    #[error("empty input: cannot build a huffman tree without symbols")]
    EmptyInput,

    /// A symbol to encode has no code in the supplied table.
    #[error("symbol {symbol} at position {position} has no code in the table")]
    SymbolNotInTable {
        /// `Debug` rendering of the offending symbol.
        symbol: String,
        /// Index of the symbol in the input sequence.
        position: usize,
    },

    /// The bit stream ended in the middle of a code.
    #[error("malformed stream: ended at bit {position} with {pending_bits} bits of an unfinished code")]
    MalformedStream {
        /// Length of the stream in bits.
        position: usize,
        /// Bits consumed since the last complete symbol.
        pending_bits: usize,
    },

    /// Summing symbol counts exceeded `u64::MAX`.
    #[error("weight overflow: {left} + {right} does not fit in 64 bits")]
    WeightOverflow {
        /// First operand of the failed addition.
        left: u64,
        /// Second operand of the failed addition.
        right: u64,
    },

    /// A textual bit string contained something other than `0` or `1`.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit {
        /// Character index of the bad input.
        position: usize,
        /// The character found.
        found: char,
    },
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
