//! Huffman encoding and decoding.
//!
//! The encoder concatenates table lookups. The decoder walks the tree one
//! bit at a time, emitting a symbol at each leaf and restarting at the root.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! It was the first practical algorithm for constructing optimal prefix codes.

use crate::bits::{BitString, EncodedStream};
use crate::code::CodeTable;
use crate::config::BuildOptions;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{build_tree_with, Node};
use crate::Symbol;

/// Nominal size of one input symbol, used for compression statistics.
pub const BITS_PER_SYMBOL: u64 = 8;

/// Encode `symbols` by concatenating their codes.
///
/// # Errors
/// Returns `Error::SymbolNotInTable` if a symbol has no code.
pub fn encode<S: Symbol>(symbols: &[S], table: &CodeTable<S>) -> Result<EncodedStream> {
    let mut bits = BitString::with_capacity(symbols.len());
    for (position, symbol) in symbols.iter().enumerate() {
        let code = table.get(symbol).ok_or_else(|| Error::SymbolNotInTable {
            symbol: format!("{:?}", symbol),
            position,
        })?;
        bits.extend_from(code);
    }
    Ok(bits)
}

/// Decode `stream` by walking the tree rooted at `root`.
///
/// When the root is itself a leaf, every bit stands for one copy of its
/// symbol.
///
/// # Errors
/// Returns `Error::MalformedStream` if the stream stops partway through a
/// code.
pub fn decode<S: Symbol>(stream: &EncodedStream, root: &Node<S>) -> Result<Vec<S>> {
    if let Node::Leaf { symbol, .. } = root {
        return Ok(vec![symbol.clone(); stream.len()]);
    }

    let mut out = Vec::new();
    let mut curr = root;
    let mut pending_bits = 0;
    for bit in stream.iter() {
        if let Node::Internal { left, right, .. } = curr {
            curr = if bit { right } else { left };
        }
        pending_bits += 1;

        if let Node::Leaf { symbol, .. } = curr {
            out.push(symbol.clone());
            curr = root;
            pending_bits = 0;
        }
    }

    if pending_bits > 0 {
        log::debug!(
            "stream of {} bits ends {} bits into a code",
            stream.len(),
            pending_bits
        );
        return Err(Error::MalformedStream {
            position: stream.len(),
            pending_bits,
        });
    }
    Ok(out)
}

/// Huffman encoder.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder<S> {
    table: CodeTable<S>,
}

impl<S: Symbol> HuffmanEncoder<S> {
    /// Create a new Huffman encoder from symbol frequencies.
    pub fn new(frequencies: &FrequencyTable<S>, options: &BuildOptions<S>) -> Result<Self> {
        let tree = build_tree_with(frequencies, options)?;
        Ok(Self::from_tree(&tree))
    }

    /// Create an encoder for an existing tree.
    pub fn from_tree(root: &Node<S>) -> Self {
        Self {
            table: CodeTable::from_tree(root),
        }
    }

    /// Encode a symbol sequence into a bit stream.
    pub fn encode(&self, symbols: &[S]) -> Result<EncodedStream> {
        encode(symbols, &self.table)
    }

    /// The code table in use.
    pub fn table(&self) -> &CodeTable<S> {
        &self.table
    }
}

/// Huffman decoder.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder<S> {
    root: Node<S>,
}

impl<S: Symbol> HuffmanDecoder<S> {
    /// Create a new Huffman decoder from frequencies.
    pub fn new(frequencies: &FrequencyTable<S>, options: &BuildOptions<S>) -> Result<Self> {
        Ok(Self {
            root: build_tree_with(frequencies, options)?,
        })
    }

    /// Create a decoder that walks `root`.
    pub fn from_tree(root: Node<S>) -> Self {
        Self { root }
    }

    /// Decode a bit stream into a symbol sequence.
    pub fn decode(&self, stream: &EncodedStream) -> Result<Vec<S>> {
        decode(stream, &self.root)
    }

    /// The tree in use.
    pub fn tree(&self) -> &Node<S> {
        &self.root
    }
}

/// Size comparison between raw and encoded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Number of input symbols.
    pub symbols: usize,
    /// Input size at [`BITS_PER_SYMBOL`] bits per symbol.
    pub original_bits: u64,
    /// Length of the encoded stream.
    pub encoded_bits: u64,
}

impl CompressionStats {
    /// Original size over encoded size, or `0.0` for an empty stream.
    pub fn ratio(&self) -> f64 {
        if self.encoded_bits == 0 {
            return 0.0;
        }
        self.original_bits as f64 / self.encoded_bits as f64
    }
}

/// A tree and the code table derived from it, kept together.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S> {
    encoder: HuffmanEncoder<S>,
    decoder: HuffmanDecoder<S>,
}

impl<S: Symbol> HuffmanCodec<S> {
    /// Build a codec from the frequencies of `symbols`.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `symbols` is empty.
    pub fn new(symbols: &[S], options: &BuildOptions<S>) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::from_symbols(symbols), options)
    }

    /// Build a codec from a frequency table.
    pub fn from_frequencies(
        frequencies: &FrequencyTable<S>,
        options: &BuildOptions<S>,
    ) -> Result<Self> {
        let root = build_tree_with(frequencies, options)?;
        Ok(Self {
            encoder: HuffmanEncoder::from_tree(&root),
            decoder: HuffmanDecoder::from_tree(root),
        })
    }

    /// Encode symbols with this codec's table.
    pub fn encode(&self, symbols: &[S]) -> Result<EncodedStream> {
        self.encoder.encode(symbols)
    }

    /// Decode a stream with this codec's tree.
    pub fn decode(&self, stream: &EncodedStream) -> Result<Vec<S>> {
        self.decoder.decode(stream)
    }

    /// The Huffman tree.
    pub fn tree(&self) -> &Node<S> {
        self.decoder.tree()
    }

    /// The code table.
    pub fn table(&self) -> &CodeTable<S> {
        self.encoder.table()
    }

    /// The encoding half.
    pub fn encoder(&self) -> &HuffmanEncoder<S> {
        &self.encoder
    }

    /// The decoding half.
    pub fn decoder(&self) -> &HuffmanDecoder<S> {
        &self.decoder
    }

    /// Split into owned encoder and decoder.
    pub fn into_parts(self) -> (HuffmanEncoder<S>, HuffmanDecoder<S>) {
        (self.encoder, self.decoder)
    }

    /// Compression statistics for `symbol_count` symbols encoded as `stream`.
    pub fn stats(&self, symbol_count: usize, stream: &EncodedStream) -> CompressionStats {
        CompressionStats {
            symbols: symbol_count,
            original_bits: (symbol_count as u64).saturating_mul(BITS_PER_SYMBOL),
            encoded_bits: stream.len() as u64,
        }
    }
}

impl HuffmanCodec<char> {
    /// Build a codec from the characters of `text`.
    pub fn from_text(text: &str, options: &BuildOptions<char>) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::from_text(text), options)
    }

    /// Encode the characters of `text`.
    pub fn encode_text(&self, text: &str) -> Result<EncodedStream> {
        let symbols: Vec<char> = text.chars().collect();
        self.encode(&symbols)
    }

    /// Decode a stream back into a string.
    pub fn decode_text(&self, stream: &EncodedStream) -> Result<String> {
        Ok(self.decode(stream)?.into_iter().collect())
    }
}
