//! # Huffman Coding
//!
//! *Optimal prefix codes with reproducible output.*
//!
//! ## Intuition First
//!
//! Morse code gives the most common letter, `E`, a single dot, and rare letters
//! long sequences. Huffman coding does the same thing systematically: it
//! counts how often each symbol appears and hands the shortest bit patterns
//! to the most frequent ones. No code is the prefix of another, so a stream
//! of codes can be read back without separators.
//!
//! ## The Problem
//!
//! The greedy algorithm is easy to state, but it leaves a lot unspecified.
//! When two subtrees have the same weight, which merges first, and which goes
//! left? Different answers give different (equally short) codes. Two encoders
//! that disagree cannot read each other's output without shipping the tree.
//! This crate fixes every choice:
//!
//! 1. lower weight first;
//! 2. on equal weight, a leaf before an internal node;
//! 3. two leaves of equal weight by ascending symbol;
//! 4. two internal nodes of equal weight by creation order.
//!
//! The first node popped from the queue becomes the left (`0`) child.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down, not always optimal
//! 1952  Huffman     Bottom-up merge: optimal among prefix codes
//! 1976  Schwartz    Canonical codes: transmit lengths, not trees
//! 1993  Deutsch     DEFLATE pairs LZ77 with Huffman coding
//! ```
//!
//! ## Mathematical Formulation
//!
//! Given frequencies $f_s$ for each symbol $s$, Huffman coding picks code
//! lengths $\ell_s$ minimizing
//!
//! ```text
//! L = Σ_s f_s · ℓ_s
//! ```
//!
//! subject to the Kraft inequality $\sum_s 2^{-\ell_s} \le 1$. The result is
//! within one bit per symbol of the entropy $H = -\sum_s p_s \log_2 p_s$.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n \log n)$ for $n$ distinct symbols.
//! - **Encode**: $O(m)$ table lookups for $m$ input symbols.
//! - **Decode**: one tree step per bit.
//!
//! ## Failure Modes
//!
//! 1. **Empty input**: there is no tree to build (`Error::EmptyInput`).
//! 2. **Foreign symbols**: encoding a symbol the tree never saw
//!    (`Error::SymbolNotInTable`).
//! 3. **Truncated streams**: the last code is cut short
//!    (`Error::MalformedStream`).
//!
//! A single-symbol alphabet is a special case, not a failure. The tree is one
//! leaf, its code is `0`, and every bit of a stream decodes to that symbol.
//!
//! ## Usage
//!
//! ```
//! use huffcode::{BuildOptions, HuffmanCodec};
//!
//! let codec = HuffmanCodec::from_text("abracadabra", &BuildOptions::default())?;
//! let bits = codec.encode_text("abracadabra")?;
//! assert_eq!(bits.len(), 23);
//! assert_eq!(codec.decode_text(&bits)?, "abracadabra");
//! # Ok::<(), huffcode::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M., & Thomas, J. A. (2006). "Elements of Information Theory", ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fmt::Debug;

pub mod bits;
pub mod code;
pub mod config;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod tree;

pub use bits::{BitString, EncodedStream};
pub use code::{build_code_table, CodeTable};
pub use config::BuildOptions;
pub use error::Error;
pub use frequency::FrequencyTable;
pub use huffman::{
    decode, encode, CompressionStats, HuffmanCodec, HuffmanDecoder, HuffmanEncoder,
};
pub use tree::{build_tree, build_tree_with, Node};

/// An alphabet unit: anything with a total order.
///
/// The order only breaks ties between equally frequent symbols.
pub trait Symbol: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Symbol for T {}
