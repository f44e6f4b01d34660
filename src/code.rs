//! Code table derivation.

use std::collections::btree_map::{self, BTreeMap};

use crate::bits::BitString;
use crate::frequency::FrequencyTable;
use crate::tree::Node;
use crate::Symbol;

/// Symbol to prefix-code mapping derived from a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, BitString>,
}

impl<S: Symbol> CodeTable<S> {
    /// Derive the code of every leaf of `root` (left = 0, right = 1).
    ///
    /// A tree that is a single leaf gives that symbol the code `0`, since an
    /// empty code could not be read back from a stream.
    pub fn from_tree(root: &Node<S>) -> Self {
        let mut codes = BTreeMap::new();
        let mut prefix = BitString::new();
        Self::walk(root, &mut prefix, &mut codes);
        log::debug!("derived {} codes", codes.len());
        Self { codes }
    }

    fn walk(node: &Node<S>, prefix: &mut BitString, codes: &mut BTreeMap<S, BitString>) {
        match node {
            Node::Leaf { symbol, .. } => {
                let code = if prefix.is_empty() {
                    BitString::from(vec![false])
                } else {
                    prefix.clone()
                };
                codes.insert(symbol.clone(), code);
            }
            Node::Internal { left, right, .. } => {
                prefix.push(false);
                Self::walk(left, prefix, codes);
                prefix.pop();

                prefix.push(true);
                Self::walk(right, prefix, codes);
                prefix.pop();
            }
        }
    }

    /// The code for `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.codes.get(symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the table has no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in ascending symbol order.
    pub fn iter(&self) -> btree_map::Iter<'_, S, BitString> {
        self.codes.iter()
    }

    /// Total bits needed to encode a text with these frequencies.
    ///
    /// Symbols missing from the table contribute nothing. Saturates at
    /// `u64::MAX`.
    pub fn encoded_len(&self, frequencies: &FrequencyTable<S>) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, &count)| {
                self.get(symbol)
                    .map(|code| count.saturating_mul(code.len() as u64))
            })
            .fold(0, u64::saturating_add)
    }
}

impl<'a, S> IntoIterator for &'a CodeTable<S> {
    type Item = (&'a S, &'a BitString);
    type IntoIter = btree_map::Iter<'a, S, BitString>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

/// Derive the code table of a tree.
pub fn build_code_table<S: Symbol>(root: &Node<S>) -> CodeTable<S> {
    CodeTable::from_tree(root)
}
