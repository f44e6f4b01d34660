//! Symbol frequency counting.

use std::collections::btree_map::{self, BTreeMap};

use crate::error::Result;
use crate::tree::checked_weight;
use crate::Symbol;

/// Occurrence counts for each distinct symbol of a text.
///
/// Keys are kept in ascending symbol order so every walk over the table is
/// deterministic. The sum of all counts always fits in a `u64`, so no subtree
/// weight built from the table can overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    counts: BTreeMap<S, u64>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count the symbols of `symbols`.
    pub fn from_symbols(symbols: &[S]) -> Self {
        symbols.iter().cloned().collect()
    }

    /// Build a table from explicit `(symbol, count)` pairs.
    ///
    /// Zero counts are dropped and repeated symbols are summed.
    ///
    /// # Errors
    /// Returns `Error::WeightOverflow` if the counts sum past `u64::MAX`.
    pub fn from_counts<I: IntoIterator<Item = (S, u64)>>(pairs: I) -> Result<Self> {
        let mut counts = BTreeMap::new();
        let mut total = 0u64;
        for (symbol, count) in pairs {
            if count > 0 {
                total = checked_weight(total, count)?;
                *counts.entry(symbol).or_insert(0) += count;
            }
        }
        Ok(Self { counts })
    }

    /// Add the counts of `other` into `self`.
    ///
    /// Counting disjoint shards of a text and merging the tables gives the
    /// same result as counting the whole text.
    ///
    /// # Errors
    /// Returns `Error::WeightOverflow`, leaving `self` unchanged, if the
    /// combined total would exceed `u64::MAX`.
    pub fn merge(&mut self, other: &FrequencyTable<S>) -> Result<()> {
        checked_weight(self.total(), other.total())?;
        for (symbol, &count) in &other.counts {
            *self.counts.entry(symbol.clone()).or_insert(0) += count;
        }
        Ok(())
    }

    /// Count of `symbol`, if it occurs.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no symbol was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted text.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// True if `symbol` occurs.
    pub fn contains(&self, symbol: &S) -> bool {
        self.counts.contains_key(symbol)
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> btree_map::Iter<'_, S, u64> {
        self.counts.iter()
    }

    /// Entries sorted by descending count, then ascending symbol.
    pub fn ranked(&self) -> Vec<(&S, u64)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(s, &c)| (s, c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl FrequencyTable<char> {
    /// Count the characters of `text`.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for symbol in iter {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        Self { counts }
    }
}

impl<'a, S> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, &'a u64);
    type IntoIter = btree_map::Iter<'a, S, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
