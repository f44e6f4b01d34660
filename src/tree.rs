//! Huffman tree construction.
//!
//! The builder is the classic greedy merge over a min-priority queue, with
//! a fully specified order so that equal inputs always give equal trees:
//!
//! 1. lower weight first;
//! 2. on equal weight, a leaf before an internal node;
//! 3. two leaves of equal weight by ascending symbol;
//! 4. two internal nodes of equal weight by creation order, older first.
//!
//! The first node popped becomes the left child of the merge.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::config::BuildOptions;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::Symbol;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A single symbol and its frequency.
    Leaf {
        /// Frequency of `symbol`.
        weight: u64,
        /// The symbol this leaf decodes to.
        symbol: S,
    },
    /// The merge of two subtrees.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Subtree reached by a 0 bit.
        left: Box<Node<S>>,
        /// Subtree reached by a 1 bit.
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    /// Create a leaf.
    pub fn leaf(symbol: S, weight: u64) -> Self {
        Node::Leaf { weight, symbol }
    }

    /// Join two subtrees under a new internal node.
    ///
    /// # Errors
    /// Returns `Error::WeightOverflow` if the summed weight exceeds `u64::MAX`.
    pub fn merge(left: Node<S>, right: Node<S>) -> Result<Self> {
        let weight = checked_weight(left.weight(), right.weight())?;
        Ok(Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Aggregate frequency of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// The `(left, right)` children of an internal node.
    pub fn children(&self) -> Option<(&Node<S>, &Node<S>)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((&**left, &**right)),
        }
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of internal nodes in this subtree.
    pub fn internal_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => {
                1 + left.internal_count() + right.internal_count()
            }
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Leaf symbols from left to right.
    pub fn symbols(&self) -> Vec<&S> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols<'a>(&'a self, out: &mut Vec<&'a S>) {
        match self {
            Node::Leaf { symbol, .. } => out.push(symbol),
            Node::Internal { left, right, .. } => {
                left.collect_symbols(out);
                right.collect_symbols(out);
            }
        }
    }
}

/// Add two weights, reporting overflow instead of wrapping.
pub(crate) fn checked_weight(left: u64, right: u64) -> Result<u64> {
    left.checked_add(right).ok_or(Error::WeightOverflow { left, right })
}

/// A node waiting in the merge queue, tagged with its creation order.
#[derive(Debug)]
struct Queued<S> {
    node: Node<S>,
    seq: u64,
}

impl<S: Ord> Ord for Queued<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .weight()
            .cmp(&other.node.weight())
            .then_with(|| match (&self.node, &other.node) {
                (Node::Leaf { symbol: a, .. }, Node::Leaf { symbol: b, .. }) => a.cmp(b),
                (Node::Leaf { .. }, Node::Internal { .. }) => Ordering::Less,
                (Node::Internal { .. }, Node::Leaf { .. }) => Ordering::Greater,
                (Node::Internal { .. }, Node::Internal { .. }) => Ordering::Equal,
            })
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<S: Ord> PartialOrd for Queued<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Ord> PartialEq for Queued<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Ord> Eq for Queued<S> {}

/// Min-priority queue of pending subtrees.
struct MergeQueue<S> {
    heap: BinaryHeap<Reverse<Queued<S>>>,
    next_seq: u64,
}

impl<S: Symbol> MergeQueue<S> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    fn push(&mut self, node: Node<S>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Queued { node, seq }));
    }

    fn pop(&mut self) -> Option<Node<S>> {
        self.heap.pop().map(|Reverse(q)| q.node)
    }
}

/// Build a Huffman tree from the symbol frequencies of `symbols`.
///
/// # Errors
/// Returns `Error::EmptyInput` if `symbols` is empty.
pub fn build_tree<S: Symbol>(symbols: &[S]) -> Result<Node<S>> {
    let frequencies = FrequencyTable::from_symbols(symbols);
    build_tree_with(&frequencies, &BuildOptions::default())
}

/// Build a Huffman tree from a frequency table.
///
/// A table with a single entry yields a lone leaf.
///
/// # Errors
/// Returns `Error::EmptyInput` if the table is empty.
pub fn build_tree_with<S: Symbol>(
    frequencies: &FrequencyTable<S>,
    options: &BuildOptions<S>,
) -> Result<Node<S>> {
    if frequencies.is_empty() {
        return Err(Error::EmptyInput);
    }
    log::trace!("building huffman tree from {:?}", frequencies);

    let pair = forced_pair(frequencies, options);
    let mut queue = MergeQueue::with_capacity(frequencies.len());
    for (symbol, &count) in frequencies {
        let paired = pair.is_some_and(|(l, r)| symbol == l || symbol == r);
        if !paired {
            queue.push(Node::leaf(symbol.clone(), count));
        }
    }
    if let Some((l, r)) = pair {
        log::debug!("forcing {:?} and {:?} under one parent", l, r);
        let left = Node::leaf(l.clone(), frequencies.get(l).unwrap_or_default());
        let right = Node::leaf(r.clone(), frequencies.get(r).unwrap_or_default());
        queue.push(Node::merge(left, right)?);
    }

    let root = loop {
        let first = queue.pop().ok_or(Error::EmptyInput)?;
        let Some(second) = queue.pop() else {
            break first;
        };
        log::trace!(
            "merging weight {} with weight {}",
            first.weight(),
            second.weight()
        );
        queue.push(Node::merge(first, second)?);
    };

    log::debug!(
        "built huffman tree: {} symbols, total weight {}, depth {}",
        frequencies.len(),
        root.weight(),
        root.depth()
    );
    Ok(root)
}

/// The configured forced pair, if it applies to this table.
fn forced_pair<'a, S: Symbol>(
    frequencies: &FrequencyTable<S>,
    options: &'a BuildOptions<S>,
) -> Option<(&'a S, &'a S)> {
    let (left, right) = options.forced_pair.as_ref()?;
    if left == right || !frequencies.contains(left) || !frequencies.contains(right) {
        return None;
    }
    Some((left, right))
}
