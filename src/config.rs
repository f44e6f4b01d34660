//! Tree construction options.

/// Options for [`build_tree_with`](crate::tree::build_tree_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions<S> {
    /// Legacy pre-merge rule. When both symbols occur, they are fused into
    /// one internal node (first symbol left, second right) before the
    /// weight-ordered merge loop runs, whatever their weights.
    ///
    /// This is not part of Huffman coding proper and can produce codes longer
    /// than optimal. It exists to reproduce output from older encoders.
    /// Ignored when the two symbols are equal.
    pub forced_pair: Option<(S, S)>,
}

impl<S> Default for BuildOptions<S> {
    fn default() -> Self {
        Self { forced_pair: None }
    }
}

impl<S> BuildOptions<S> {
    /// Plain frequency-optimal construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the forced pre-merge of `left` and `right`.
    pub fn with_forced_pair(mut self, left: S, right: S) -> Self {
        self.forced_pair = Some((left, right));
        self
    }
}

impl BuildOptions<char> {
    /// Compatibility mode that always pre-merges `'C'` with `'D'`.
    pub fn legacy() -> Self {
        Self::new().with_forced_pair('C', 'D')
    }
}
