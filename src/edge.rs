//! Labeled transitions between nodes.

use crate::node::Node;

/// A labeled edge owning exactly one child node.
///
/// The label is the substring consumed when walking from the parent into
/// [`Edge::node`]. It is never empty.
#[derive(Debug, Clone)]
pub struct Edge<V> {
    pub(crate) label: String,
    pub(crate) node: Node<V>,
}

impl<V> Edge<V> {
    pub(crate) fn new(label: String, node: Node<V>) -> Self {
        debug_assert!(!label.is_empty(), "edge labels are never empty");
        Self { label, node }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn node(&self) -> &Node<V> {
        &self.node
    }

    /// Split the label at byte offset `at`.
    ///
    /// The edge keeps `label[..at]` and now points at a fresh valueless node,
    /// which in turn owns the old child under `label[at..]`. The old subtree
    /// moves one level deeper.
    pub(crate) fn split(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());
        let suffix = self.label.split_off(at);
        let depth = self.node.depth;

        let mut lower = std::mem::replace(&mut self.node, Node::branch(depth));
        lower.set_depth(depth + 1);

        tracing::trace!(prefix = %self.label, suffix = %suffix, depth, "split edge");
        self.node.edges.push(Edge::new(suffix, lower));
        self.node.refresh_priority();
    }

    /// Absorb the child's only edge: labels concatenate and the grandchild
    /// takes the child's place one level up.
    pub(crate) fn merge(&mut self) {
        debug_assert!(self.node.value.is_none() && self.node.edges.len() == 1);
        let Some(grandchild) = self.node.edges.pop() else {
            return;
        };
        let depth = self.node.depth;

        tracing::trace!(prefix = %self.label, suffix = %grandchild.label, depth, "merge edge");
        self.label.push_str(&grandchild.label);
        self.node = grandchild.node;
        self.node.set_depth(depth);
    }
}
