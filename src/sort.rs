//! Edge ordering.

use std::cmp::Ordering;

use crate::edge::Edge;
use crate::node::Node;

/// How [`Tree::sort`](crate::Tree::sort) orders each node's edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum SortingTechnique {
    /// Labels in ascending order. Iteration then yields keys lexicographically.
    #[default]
    AscLabel,
    /// Labels in descending order.
    DescLabel,
    /// Heaviest subtrees first; ties keep their current order.
    ByPriority,
}

impl SortingTechnique {
    fn compare<V>(self, a: &Edge<V>, b: &Edge<V>) -> Ordering {
        match self {
            SortingTechnique::AscLabel => a.label.cmp(&b.label),
            SortingTechnique::DescLabel => b.label.cmp(&a.label),
            SortingTechnique::ByPriority => b.node.priority.cmp(&a.node.priority),
        }
    }
}

impl<V> Node<V> {
    pub(crate) fn sort(&mut self, technique: SortingTechnique) {
        // Stable, so re-applying a technique is a no-op.
        self.edges.sort_by(|a, b| technique.compare(a, b));
        for e in &mut self.edges {
            e.node.sort(technique);
        }
    }
}
