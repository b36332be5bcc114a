//! Tree vertices and the per-level insert/remove algorithms.

use crate::edge::Edge;
use crate::matcher::{common_prefix_len, Params, Pattern};

/// A vertex of the tree.
///
/// A node without a value is a pure branching point. Outside the root, such a
/// node always has at least two edges.
#[derive(Debug, Clone)]
pub struct Node<V> {
    pub(crate) value: Option<V>,
    pub(crate) edges: Vec<Edge<V>>,
    /// Valued nodes in this subtree, self included.
    pub(crate) priority: usize,
    pub(crate) depth: usize,
}

impl<V> Node<V> {
    pub(crate) fn root() -> Self {
        Self::branch(0)
    }

    pub(crate) fn branch(depth: usize) -> Self {
        Self {
            value: None,
            edges: Vec::new(),
            priority: 0,
            depth,
        }
    }

    pub(crate) fn leaf(value: V, depth: usize) -> Self {
        Self {
            value: Some(value),
            edges: Vec::new(),
            priority: 1,
            depth,
        }
    }

    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    #[inline]
    pub fn priority(&self) -> usize {
        self.priority
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub(crate) fn refresh_priority(&mut self) {
        let below: usize = self.edges.iter().map(|e| e.node.priority).sum();
        self.priority = usize::from(self.value.is_some()) + below;
    }

    /// Re-anchor this subtree at `depth`.
    pub(crate) fn set_depth(&mut self, depth: usize) {
        if self.depth == depth {
            return;
        }
        self.depth = depth;
        for e in &mut self.edges {
            e.node.set_depth(depth + 1);
        }
    }

    pub(crate) fn label_bytes(&self) -> usize {
        self.edges
            .iter()
            .map(|e| e.label.len() + e.node.label_bytes())
            .sum()
    }

    /// Insert `value` under the non-empty `key`, relative to this node.
    ///
    /// `created` is bumped by the number of nodes added. Returns the value that
    /// was replaced, if the key was already stored.
    pub(crate) fn insert(&mut self, key: &str, value: V, created: &mut usize) -> Option<V> {
        debug_assert!(!key.is_empty());

        // Siblings never share a first character, so at most one edge qualifies.
        let Some(i) = self
            .edges
            .iter()
            .position(|e| common_prefix_len(&e.label, key) > 0)
        else {
            tracing::trace!(label = key, depth = self.depth + 1, "append leaf");
            self.edges
                .push(Edge::new(key.to_owned(), Node::leaf(value, self.depth + 1)));
            *created += 1;
            self.priority += 1;
            return None;
        };

        let edge = &mut self.edges[i];
        let shared = common_prefix_len(&edge.label, key);
        let old = match (shared == key.len(), shared == edge.label.len()) {
            (true, true) => edge.node.value.replace(value),
            (false, true) => edge.node.insert(&key[shared..], value, created),
            (true, false) => {
                edge.split(shared);
                edge.node.value = Some(value);
                *created += 1;
                None
            }
            (false, false) => {
                edge.split(shared);
                let depth = edge.node.depth + 1;
                tracing::trace!(label = &key[shared..], depth, "append leaf");
                edge.node
                    .edges
                    .push(Edge::new(key[shared..].to_owned(), Node::leaf(value, depth)));
                *created += 2;
                None
            }
        };

        edge.node.refresh_priority();
        self.refresh_priority();
        old
    }

    /// Remove the value stored under `key`, relative to this node.
    ///
    /// Only whole labels are consumed. `dropped` is bumped by the number of
    /// nodes that disappear, whether removed outright or folded into a parent
    /// edge. This node itself is never merged here; its parent does that.
    pub(crate) fn remove(&mut self, key: &str, dropped: &mut usize) -> Option<V> {
        let i = self
            .edges
            .iter()
            .position(|e| key.starts_with(e.label.as_str()))?;
        let rest = &key[self.edges[i].label.len()..];

        let old = if rest.is_empty() {
            let target = &mut self.edges[i].node;
            let old = target.value.take()?;
            match target.edges.len() {
                0 => {
                    let gone = self.edges.remove(i);
                    tracing::trace!(label = %gone.label, "drop leaf");
                    *dropped += 1;
                }
                1 => {
                    self.edges[i].merge();
                    *dropped += 1;
                }
                _ => self.edges[i].node.refresh_priority(),
            }
            old
        } else {
            let old = self.edges[i].node.remove(rest, dropped)?;
            let child = &self.edges[i].node;
            if child.value.is_none() {
                match child.edges.len() {
                    0 => {
                        self.edges.remove(i);
                        *dropped += 1;
                    }
                    1 => {
                        self.edges[i].merge();
                        *dropped += 1;
                    }
                    _ => {}
                }
            }
            old
        };

        self.refresh_priority();
        Some(old)
    }

    /// Find the node reached by consuming all of `key` below this one.
    ///
    /// Literal labels are tried first. With a pattern, placeholder-bearing
    /// labels are tried next, in edge order. A branch that dead-ends further
    /// down is abandoned and its captures are rolled back before the next
    /// candidate is tried.
    pub(crate) fn resolve<'a>(
        &'a self,
        key: &str,
        pattern: Option<&Pattern>,
        params: &mut Params,
    ) -> Option<&'a Node<V>> {
        if key.is_empty() {
            return Some(self);
        }

        let Some(pattern) = pattern else {
            let e = self
                .edges
                .iter()
                .find(|e| key.starts_with(e.label.as_str()))?;
            return e.node.resolve(&key[e.label.len()..], None, params);
        };

        let saved = params.clone();
        let literal = self
            .edges
            .iter()
            .find(|e| !pattern.is_dynamic(&e.label) && key.starts_with(e.label.as_str()));
        if let Some(e) = literal {
            if let Some(found) = e.node.resolve(&key[e.label.len()..], Some(pattern), params) {
                return Some(found);
            }
            params.clone_from(&saved);
        }

        for e in self.edges.iter().filter(|e| pattern.is_dynamic(&e.label)) {
            let Some(consumed) = pattern.match_label(&e.label, key, params) else {
                continue;
            };
            if let Some(found) = e.node.resolve(&key[consumed..], Some(pattern), params) {
                return Some(found);
            }
            params.clone_from(&saved);
        }
        None
    }
}
