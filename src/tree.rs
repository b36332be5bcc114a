//! The tree and its public operations.

use std::borrow::Cow;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::matcher::{Params, Pattern};
use crate::node::Node;
use crate::sort::SortingTechnique;

/// A PATRICIA tree mapping string keys to values.
///
/// Edges carry string labels, siblings never share a first character, and
/// chains of valueless single-child nodes are always compressed away.
pub struct Tree<V> {
    pub(crate) root: Node<V>,
    /// Nodes excluding the root.
    pub(crate) count: usize,
    pub(crate) config: Config,
}

/// Result of a dynamic lookup: the node reached and the parameters captured
/// on the way down.
#[derive(Debug)]
pub struct Match<'a, V> {
    pub node: &'a Node<V>,
    pub params: Params,
}

impl<'a, V> Match<'a, V> {
    #[inline]
    pub fn value(&self) -> Option<&'a V> {
        self.node.value()
    }
}

impl<V> Tree<V> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::with_config(Config::named(name))
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            root: Node::root(),
            count: 0,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[inline]
    pub fn root(&self) -> &Node<V> {
        &self.root
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn size(&self) -> usize {
        self.count + 1
    }

    /// Number of nodes, root excluded.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.count
    }

    /// Number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.root.priority
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total bytes held in edge labels.
    pub fn byte_size(&self) -> usize {
        self.root.label_bytes()
    }

    fn normalize<'k>(&self, key: &'k str) -> Cow<'k, str> {
        if self.config.case_insensitive {
            Cow::Owned(key.to_lowercase())
        } else {
            Cow::Borrowed(key)
        }
    }

    fn normalize_char(&self, c: char) -> char {
        if !self.config.case_insensitive {
            return c;
        }
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) => l,
            _ => c,
        }
    }

    fn after_mutation(&mut self) {
        if let Some(technique) = self.config.sort {
            self.root.sort(technique);
        }
    }

    /// Insert a value, returning the one it replaced.
    ///
    /// An empty key is ignored.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        if key.is_empty() {
            tracing::trace!(tree = %self.config.name, "ignoring empty key");
            return None;
        }
        let key = self.normalize(key);

        let mut created = 0;
        let old = self.root.insert(&key, value, &mut created);
        self.count += created;
        self.after_mutation();
        old
    }

    /// Like [`insert`](Self::insert), but an empty key is an error.
    pub fn try_insert(&mut self, key: &str, value: V) -> Result<Option<V>> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        Ok(self.insert(key, value))
    }

    /// Remove the value stored under exactly `key`.
    ///
    /// Placeholders are not interpreted: pass the key as it was inserted.
    /// Absent keys and valueless branching points are left alone.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        if key.is_empty() {
            return None;
        }
        let key = self.normalize(key);

        let mut dropped = 0;
        let old = self.root.remove(&key, &mut dropped)?;
        self.count -= dropped;
        self.after_mutation();
        Some(old)
    }

    /// Like [`remove`](Self::remove), but an absent key is an error.
    pub fn try_remove(&mut self, key: &str) -> Result<V> {
        self.remove(key).ok_or_else(|| Error::NotFound {
            key: key.to_owned(),
        })
    }

    /// Find the node reached by consuming exactly `key`.
    ///
    /// A branching point is a successful match even though it holds no value.
    /// The empty key reaches the root.
    pub fn get(&self, key: &str) -> Option<&Node<V>> {
        let key = self.normalize(key);
        self.root.resolve(&key, None, &mut Params::new())
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let key = self.normalize(key);
        let mut node = &mut self.root;
        let mut rest: &str = &key;
        while !rest.is_empty() {
            let i = node
                .edges
                .iter()
                .position(|e| rest.starts_with(e.label.as_str()))?;
            rest = &rest[node.edges[i].label.len()..];
            node = &mut node.edges[i].node;
        }
        node.value.as_mut()
    }

    /// Whether a value is stored under exactly `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some_and(|n| n.value.is_some())
    }

    /// Find a node, reading labels as templates.
    ///
    /// Every `placeholder` in a label opens a named segment closed by
    /// `delimiter`; the matching input segment (up to the next `delimiter`)
    /// is captured under that name. When a name repeats along the path the
    /// deeper capture wins. Passing the same character twice turns the lookup
    /// into a literal one.
    ///
    /// Literal edges win over placeholder edges, but a literal path that
    /// dead-ends falls back to its placeholder siblings. With case folding on,
    /// `placeholder` and `delimiter` are folded like the key.
    pub fn get_dynamic(
        &self,
        key: &str,
        placeholder: char,
        delimiter: char,
    ) -> Option<Match<'_, V>> {
        let key = self.normalize(key);
        let pattern = Pattern::new(
            self.normalize_char(placeholder),
            self.normalize_char(delimiter),
        );
        let mut params = Params::new();
        let node = self.root.resolve(&key, Some(&pattern), &mut params)?;
        Some(Match { node, params })
    }

    /// Reorder every node's edges. Shape, values and lookups are unaffected.
    pub fn sort(&mut self, technique: SortingTechnique) {
        tracing::debug!(tree = %self.config.name, ?technique, "sorting");
        self.root.sort(technique);
    }

    /// Depth-first `(key, value)` pairs in current edge order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            stack: vec![(String::new(), &self.root)],
        }
    }
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for Tree<V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            count: self.count,
            config: self.config.clone(),
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Tree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'k, V> FromIterator<(&'k str, V)> for Tree<V> {
    fn from_iter<I: IntoIterator<Item = (&'k str, V)>>(iter: I) -> Self {
        let mut tree = Tree::new();
        for (k, v) in iter {
            tree.insert(k, v);
        }
        tree
    }
}

pub struct Iter<'a, V> {
    stack: Vec<(String, &'a Node<V>)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, node)) = self.stack.pop() {
            for e in node.edges.iter().rev() {
                let mut child_key = String::with_capacity(key.len() + e.label.len());
                child_key.push_str(&key);
                child_key.push_str(&e.label);
                self.stack.push((child_key, &e.node));
            }
            if let Some(value) = &node.value {
                return Some((key, value));
            }
        }
        None
    }
}
