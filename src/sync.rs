//! Coarse-grained thread-safe wrapper.
//!
//! Every call holds the lock for its whole duration: mutations take it
//! exclusively, lookups share it. There is no per-node locking.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::Config;
use crate::matcher::Params;
use crate::sort::SortingTechnique;
use crate::tree::Tree;

/// A [`Tree`] behind a reader/writer lock.
pub struct SyncTree<V> {
    inner: RwLock<Tree<V>>,
}

impl<V> SyncTree<V> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            inner: RwLock::new(Tree::with_config(config)),
        }
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&self, key: &str, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    /// Remove the value stored under exactly `key`.
    pub fn remove(&self, key: &str) -> Option<V> {
        self.inner.write().remove(key)
    }

    pub fn sort(&self, technique: SortingTechnique) {
        self.inner.write().sort(technique);
    }

    /// Clone out the value stored under exactly `key`.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().get(key).and_then(|n| n.value().cloned())
    }

    /// Dynamic lookup; see [`Tree::get_dynamic`].
    ///
    /// The value is `None` when the key reaches a branching point.
    pub fn get_dynamic(
        &self,
        key: &str,
        placeholder: char,
        delimiter: char,
    ) -> Option<(Option<V>, Params)>
    where
        V: Clone,
    {
        let tree = self.inner.read();
        let m = tree.get_dynamic(key, placeholder, delimiter)?;
        Some((m.value().cloned(), m.params))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().contains_key(key)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes, root included.
    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    /// Shared access for several reads under one lock.
    pub fn read(&self) -> RwLockReadGuard<'_, Tree<V>> {
        self.inner.read()
    }

    /// Exclusive access for several mutations under one lock.
    pub fn write(&self) -> RwLockWriteGuard<'_, Tree<V>> {
        self.inner.write()
    }

    pub fn into_inner(self) -> Tree<V> {
        self.inner.into_inner()
    }
}

impl<V> Default for SyncTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Tree<V>> for SyncTree<V> {
    fn from(tree: Tree<V>) -> Self {
        Self {
            inner: RwLock::new(tree),
        }
    }
}
