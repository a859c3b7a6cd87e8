//! Reader-writer locked tree for shared use across threads.

use parking_lot::{RwLock, RwLockReadGuard};

use crate::common::Result;
use crate::index::btree::BPlusTree;

/// A [`BPlusTree`] behind a `parking_lot::RwLock`.
///
/// The tree itself does no synchronization. This wrapper applies the usual
/// policy: any number of concurrent readers, or one writer.
///
/// # Thread Safety
/// - `insert`: write lock
/// - `lookup`, `contains_key`, `len`, `read`: read lock
///
/// # Usage
/// ```
/// use std::sync::Arc;
/// use bptree::SharedBPlusTree;
///
/// let tree = Arc::new(SharedBPlusTree::new(4).unwrap());
/// tree.insert(1, "one".to_string()).unwrap();
///
/// let reader = Arc::clone(&tree);
/// let handle = std::thread::spawn(move || reader.lookup(&1));
/// assert_eq!(handle.join().unwrap(), Some("one".to_string()));
/// ```
#[derive(Debug)]
pub struct SharedBPlusTree<K, V> {
    inner: RwLock<BPlusTree<K, V>>,
}

impl<K, V> SharedBPlusTree<K, V> {
    /// Create an empty shared tree.
    ///
    /// # Errors
    /// - `Error::InvalidOrder` if `order` is too small
    pub fn new(order: usize) -> Result<Self> {
        Ok(Self::from_tree(BPlusTree::new(order)?))
    }

    /// Wrap an existing tree.
    pub fn from_tree(tree: BPlusTree<K, V>) -> Self {
        Self {
            inner: RwLock::new(tree),
        }
    }

    /// Hold the read lock for arbitrary read-only access.
    pub fn read(&self) -> RwLockReadGuard<'_, BPlusTree<K, V>> {
        self.inner.read()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Unwrap the tree.
    pub fn into_inner(self) -> BPlusTree<K, V> {
        self.inner.into_inner()
    }
}

impl<K: Ord + Clone, V> SharedBPlusTree<K, V> {
    /// Insert under the write lock.
    ///
    /// # Errors
    /// - `Error::DuplicateKey` if `key` is already present
    pub fn insert(&self, key: K, value: V) -> Result<()> {
        self.inner.write().insert(key, value)
    }
}

impl<K: Ord, V> SharedBPlusTree<K, V> {
    /// True if `key` is stored.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }
}

impl<K: Ord, V: Clone> SharedBPlusTree<K, V> {
    /// Look up `key` under the read lock, cloning the value out.
    pub fn lookup(&self, key: &K) -> Option<V> {
        self.inner.read().lookup(key).cloned()
    }
}
