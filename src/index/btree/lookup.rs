//! Lookup: descent-only exact-match retrieval.

use crate::index::btree::node::Node;
use crate::index::btree::{BPlusTree, TreeStats};

impl<K: Ord, V> BPlusTree<K, V> {
    /// Find the value stored under `key`.
    ///
    /// Never modifies the tree; absence is `None`, not an error.
    pub fn lookup(&self, key: &K) -> Option<&V> {
        TreeStats::bump(&self.stats.lookups);

        let found = self.find(key);
        if found.is_some() {
            TreeStats::bump(&self.stats.lookup_hits);
        }
        found
    }

    /// True if `key` is stored. Not counted in the lookup statistics.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Walk from the root to the leaf owning `key` and scan it.
    pub(crate) fn find(&self, key: &K) -> Option<&V> {
        let mut current = self.root;
        loop {
            match self.node(current) {
                Node::Internal(internal) => current = internal.child_for(key),
                Node::Leaf(leaf) => return leaf.get(key),
            }
        }
    }
}
