//! Structural invariant checking.
//!
//! Used by tests and available to callers who want to assert a tree is
//! well-formed after a batch of inserts. Checks:
//! - keys strictly increasing within every node
//! - every key lies inside the range its parent's separators assign it
//! - internal nodes have one more child than keys, and at least one key
//! - no node holds more than `order` keys; non-root nodes hold at least
//!   the post-split minimum
//! - all leaves sit at the same depth, equal to `height()`
//! - the leaves hold exactly `len()` entries

use crate::common::{Error, NodeId, Result};
use crate::index::btree::node::{min_internal_keys, min_leaf_entries, Node};
use crate::index::btree::BPlusTree;

/// Key range a subtree must stay inside: `lower <= key < upper`.
struct Bounds<'a, K> {
    lower: Option<&'a K>,
    upper: Option<&'a K>,
}

impl<K: Ord> Bounds<'_, K> {
    fn contains(&self, key: &K) -> bool {
        self.lower.map_or(true, |lower| key >= lower) && self.upper.map_or(true, |upper| key < upper)
    }
}

/// Running totals gathered while walking the tree.
#[derive(Default)]
struct Walk {
    leaf_depth: Option<usize>,
    entries: usize,
}

fn violation(msg: String) -> Error {
    Error::InvariantViolation(msg)
}

fn strictly_increasing<'a, K: Ord + 'a>(keys: impl Iterator<Item = &'a K>) -> bool {
    let mut prev: Option<&K> = None;
    for key in keys {
        if prev.is_some_and(|p| p >= key) {
            return false;
        }
        prev = Some(key);
    }
    true
}

impl<K: Ord, V> BPlusTree<K, V> {
    /// Verify every structural invariant of the tree.
    ///
    /// # Errors
    /// - `Error::InvariantViolation` describing the first problem found
    pub fn check_invariants(&self) -> Result<()> {
        let mut walk = Walk::default();
        let bounds = Bounds {
            lower: None,
            upper: None,
        };

        self.check_node(self.root, 1, bounds, &mut walk)?;

        if walk.leaf_depth != Some(self.height) {
            return Err(violation(format!(
                "leaves at depth {:?}, height is {}",
                walk.leaf_depth, self.height
            )));
        }
        if walk.entries != self.len {
            return Err(violation(format!(
                "leaves hold {} entries, len is {}",
                walk.entries, self.len
            )));
        }

        Ok(())
    }

    fn check_node(&self, id: NodeId, depth: usize, bounds: Bounds<'_, K>, walk: &mut Walk) -> Result<()> {
        let is_root = id == self.root;

        match self.node(id) {
            Node::Leaf(leaf) => {
                let count = leaf.len();
                if count > self.order || (!is_root && count < min_leaf_entries(self.order)) {
                    return Err(violation(format!(
                        "{} holds {} entries, expected {}..={}",
                        id,
                        count,
                        min_leaf_entries(self.order),
                        self.order
                    )));
                }
                if !strictly_increasing(leaf.keys()) {
                    return Err(violation(format!("{} keys are not strictly increasing", id)));
                }
                if !leaf.keys().all(|k| bounds.contains(k)) {
                    return Err(violation(format!("{} holds a key outside its parent range", id)));
                }

                match walk.leaf_depth {
                    None => walk.leaf_depth = Some(depth),
                    Some(expected) if expected != depth => {
                        return Err(violation(format!(
                            "{} is at depth {}, other leaves at {}",
                            id, depth, expected
                        )));
                    }
                    Some(_) => {}
                }
                walk.entries += count;
            }
            Node::Internal(internal) => {
                let count = internal.len();
                if count == 0 {
                    return Err(violation(format!("{} has no separator keys", id)));
                }
                if internal.children.len() != count + 1 {
                    return Err(violation(format!(
                        "{} has {} keys but {} children",
                        id,
                        count,
                        internal.children.len()
                    )));
                }
                if count > self.order || (!is_root && count < min_internal_keys(self.order)) {
                    return Err(violation(format!(
                        "{} holds {} keys, expected {}..={}",
                        id,
                        count,
                        min_internal_keys(self.order),
                        self.order
                    )));
                }
                if !strictly_increasing(internal.keys.iter()) {
                    return Err(violation(format!("{} keys are not strictly increasing", id)));
                }
                if !internal.keys.iter().all(|k| bounds.contains(k)) {
                    return Err(violation(format!("{} holds a key outside its parent range", id)));
                }

                for (i, &child) in internal.children.iter().enumerate() {
                    let child_bounds = Bounds {
                        lower: if i == 0 { bounds.lower } else { Some(&internal.keys[i - 1]) },
                        upper: if i == count { bounds.upper } else { Some(&internal.keys[i]) },
                    };
                    self.check_node(child, depth + 1, child_bounds, walk)?;
                }
            }
        }

        Ok(())
    }
}
