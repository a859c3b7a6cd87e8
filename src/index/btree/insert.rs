//! Insertion: recursive descent with split propagation.
//!
//! Each level of the descent reports back either [`Insertion::Absorbed`]
//! (nothing more to do) or [`Insertion::Split`] (the node divided in two and
//! the parent must add a separator). A split that reaches the root grows the
//! tree by one level.
//!
//! The left half of a split reuses the original node's arena slot, so the
//! parent's existing pointer already refers to it; `insert_separator` still
//! rewrites that pointer so the re-link does not depend on slot reuse.

use tracing::{debug, trace};

use crate::common::{Error, NodeId, Result};
use crate::index::btree::node::{InternalNode, Node};
use crate::index::btree::{BPlusTree, TreeStats};

/// A node that divided in two during insertion.
#[derive(Debug)]
pub(crate) struct Split<K> {
    /// Key the parent must insert between `left` and `right`.
    pub(crate) separator: K,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

/// Outcome of inserting into a subtree.
#[derive(Debug)]
pub(crate) enum Insertion<K> {
    /// The subtree took the entry without overflowing.
    Absorbed,
    /// The subtree's top node split; the caller must link the new node.
    Split(Split<K>),
}

impl<K: Ord + Clone, V> BPlusTree<K, V> {
    /// Insert a new key.
    ///
    /// # Errors
    /// - `Error::DuplicateKey` if `key` is already present; the tree is not
    ///   modified
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.find(&key).is_some() {
            TreeStats::bump(&self.stats.duplicate_rejections);
            debug!("rejected duplicate key");
            return Err(Error::DuplicateKey);
        }

        let root = self.root;
        if let Insertion::Split(split) = self.insert_into(root, key, value) {
            self.grow_root(split);
        }

        self.len += 1;
        TreeStats::bump(&self.stats.inserts);
        Ok(())
    }

    /// Insert into the subtree rooted at `id`.
    fn insert_into(&mut self, id: NodeId, key: K, value: V) -> Insertion<K> {
        let order = self.order;
        let had_room = self.node(id).has_room(order);

        match self.node_mut(id) {
            Node::Leaf(leaf) => {
                leaf.insert_entry(key, value);
            }
            Node::Internal(internal) => {
                let child = internal.child_for(&key);

                let split = match self.insert_into(child, key, value) {
                    Insertion::Absorbed => return Insertion::Absorbed,
                    Insertion::Split(split) => split,
                };

                match self.node_mut(id) {
                    Node::Internal(internal) => {
                        internal.insert_separator(split.separator, split.right, split.left)
                    }
                    Node::Leaf(_) => unreachable!("{} turned into a leaf during insertion", id),
                }
            }
        }

        if had_room {
            Insertion::Absorbed
        } else {
            Insertion::Split(self.split_node(id))
        }
    }

    /// Split a node holding `order + 1` keys into itself and a new right node.
    fn split_node(&mut self, id: NodeId) -> Split<K> {
        let order = self.order;

        let (separator, right) = match self.node_mut(id) {
            Node::Leaf(leaf) => {
                let (separator, right) = leaf.split(order);
                trace!(node = %id, left = leaf.len(), right = right.len(), "split leaf");
                TreeStats::bump(&self.stats.leaf_splits);
                (separator, Node::Leaf(right))
            }
            Node::Internal(internal) => {
                let (separator, right) = internal.split(order);
                trace!(node = %id, left = internal.len(), right = right.len(), "split internal node");
                TreeStats::bump(&self.stats.internal_splits);
                (separator, Node::Internal(right))
            }
        };

        let right = self.alloc(right);

        Split {
            separator,
            left: id,
            right,
        }
    }

    /// Put a new root above the two halves of a split root.
    fn grow_root(&mut self, split: Split<K>) {
        let root = InternalNode::new(split.separator, split.left, split.right);
        self.root = self.alloc(Node::Internal(root));
        self.height += 1;

        TreeStats::bump(&self.stats.root_splits);
        debug!(root = %self.root, height = self.height, "grew new root");
    }
}
