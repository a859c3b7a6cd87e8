//! The tree: arena ownership, construction and introspection.

use tracing::debug;

use crate::common::config::{DEFAULT_ORDER, MIN_ORDER};
use crate::common::{Error, NodeId, Result};
use crate::index::btree::node::{LeafNode, Node};
use crate::index::btree::TreeStats;

/// An in-memory B+-tree mapping unique keys to values.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │                      BPlusTree                       │
/// │  root: NodeId ──┐                                    │
/// │                 ▼                                    │
/// │  nodes: Vec<Node>  [Leaf] [Leaf] [Internal] ...      │
/// │                                                      │
/// │  Internal nodes hold child NodeIds into `nodes`.     │
/// └──────────────────────────────────────────────────────┘
/// ```
///
/// Nodes live in an arena and refer to each other by [`NodeId`]. Every node
/// has exactly one parent and nodes are never freed, so handles stay valid
/// for the lifetime of the tree.
///
/// # Thread Safety
/// None. Mutation takes `&mut self`; callers that need shared access wrap
/// the tree in a lock (see [`SharedBPlusTree`](crate::SharedBPlusTree)).
///
/// # Usage
/// ```
/// use bptree::{BPlusTree, Error};
///
/// let mut tree = BPlusTree::new(3)?;
/// tree.insert(10, "ten")?;
/// tree.insert(20, "twenty")?;
///
/// assert_eq!(tree.lookup(&10), Some(&"ten"));
/// assert_eq!(tree.lookup(&15), None);
/// assert_eq!(tree.insert(10, "again"), Err(Error::DuplicateKey));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug)]
pub struct BPlusTree<K, V> {
    /// Arena of all nodes ever created.
    pub(crate) nodes: Vec<Node<K, V>>,

    /// Handle of the current root.
    pub(crate) root: NodeId,

    /// Maximum number of keys a node may hold (immutable after construction).
    pub(crate) order: usize,

    /// Number of stored entries.
    pub(crate) len: usize,

    /// Number of levels, counting the leaf level.
    pub(crate) height: usize,

    /// Operation counters.
    pub(crate) stats: TreeStats,
}

impl<K, V> BPlusTree<K, V> {
    /// Create an empty tree whose nodes hold at most `order` keys.
    ///
    /// # Errors
    /// - `Error::InvalidOrder` if `order` is below [`MIN_ORDER`]
    pub fn new(order: usize) -> Result<Self> {
        if order < MIN_ORDER {
            return Err(Error::InvalidOrder {
                order,
                min: MIN_ORDER,
            });
        }

        debug!(order, "creating B+-tree");

        Ok(Self {
            nodes: vec![Node::Leaf(LeafNode::new())],
            root: NodeId::new(0),
            order,
            len: 0,
            height: 1,
            stats: TreeStats::new(),
        })
    }

    // ========================================================================
    // Public API: Introspection
    // ========================================================================

    /// Maximum number of keys per node.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels from root to leaves (1 for a lone leaf root).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get operation statistics.
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    // ========================================================================
    // Internal: Arena access
    // ========================================================================

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0]
    }

    /// Store a node and return its handle.
    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

impl<K, V> Default for BPlusTree<K, V> {
    fn default() -> Self {
        match Self::new(DEFAULT_ORDER) {
            Ok(tree) => tree,
            Err(_) => unreachable!("DEFAULT_ORDER is below MIN_ORDER"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_small_orders() {
        for order in 0..MIN_ORDER {
            let result: Result<BPlusTree<i32, i32>> = BPlusTree::new(order);
            assert_eq!(
                result.unwrap_err(),
                Error::InvalidOrder {
                    order,
                    min: MIN_ORDER
                }
            );
        }
    }

    #[test]
    fn test_new_tree_is_single_empty_leaf() {
        let tree: BPlusTree<i32, i32> = BPlusTree::new(MIN_ORDER).unwrap();

        assert_eq!(tree.order(), MIN_ORDER);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.node_count(), 1);
        assert!(matches!(tree.node(tree.root), Node::Leaf(leaf) if leaf.len() == 0));
    }

    #[test]
    fn test_default_uses_default_order() {
        let tree: BPlusTree<u64, ()> = BPlusTree::default();
        assert_eq!(tree.order(), DEFAULT_ORDER);
    }

    #[test]
    fn test_alloc_hands_out_sequential_ids() {
        let mut tree: BPlusTree<i32, i32> = BPlusTree::new(2).unwrap();

        let a = tree.alloc(Node::Leaf(LeafNode::new()));
        let b = tree.alloc(Node::Leaf(LeafNode::new()));

        assert_eq!(a, NodeId::new(1));
        assert_eq!(b, NodeId::new(2));
        assert_eq!(tree.node_count(), 3);
    }
}
