//! B+-tree node model.
//!
//! A [`Node`] is either a [`LeafNode`] holding `(key, value)` entries or an
//! [`InternalNode`] holding separator keys and child handles. Nodes only
//! provide ordered insertion and the split arithmetic; deciding *when* to
//! split and re-linking parents is the insertion engine's job.
//!
//! # Child boundaries
//! ```text
//!            [ k0 | k1 | ... | k(n-1) ]
//!           /     |     |          \
//!     key < k0  key < k1  ...   key >= k(n-1)
//! ```
//! Child `i` (for `i < n`) owns keys strictly below `keys[i]`; the last child
//! owns everything `>= keys[n-1]`.

use crate::common::NodeId;

/// Minimum number of entries a non-root leaf holds after a split.
#[inline]
pub(crate) fn min_leaf_entries(order: usize) -> usize {
    (order + 1) / 2
}

/// Minimum number of separator keys a non-root internal node holds after a split.
#[inline]
pub(crate) fn min_internal_keys(order: usize) -> usize {
    order / 2
}

/// A node stored in the tree's arena.
#[derive(Debug)]
pub(crate) enum Node<K, V> {
    Leaf(LeafNode<K, V>),
    Internal(InternalNode<K>),
}

impl<K, V> Node<K, V> {
    /// Number of keys held (entries for a leaf, separators for an internal node).
    pub(crate) fn key_count(&self) -> usize {
        match self {
            Node::Leaf(leaf) => leaf.len(),
            Node::Internal(internal) => internal.len(),
        }
    }

    /// True iff one more key fits without exceeding `order`.
    #[inline]
    pub(crate) fn has_room(&self, order: usize) -> bool {
        self.key_count() < order
    }
}

/// A leaf: entries strictly increasing by key.
#[derive(Debug)]
pub(crate) struct LeafNode<K, V> {
    pub(crate) entries: Vec<(K, V)>,
}

impl<K, V> LeafNode<K, V> {
    /// Create an empty leaf (the initial root).
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: Ord, V> LeafNode<K, V> {
    /// Insert an entry before the first key greater than `key`, or append.
    ///
    /// The caller guarantees `key` is not already present.
    pub(crate) fn insert_entry(&mut self, key: K, value: V) {
        let pos = self
            .entries
            .iter()
            .position(|(k, _)| key < *k)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, (key, value));
    }

    /// Exact-match scan.
    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl<K: Ord + Clone, V> LeafNode<K, V> {
    /// Split an overflowing leaf holding `order + 1` entries.
    ///
    /// `self` keeps the first `floor((order + 1) / 2)` entries and the rest
    /// move to the returned right leaf. The separator is a copy of the right
    /// leaf's first key, which stays in the right leaf.
    pub(crate) fn split(&mut self, order: usize) -> (K, LeafNode<K, V>) {
        debug_assert_eq!(self.entries.len(), order + 1);

        let right = LeafNode {
            entries: self.entries.split_off(min_leaf_entries(order)),
        };
        let separator = right.entries[0].0.clone();

        (separator, right)
    }
}

/// An internal node: `n` separator keys and `n + 1` children.
#[derive(Debug)]
pub(crate) struct InternalNode<K> {
    pub(crate) keys: Vec<K>,
    pub(crate) children: Vec<NodeId>,
}

impl<K> InternalNode<K> {
    /// Create a node with a single separator between two children.
    ///
    /// This is the shape of a freshly grown root.
    pub(crate) fn new(separator: K, left: NodeId, right: NodeId) -> Self {
        Self {
            keys: vec![separator],
            children: vec![left, right],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<K: Ord> InternalNode<K> {
    /// Insert a separator after a child split.
    ///
    /// The child pointer at the separator's position is replaced with `left`
    /// and `right` is inserted right after it, so the old single pointer
    /// becomes two pointers bracketing `key`.
    pub(crate) fn insert_separator(&mut self, key: K, right: NodeId, left: NodeId) {
        let pos = self
            .keys
            .iter()
            .position(|k| key < *k)
            .unwrap_or(self.keys.len());
        self.keys.insert(pos, key);
        self.children[pos] = left;
        self.children.insert(pos + 1, right);
    }

    /// Index of the child whose subtree owns `key`.
    ///
    /// # Panics
    /// Panics if the node holds no separator keys. Splits never produce such
    /// a node, so hitting this means the tree is corrupt.
    pub(crate) fn child_index(&self, key: &K) -> usize {
        let last = match self.keys.last() {
            Some(last) => last,
            None => unreachable!("internal node has no separator keys"),
        };

        if key >= last {
            return self.keys.len();
        }

        match self.keys.iter().position(|k| key < k) {
            Some(i) => i,
            None => unreachable!("no separator above a key below the last separator"),
        }
    }

    /// Handle of the child whose subtree owns `key`.
    #[inline]
    pub(crate) fn child_for(&self, key: &K) -> NodeId {
        self.children[self.child_index(key)]
    }

    /// Split an overflowing internal node holding `order + 1` keys.
    ///
    /// `self` keeps keys `[0, floor(order / 2))` and one more child than keys.
    /// The key at `floor(order / 2)` is promoted and removed from both halves.
    /// The returned right node takes the remaining keys and children.
    pub(crate) fn split(&mut self, order: usize) -> (K, InternalNode<K>) {
        debug_assert_eq!(self.keys.len(), order + 1);
        debug_assert_eq!(self.children.len(), order + 2);

        let left_count = min_internal_keys(order);
        let right = InternalNode {
            keys: self.keys.split_off(left_count + 1),
            children: self.children.split_off(left_count + 1),
        };

        match self.keys.pop() {
            Some(promoted) => (promoted, right),
            None => unreachable!("overflowing internal node has no middle key"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_with(keys: &[i32]) -> LeafNode<i32, String> {
        let mut leaf = LeafNode::new();
        for &k in keys {
            leaf.insert_entry(k, format!("v{}", k));
        }
        leaf
    }

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_insert_entry_keeps_order() {
        let leaf = leaf_with(&[30, 10, 20, 5, 25]);

        let keys: Vec<i32> = leaf.keys().copied().collect();
        assert_eq!(keys, vec![5, 10, 20, 25, 30]);
        assert_eq!(leaf.get(&20), Some(&"v20".to_string()));
        assert_eq!(leaf.get(&21), None);
    }

    #[test]
    fn test_has_room() {
        let node: Node<i32, String> = Node::Leaf(leaf_with(&[1, 2]));
        assert!(node.has_room(3));
        assert!(!node.has_room(2));

        let node: Node<i32, String> = Node::Internal(InternalNode::new(5, NodeId::new(0), NodeId::new(1)));
        assert!(node.has_room(2));
        assert!(!node.has_room(1));
    }

    #[test]
    fn test_insert_separator_relinks_children() {
        // [10, 30] with children a, b, c; child b (10..30) split into b', d at 20
        let mut node = InternalNode {
            keys: vec![10, 30],
            children: ids(&[0, 1, 2]),
        };

        node.insert_separator(20, NodeId::new(3), NodeId::new(4));

        assert_eq!(node.keys, vec![10, 20, 30]);
        assert_eq!(node.children, ids(&[0, 4, 3, 2]));
    }

    #[test]
    fn test_insert_separator_at_end() {
        let mut node = InternalNode::new(10, NodeId::new(0), NodeId::new(1));

        node.insert_separator(20, NodeId::new(2), NodeId::new(1));

        assert_eq!(node.keys, vec![10, 20]);
        assert_eq!(node.children, ids(&[0, 1, 2]));
    }

    #[test]
    fn test_child_index_boundaries() {
        let node = InternalNode {
            keys: vec![10, 20, 30],
            children: ids(&[0, 1, 2, 3]),
        };

        assert_eq!(node.child_index(&5), 0);
        assert_eq!(node.child_index(&10), 1); // equal goes right
        assert_eq!(node.child_index(&19), 1);
        assert_eq!(node.child_index(&20), 2);
        assert_eq!(node.child_index(&30), 3);
        assert_eq!(node.child_index(&99), 3);
        assert_eq!(node.child_for(&25), NodeId::new(2));
    }

    #[test]
    #[should_panic(expected = "no separator keys")]
    fn test_child_index_empty_node_panics() {
        let node: InternalNode<i32> = InternalNode {
            keys: vec![],
            children: ids(&[0]),
        };
        node.child_index(&1);
    }

    #[test]
    fn test_leaf_split_copies_separator() {
        // order 2: 3 entries -> 1 left, 2 right
        let mut left = leaf_with(&[5, 10, 15]);
        let (sep, right) = left.split(2);

        assert_eq!(sep, 10);
        assert_eq!(left.keys().copied().collect::<Vec<_>>(), vec![5]);
        assert_eq!(right.keys().copied().collect::<Vec<_>>(), vec![10, 15]);
        assert_eq!(right.get(&10), Some(&"v10".to_string()));
    }

    #[test]
    fn test_leaf_split_even_overflow() {
        // order 3: 4 entries -> 2 left, 2 right
        let mut left = leaf_with(&[1, 2, 3, 4]);
        let (sep, right) = left.split(3);

        assert_eq!(sep, 3);
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
    }

    #[test]
    fn test_internal_split_moves_separator() {
        // order 4: 5 keys -> left 2 keys, promote 1, right 2 keys
        let mut left = InternalNode {
            keys: vec![10, 20, 30, 40, 50],
            children: ids(&[0, 1, 2, 3, 4, 5]),
        };

        let (promoted, right) = left.split(4);

        assert_eq!(promoted, 30);
        assert_eq!(left.keys, vec![10, 20]);
        assert_eq!(left.children, ids(&[0, 1, 2]));
        assert_eq!(right.keys, vec![40, 50]);
        assert_eq!(right.children, ids(&[3, 4, 5]));
    }

    #[test]
    fn test_internal_split_order_two() {
        // order 2: 3 keys -> left 1 key, promote 1, right 1 key
        let mut left = InternalNode {
            keys: vec![10, 20, 30],
            children: ids(&[0, 1, 2, 3]),
        };

        let (promoted, right) = left.split(2);

        assert_eq!(promoted, 20);
        assert_eq!(left.keys, vec![10]);
        assert_eq!(left.children, ids(&[0, 1]));
        assert_eq!(right.keys, vec![30]);
        assert_eq!(right.children, ids(&[2, 3]));
    }

    #[test]
    fn test_minimum_fill() {
        assert_eq!(min_leaf_entries(2), 1);
        assert_eq!(min_leaf_entries(3), 2);
        assert_eq!(min_leaf_entries(4), 2);
        assert_eq!(min_internal_keys(2), 1);
        assert_eq!(min_internal_keys(5), 2);
    }
}
