//! Human-readable tree dump for debugging.

use std::fmt::Debug;

use crate::common::NodeId;
use crate::index::btree::node::Node;
use crate::index::btree::BPlusTree;

const INDENT: &str = "    ";

impl<K: Debug, V: Debug> BPlusTree<K, V> {
    /// Render the tree depth-first in preorder.
    ///
    /// Each node is one line of keys, indented four spaces per level. Leaves
    /// add a second line with their values.
    ///
    /// ```
    /// use bptree::BPlusTree;
    ///
    /// let mut tree = BPlusTree::new(2).unwrap();
    /// for k in [5, 10, 15] {
    ///     tree.insert(k, k * 10).unwrap();
    /// }
    ///
    /// assert_eq!(
    ///     tree.dump(),
    ///     "[10]\n    [5]\n    [50]\n    [10, 15]\n    [100, 150]\n"
    /// );
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let indent = INDENT.repeat(depth);

        match self.node(id) {
            Node::Internal(internal) => {
                out.push_str(&format!("{}{:?}\n", indent, internal.keys));
                for &child in &internal.children {
                    self.dump_node(child, depth + 1, out);
                }
            }
            Node::Leaf(leaf) => {
                let keys: Vec<&K> = leaf.keys().collect();
                let values: Vec<&V> = leaf.values().collect();
                out.push_str(&format!("{}{:?}\n", indent, keys));
                out.push_str(&format!("{}{:?}\n", indent, values));
            }
        }
    }
}
