//! B+-tree index.
//!
//! An in-memory ordered index with unique-key insertion and exact-match
//! lookup. Leaves hold every entry; internal nodes hold separator keys that
//! route the descent.
//!
//! # Components
//! - [`BPlusTree`] - Owns the node arena and the root handle
//! - `node` - Leaf/internal node model and split arithmetic
//! - `insert` - Recursive insertion with split propagation and root growth
//! - `lookup` - Descent-only exact-match search
//! - `dump` - Indented preorder rendering for debugging
//! - `validate` - Structural invariant checks
//! - [`TreeStats`] - Operation counters
//! - [`SharedBPlusTree`] - Reader-writer locked wrapper

mod dump;
mod insert;
mod lookup;
mod node;
mod shared;
mod stats;
mod tree;
mod validate;

pub use shared::SharedBPlusTree;
pub use stats::{StatsSnapshot, TreeStats};
pub use tree::BPlusTree;
