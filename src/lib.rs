//! bptree - An in-memory B+-tree index.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          BPlusTree                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │   insert(k, v)                       lookup(&k)             │
//! │   duplicate check ─▶ descend         descend ─▶ leaf scan   │
//! │                      │                                      │
//! │                      ▼                                      │
//! │        leaf split (copy-up) ─▶ internal split (move-up)     │
//! │                                 │                           │
//! │                                 ▼                           │
//! │                         root growth (+1 level)              │
//! ├─────────────────────────────────────────────────────────────┤
//! │   Node arena: Vec<Node>, children referenced by NodeId      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Error, config)
//! - [`index`] - Index structures (B+-tree)
//!
//! # Quick Start
//! ```
//! use bptree::{BPlusTree, Error};
//!
//! let mut tree = BPlusTree::new(4).unwrap();
//! tree.insert("apple", 1).unwrap();
//! tree.insert("pear", 2).unwrap();
//!
//! assert_eq!(tree.lookup(&"apple"), Some(&1));
//! assert_eq!(tree.insert("pear", 3), Err(Error::DuplicateKey));
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_ORDER, MIN_ORDER};
pub use common::{Error, NodeId, Result};

pub use index::btree::{BPlusTree, SharedBPlusTree, StatsSnapshot, TreeStats};
