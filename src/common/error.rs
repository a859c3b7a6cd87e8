//! Error types for the B+-tree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors returned by the tree.
///
/// Node overflow and split propagation are internal control flow and never
/// surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// `insert` was called with a key that is already stored.
    ///
    /// The tree is left untouched.
    #[error("Key already exists in the tree")]
    DuplicateKey,

    /// The tree was constructed with an order below the minimum.
    #[error("Invalid order {order}: must be at least {min}")]
    InvalidOrder { order: usize, min: usize },

    /// A structural check found the tree in an inconsistent state.
    ///
    /// Only produced by `BPlusTree::check_invariants`.
    #[error("Tree invariant violated: {0}")]
    InvariantViolation(String),
}
