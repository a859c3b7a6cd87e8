//! Configuration constants for the B+-tree.

/// Smallest order a tree may be constructed with.
///
/// An order of 1 would make an internal split produce a left node with
/// zero separator keys, and descent needs at least one separator per
/// internal node to pick a child.
pub const MIN_ORDER: usize = 2;

/// Order used by [`BPlusTree::default`](crate::BPlusTree).
///
/// Small enough that trees grow a few levels in tests, large enough that
/// most inserts are absorbed without splitting.
pub const DEFAULT_ORDER: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_valid() {
        assert!(DEFAULT_ORDER >= MIN_ORDER);
    }
}
