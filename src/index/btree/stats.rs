//! Tree operation statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracked by a [`BPlusTree`](crate::BPlusTree).
///
/// Fields are atomic so read-only operations (`lookup` takes `&self`) can
/// still count themselves without interior-mutability wrappers.
///
/// # Memory Ordering
/// All operations use `Ordering::Relaxed`: counters are independent and only
/// need atomicity.
///
/// # Example
/// ```
/// use bptree::BPlusTree;
///
/// let mut tree = BPlusTree::new(3).unwrap();
/// tree.insert(1, "one").unwrap();
/// tree.lookup(&1);
/// tree.lookup(&2);
///
/// let snapshot = tree.stats().snapshot();
/// assert_eq!(snapshot.inserts, 1);
/// assert_eq!(snapshot.lookups, 2);
/// assert_eq!(snapshot.lookup_hits, 1);
/// ```
#[derive(Debug)]
pub struct TreeStats {
    /// Number of successful insertions.
    pub inserts: AtomicU64,

    /// Number of insertions rejected because the key existed.
    pub duplicate_rejections: AtomicU64,

    /// Number of `lookup` calls.
    pub lookups: AtomicU64,

    /// Number of `lookup` calls that found the key.
    pub lookup_hits: AtomicU64,

    /// Number of leaf splits.
    pub leaf_splits: AtomicU64,

    /// Number of internal node splits.
    pub internal_splits: AtomicU64,

    /// Number of times a split reached the root and the tree grew a level.
    pub root_splits: AtomicU64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            inserts: AtomicU64::new(0),
            duplicate_rejections: AtomicU64::new(0),
            lookups: AtomicU64::new(0),
            lookup_hits: AtomicU64::new(0),
            leaf_splits: AtomicU64::new(0),
            internal_splits: AtomicU64::new(0),
            root_splits: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Fraction of lookups that found their key (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        self.snapshot().hit_rate()
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            duplicate_rejections: self.duplicate_rejections.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookup_hits: self.lookup_hits.load(Ordering::Relaxed),
            leaf_splits: self.leaf_splits.load(Ordering::Relaxed),
            internal_splits: self.internal_splits.load(Ordering::Relaxed),
            root_splits: self.root_splits.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.duplicate_rejections.store(0, Ordering::Relaxed);
        self.lookups.store(0, Ordering::Relaxed);
        self.lookup_hits.store(0, Ordering::Relaxed);
        self.leaf_splits.store(0, Ordering::Relaxed);
        self.internal_splits.store(0, Ordering::Relaxed);
        self.root_splits.store(0, Ordering::Relaxed);
    }
}

impl Default for TreeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of tree statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub inserts: u64,
    pub duplicate_rejections: u64,
    pub lookups: u64,
    pub lookup_hits: u64,
    pub leaf_splits: u64,
    pub internal_splits: u64,
    pub root_splits: u64,
}

impl StatsSnapshot {
    /// Fraction of lookups that found their key (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / self.lookups as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, duplicates: {}, lookups: {}, hit_rate: {:.2}%, leaf_splits: {}, internal_splits: {}, root_splits: {} }}",
            self.inserts,
            self.duplicate_rejections,
            self.lookups,
            self.hit_rate() * 100.0,
            self.leaf_splits,
            self.internal_splits,
            self.root_splits
        )
    }
}
