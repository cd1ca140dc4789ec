//! The contract shared by every collision strategy.

use crate::error::TableError;

/// Where an insert put its key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Placement {
    /// Stored in its empty home slot.
    Home,
    /// Stored away from its home slot (tree child, list tail, or another
    /// open-addressed slot).
    Overflow,
    /// Already present along the placement path; nothing was stored.
    Duplicate,
}

/// Word and overflow counters a strategy judges occupancy from.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Counts {
    pub words: usize,
    pub overflow: usize,
    pub capacity: usize,
}

/// Bucket storage plus the placement, lookup and drain rules of one
/// collision-resolution policy.
///
/// A strategy owns its backing array and every key stored in it. It does
/// no bookkeeping of its own: `HashTable` keeps the counters and decides
/// when to grow.
pub trait CollisionStrategy: Sized {
    /// Owned keys in the order a resize re-inserts them.
    type Drain: Iterator<Item = Box<str>>;

    /// Occupancy above which the table grows.
    const MAX_OCCUPANCY: f64;

    /// Allocates an empty store with `capacity` home slots.
    fn with_capacity(capacity: usize) -> Result<Self, TableError>;

    /// Number of home slots.
    fn capacity(&self) -> usize;

    /// Places `key`, or drops it if the placement path already holds it.
    fn insert(&mut self, key: Box<str>) -> Placement;

    /// 1-based number of key comparisons needed to find `key`.
    fn search(&self, key: &str) -> Option<usize>;

    /// Load ratio this strategy grows on.
    fn occupancy(counts: Counts) -> f64;

    /// Consumes the store, yielding every key exactly once.
    fn drain(self) -> Self::Drain;
}

/// Allocates `capacity` empty slots, reporting allocation failure instead
/// of aborting.
pub(crate) fn empty_slots<T>(capacity: usize) -> Result<Vec<Option<T>>, TableError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| TableError::OutOfMemory { slots: capacity })?;
    slots.resize_with(capacity, || None);
    Ok(slots)
}

/// Ratio of overflow placements to stored words; used by both chaining
/// strategies.
pub(crate) fn chained_fraction(counts: Counts) -> f64 {
    if counts.words == 0 {
        return 0.0;
    }
    counts.overflow as f64 / counts.words as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: A fresh slot vector has exactly `capacity` empty entries.
    #[test]
    fn empty_slots_are_empty() {
        let slots = empty_slots::<Box<str>>(31).unwrap();
        assert_eq!(slots.len(), 31);
        assert!(slots.iter().all(Option::is_none));
    }

    /// Invariant: An impossible reservation surfaces as `OutOfMemory`.
    #[test]
    fn impossible_reservation_is_reported() {
        let err = empty_slots::<u64>(usize::MAX).unwrap_err();
        assert_eq!(err, TableError::OutOfMemory { slots: usize::MAX });
    }

    /// Invariant: The chained fraction is 0 for an empty table.
    #[test]
    fn chained_fraction_of_empty_table() {
        assert_eq!(chained_fraction(Counts::default()), 0.0);
        let c = Counts { words: 4, overflow: 3, capacity: 31 };
        assert_eq!(chained_fraction(c), 0.75);
    }
}
