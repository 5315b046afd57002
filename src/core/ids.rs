//! Compacting quote identifier allocation.

use std::collections::BTreeSet;

use crate::types::QuoteId;

/// High-water-mark counter plus a pool of released ids.
///
/// Every id in `1..=high_water_mark` is either live (held by a stored quote)
/// or in the free pool, never both. Ids above the mark are neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdPool {
    high_water: QuoteId,
    free: BTreeSet<QuoteId>,
}

impl IdPool {
    /// Creates an empty pool whose first allocation is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out a released id if one exists, else bumps the counter.
    ///
    /// The smallest released id is reused first.
    pub fn allocate(&mut self) -> QuoteId {
        if let Some(id) = self.free.pop_first() {
            return id;
        }
        self.high_water += 1;
        self.high_water
    }

    /// Returns a live id to the pool.
    ///
    /// Releasing the current high-water mark shrinks the counter past it and
    /// past any contiguous run of trailing ids that are already free.
    pub fn release(&mut self, id: QuoteId) {
        debug_assert!(id >= 1 && id <= self.high_water, "release of unissued id {id}");
        debug_assert!(!self.free.contains(&id), "double release of id {id}");

        if id != self.high_water {
            self.free.insert(id);
            return;
        }

        self.high_water -= 1;
        while self.high_water > 0 && self.free.remove(&self.high_water) {
            self.high_water -= 1;
        }
    }

    /// Largest id issued by increment that has not been compacted away.
    pub fn high_water_mark(&self) -> QuoteId {
        self.high_water
    }

    /// Released ids awaiting reuse, ascending.
    pub fn free_ids(&self) -> impl Iterator<Item = QuoteId> + '_ {
        self.free.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::IdPool;

    #[test]
    fn allocates_sequentially_from_one() {
        let mut pool = IdPool::new();
        assert_eq!(pool.allocate(), 1);
        assert_eq!(pool.allocate(), 2);
        assert_eq!(pool.allocate(), 3);
        assert_eq!(pool.high_water_mark(), 3);
    }

    #[test]
    fn interior_release_is_reused_before_counter_grows() {
        let mut pool = IdPool::new();
        for _ in 0..4 {
            pool.allocate();
        }
        pool.release(2);
        assert_eq!(pool.free_ids().collect::<Vec<_>>(), vec![2]);
        assert_eq!(pool.allocate(), 2);
        assert_eq!(pool.allocate(), 5);
    }

    #[test]
    fn releasing_the_mark_shrinks_past_trailing_free_run() {
        let mut pool = IdPool::new();
        for _ in 0..5 {
            pool.allocate();
        }
        pool.release(3);
        pool.release(4);
        assert_eq!(pool.high_water_mark(), 5);

        pool.release(5);
        assert_eq!(pool.high_water_mark(), 2);
        assert_eq!(pool.free_ids().count(), 0);
        assert_eq!(pool.allocate(), 3);
    }

    #[test]
    fn releasing_everything_resets_to_empty() {
        let mut pool = IdPool::new();
        for _ in 0..3 {
            pool.allocate();
        }
        pool.release(1);
        pool.release(3);
        pool.release(2);
        assert_eq!(pool, IdPool::new());
        assert_eq!(pool.allocate(), 1);
    }

    #[test]
    fn smallest_free_id_is_picked_first() {
        let mut pool = IdPool::new();
        for _ in 0..6 {
            pool.allocate();
        }
        pool.release(4);
        pool.release(2);
        assert_eq!(pool.allocate(), 2);
        assert_eq!(pool.allocate(), 4);
    }
}
