//! Reference model of first-fit placement for property tests.
//!
//! [`LiveModel`] shadows an allocator's live chunks as plain byte ranges
//! keyed by slot index and computes, independently of the chunk table,
//! where a first-fit allocator must place the next request. [`arb_ops`]
//! generates random allocate/free interleavings to drive both.

use std::ops::Range;

use indexmap::IndexMap;
use proptest::prelude::*;

/// One step of a generated workload.
#[derive(Clone, Debug)]
pub enum Op {
    /// Allocate `len` bytes (alignment 1).
    Alloc { len: usize },
    /// Free live allocation number `pick % live count`.
    Free { pick: usize },
}

/// Workloads of `ops` steps with allocation sizes in `1..=max_len`.
///
/// Allocations are weighted 3:2 over frees so the arena fills up and
/// both exhaustion paths get exercised.
pub fn arb_ops(max_len: usize, ops: Range<usize>) -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        3 => (1..=max_len).prop_map(|len| Op::Alloc { len }),
        2 => any::<usize>().prop_map(|pick| Op::Free { pick }),
    ];
    proptest::collection::vec(op, ops)
}

/// Live allocations as `slot index -> byte range`, in allocation order.
#[derive(Clone, Debug, Default)]
pub struct LiveModel {
    live: IndexMap<usize, Range<usize>>,
}

impl LiveModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Record a new allocation. Panics if the slot is already live.
    pub fn insert(&mut self, index: usize, range: Range<usize>) {
        let previous = self.live.insert(index, range);
        assert!(previous.is_none(), "slot {index} handed out twice");
    }

    /// Forget the allocation chosen by `pick`, returning its slot and range.
    pub fn remove_picked(&mut self, pick: usize) -> Option<(usize, Range<usize>)> {
        if self.live.is_empty() {
            return None;
        }
        self.live.swap_remove_index(pick % self.live.len())
    }

    pub fn get(&self, index: usize) -> Option<&Range<usize>> {
        self.live.get(&index)
    }

    /// Live ranges sorted by start address.
    pub fn sorted_ranges(&self) -> Vec<Range<usize>> {
        let mut ranges: Vec<_> = self.live.values().cloned().collect();
        ranges.sort_by_key(|r| r.start);
        ranges
    }

    /// Where a first-fit allocator must put `len` bytes, if anywhere.
    pub fn first_fit(&self, len: usize, capacity: usize) -> Option<usize> {
        let mut end = 0;
        for range in self.sorted_ranges() {
            if range.start - end >= len {
                return Some(end);
            }
            end = range.end;
        }
        (capacity - end >= len).then_some(end)
    }

    /// Length of the largest free gap, including the tail.
    pub fn largest_gap(&self, capacity: usize) -> usize {
        let mut end = 0;
        let mut largest = 0;
        for range in self.sorted_ranges() {
            largest = largest.max(range.start - end);
            end = range.end;
        }
        largest.max(capacity - end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fit_prefers_lowest_gap() {
        let mut model = LiveModel::new();
        model.insert(0, 4..8);
        model.insert(1, 10..16);
        assert_eq!(model.first_fit(4, 16), Some(0));
        assert_eq!(model.first_fit(2, 16), Some(0));
        assert_eq!(model.first_fit(5, 16), None);
        assert_eq!(model.largest_gap(16), 4);
    }

    #[test]
    fn tail_gap_counts() {
        let mut model = LiveModel::new();
        model.insert(0, 0..4);
        assert_eq!(model.first_fit(12, 16), Some(4));
        assert_eq!(model.largest_gap(16), 12);
    }

    #[test]
    fn remove_picked_on_empty_model() {
        let mut model = LiveModel::new();
        assert!(model.remove_picked(7).is_none());
    }

    #[test]
    #[should_panic(expected = "handed out twice")]
    fn duplicate_slot_panics() {
        let mut model = LiveModel::new();
        model.insert(3, 0..1);
        model.insert(3, 1..2);
    }
}
