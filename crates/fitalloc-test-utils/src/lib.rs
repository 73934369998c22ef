//! Test utilities for fitalloc development.
//!
//! Provides element fixtures with observable construction and destruction
//! ([`fixtures`]), a byte-range overlap check, and a reference model of
//! first-fit placement for property tests ([`model`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod model;

use std::ops::Range;

use smallvec::SmallVec;

pub use fixtures::{Canary, DropCounter, SensorReading};
pub use model::{arb_ops, LiveModel, Op};

/// Panic if any two of `ranges` overlap.
///
/// Empty ranges never overlap anything.
pub fn assert_disjoint(ranges: impl IntoIterator<Item = Range<usize>>) {
    let mut sorted: SmallVec<[Range<usize>; 16]> =
        ranges.into_iter().filter(|r| !r.is_empty()).collect();
    sorted.sort_by_key(|r| r.start);
    for pair in sorted.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "chunks {:?} and {:?} overlap",
            pair[0],
            pair[1]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disjoint_ranges_pass() {
        assert_disjoint([4..8, 0..4, 8..9]);
        assert_disjoint([0..0, 0..4]);
    }

    #[test]
    #[should_panic(expected = "overlap")]
    fn overlapping_ranges_panic() {
        assert_disjoint([0..4, 3..6]);
    }
}
