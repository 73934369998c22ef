//! Benchmark workloads for the fitalloc allocator.
//!
//! - [`SensorArena`]: a 4 KiB arena with 64 chunk slots, sized like a
//!   sensor node's sample buffer.
//! - [`fragmented`]: fills an arena with mixed-size chunks and frees every
//!   other one, leaving a long live list of small gaps for first-fit to
//!   walk.
//! - [`occupancy`]: usage counters of a workload's arena.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fitalloc_arena::{AllocStats, ArrayPtr, FirstFitAllocator};

/// 4 KiB arena, 64 live chunks.
pub type SensorArena = FirstFitAllocator<4096, 64>;

/// Chunk sizes cycled through by [`fragmented`].
pub const FRAGMENT_SIZES: [usize; 4] = [16, 24, 40, 8];

/// Allocate `count` byte arrays cycling through [`FRAGMENT_SIZES`], then
/// free every other one.
///
/// Returns the handles that are still live, in address order. The gaps
/// left behind are at most 24 bytes, so any larger request has to walk the
/// whole list before landing in the tail.
pub fn fragmented(alloc: &mut SensorArena, count: usize) -> Vec<ArrayPtr<u8>> {
    let handles: Vec<ArrayPtr<u8>> = (0..count)
        .map(|i| alloc.allocate_array::<u8>(FRAGMENT_SIZES[i % FRAGMENT_SIZES.len()]))
        .collect();
    let mut live = Vec::with_capacity(count / 2 + 1);
    for (i, handle) in handles.into_iter().enumerate() {
        if i % 2 == 0 {
            live.push(handle);
        } else {
            let _ = alloc.free_array(handle);
        }
    }
    live
}

/// Bytes held by live chunks as a share of the arena, plus the raw counters.
pub fn occupancy(alloc: &SensorArena) -> (f64, AllocStats) {
    let stats = alloc.stats();
    (stats.bytes_used as f64 / alloc.capacity() as f64, stats)
}
