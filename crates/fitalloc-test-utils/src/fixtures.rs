//! Element types for allocator tests.
//!
//! - [`Canary`]: default value is a recognisable non-zero pattern, so a
//!   test can tell constructed memory from stale bytes.
//! - [`SensorReading`]: a small mixed-width record like the ones sensor
//!   nodes keep in their arenas.
//! - [`DropCounter`]: counts constructions and drops per thread.

use std::cell::Cell;

/// Word whose default value is `0xC0FF_EE00`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canary(pub u32);

impl Canary {
    pub const PATTERN: u32 = 0xC0FF_EE00;
}

impl Default for Canary {
    fn default() -> Self {
        Self(Self::PATTERN)
    }
}

/// A timestamped sample from one sensor channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SensorReading {
    pub timestamp: u32,
    pub value: i16,
    pub channel: u8,
    pub flags: u8,
}

thread_local! {
    static CONSTRUCTED: Cell<usize> = const { Cell::new(0) };
    static DROPPED: Cell<usize> = const { Cell::new(0) };
}

/// Counts how many instances were default-constructed and dropped.
///
/// Counters are thread-local, so tests running in parallel do not see
/// each other's instances. Call [`DropCounter::reset`] at the start of a
/// test.
#[derive(Debug, PartialEq, Eq)]
pub struct DropCounter {
    pub serial: usize,
}

impl DropCounter {
    /// Zero both counters for the current thread.
    pub fn reset() {
        CONSTRUCTED.with(|c| c.set(0));
        DROPPED.with(|c| c.set(0));
    }

    /// Instances default-constructed on this thread since the last reset.
    pub fn constructed() -> usize {
        CONSTRUCTED.with(Cell::get)
    }

    /// Instances dropped on this thread since the last reset.
    pub fn dropped() -> usize {
        DROPPED.with(Cell::get)
    }
}

impl Default for DropCounter {
    fn default() -> Self {
        let serial = CONSTRUCTED.with(|c| {
            let n = c.get();
            c.set(n + 1);
            n
        });
        Self { serial }
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        DROPPED.with(|c| c.set(c.get() + 1));
    }
}
