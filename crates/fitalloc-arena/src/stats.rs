//! Usage counters, compiled in with the `stats` feature.

use core::fmt;

/// Point-in-time usage of an allocator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Bytes covered by live chunks.
    pub bytes_used: usize,
    /// Number of live chunks.
    pub chunks_used: usize,
}

impl fmt::Display for AllocStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bytes in {} chunks",
            self.bytes_used, self.chunks_used
        )
    }
}
