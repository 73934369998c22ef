//! Allocator configuration parameters.

use fitalloc_core::UintWidth;

use crate::error::ConfigError;

/// Alignment of the arena buffer itself.
///
/// Element types with a stricter alignment are rejected at compile time,
/// since no offset inside the buffer could place them naturally.
pub const ARENA_ALIGN: usize = 16;

/// Compile-time description of one allocator instantiation.
///
/// Every allocator exposes its own as
/// [`FirstFitAllocator::CONFIG`](crate::FirstFitAllocator::CONFIG). All
/// values are fixed at build time; there is no runtime reconfiguration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Arena capacity in bytes (`BUFFER_SIZE`).
    pub buffer_size: usize,

    /// Maximum number of simultaneously live allocations (`MAX_CHUNKS`).
    pub max_chunks: usize,

    /// Width of the per-chunk `size` and `start` words.
    pub size_width: UintWidth,

    /// Width of the per-chunk `next` word and of chunk indices.
    pub index_width: UintWidth,
}

impl ArenaConfig {
    /// Describe an allocator with explicitly chosen word widths.
    pub const fn new(
        buffer_size: usize,
        max_chunks: usize,
        size_width: UintWidth,
        index_width: UintWidth,
    ) -> Self {
        Self {
            buffer_size,
            max_chunks,
            size_width,
            index_width,
        }
    }

    /// Describe an allocator using the narrowest words for its bounds.
    pub const fn tight(buffer_size: usize, max_chunks: usize) -> Self {
        Self::new(
            buffer_size,
            max_chunks,
            UintWidth::for_bound(buffer_size as u64),
            UintWidth::for_bound(max_chunks as u64),
        )
    }

    /// Check that the configuration can back a working allocator.
    ///
    /// The index word must leave its all-ones value free for the NONE
    /// sentinel, so it has to cover `max_chunks` itself (valid indices are
    /// `0..max_chunks`).
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::EmptyArena);
        }
        if self.max_chunks == 0 {
            return Err(ConfigError::NoChunks);
        }
        if !self.size_width.covers(self.buffer_size as u64) {
            return Err(ConfigError::SizeWordTooNarrow);
        }
        if !self.index_width.covers(self.max_chunks as u64) {
            return Err(ConfigError::IndexWordTooNarrow);
        }
        Ok(())
    }

    /// Whether both words are the narrowest that would validate.
    pub const fn is_tight(&self) -> bool {
        let tight = Self::tight(self.buffer_size, self.max_chunks);
        // UintWidth's PartialEq is not const.
        self.size_width.bits() == tight.size_width.bits()
            && self.index_width.bits() == tight.index_width.bits()
    }

    /// Packed size of one chunk record: `size` + `start` + `next`.
    pub const fn record_bytes(&self) -> usize {
        2 * self.size_width.bytes() + self.index_width.bytes()
    }

    /// Packed size of the whole chunk table.
    pub const fn metadata_bytes(&self) -> usize {
        self.max_chunks * self.record_bytes()
    }
}
