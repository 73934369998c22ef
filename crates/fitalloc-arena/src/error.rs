//! Allocator error types.

use core::error::Error;
use core::fmt;

/// Reasons an allocation request can fail.
///
/// Neither exhaustion kind is retried, and neither triggers compaction:
/// the caller must free other allocations before trying again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// Every chunk-table slot is occupied.
    TableExhausted {
        /// Number of slots in the chunk table.
        max_chunks: usize,
    },
    /// No gap in the arena, including the tail gap, is large enough.
    ArenaExhausted {
        /// Number of bytes requested (saturated on overflow).
        requested: usize,
        /// Total arena capacity in bytes.
        capacity: usize,
    },
    /// The request amounts to zero bytes.
    ///
    /// Zero-element arrays and zero-sized element types are rejected
    /// rather than given a placeholder reservation.
    ZeroSize,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TableExhausted { max_chunks } => {
                write!(f, "chunk table exhausted: all {max_chunks} slots occupied")
            }
            Self::ArenaExhausted {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "arena exhausted: no gap of {requested} bytes in {capacity} byte arena"
                )
            }
            Self::ZeroSize => write!(f, "zero-size allocation rejected"),
        }
    }
}

impl Error for AllocError {}

/// An allocator instantiation whose compile-time parameters are unusable.
///
/// Produced by [`ArenaConfig::validate`](crate::config::ArenaConfig::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `BUFFER_SIZE` is zero.
    EmptyArena,
    /// `MAX_CHUNKS` is zero.
    NoChunks,
    /// The size word cannot represent `BUFFER_SIZE`.
    SizeWordTooNarrow,
    /// The index word cannot hold `MAX_CHUNKS` indices plus the NONE sentinel.
    IndexWordTooNarrow,
}

impl ConfigError {
    /// Static description, usable from `const` contexts.
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyArena => "arena buffer size must be non-zero",
            Self::NoChunks => "chunk table must have at least one slot",
            Self::SizeWordTooNarrow => "size word too narrow for arena buffer size",
            Self::IndexWordTooNarrow => "index word too narrow for chunk table length",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_exhaustion_kinds() {
        let table = AllocError::TableExhausted { max_chunks: 4 };
        assert_eq!(
            table.to_string(),
            "chunk table exhausted: all 4 slots occupied"
        );
        let arena = AllocError::ArenaExhausted {
            requested: 9,
            capacity: 16,
        };
        assert_eq!(
            arena.to_string(),
            "arena exhausted: no gap of 9 bytes in 16 byte arena"
        );
    }

    #[test]
    fn config_error_display_matches_message() {
        let e = ConfigError::IndexWordTooNarrow;
        assert_eq!(e.to_string(), e.message());
    }
}
