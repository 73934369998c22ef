//! fitalloc: a fixed-capacity first-fit allocator for constrained targets.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fitalloc sub-crates. For most users, adding `fitalloc` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fitalloc::prelude::*;
//!
//! #[derive(Default)]
//! struct Sample {
//!     millivolts: u16,
//!     channel: u8,
//! }
//!
//! // 256 bytes of arena, at most 8 live allocations.
//! let mut alloc = FirstFitAllocator::<256, 8>::new();
//!
//! let sample: Ptr<Sample> = alloc.allocate();
//! let mut window: ArrayPtr<u16> = alloc.allocate_array(16);
//! assert!(sample.is_some() && window.is_some());
//!
//! // SAFETY: both handles are live and were allocated for these types;
//! // the cursor stays below 16.
//! unsafe {
//!     let s = alloc.get_mut(sample).unwrap();
//!     s.millivolts = 3300;
//!     s.channel = 2;
//!     window.inc();
//!     *alloc.get_mut(window).unwrap() = 17;
//!     assert_eq!(alloc.as_slice(window).unwrap()[1], 17);
//! }
//!
//! assert_eq!(alloc.free(sample), Status::Success);
//! assert_eq!(alloc.free_array(window), Status::Success);
//! assert!(alloc.is_empty());
//!
//! // Exhaustion is reported, never panics.
//! assert_eq!(
//!     alloc.try_allocate_array::<u8>(512),
//!     Err(AllocError::ArenaExhausted { requested: 512, capacity: 256 }),
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `fitalloc-arena` | Allocator, chunk table, handles, errors |
//! | [`types`] | `fitalloc-core` | `Status`, word-width selection, `SmallUint` |
//!
//! # Features
//!
//! - `stats`: bytes-in-use accounting via `FirstFitAllocator::stats`.
//! - `diagnostics`: chunk-table dumps through `tracing` and `Display`.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The allocator, its chunk table, and handles (`fitalloc-arena`).
pub use fitalloc_arena as arena;

/// Execution-environment primitives (`fitalloc-core`).
///
/// Contains [`types::Status`] and the compile-time word-width selector
/// [`types::UintWidth`].
pub use fitalloc_core as types;

/// Common imports for typical fitalloc usage.
///
/// ```rust
/// use fitalloc::prelude::*;
/// ```
pub mod prelude {
    // Allocator and handles
    pub use fitalloc_arena::{ArrayPtr, ChunkHandle, FirstFitAllocator, Ptr};

    // Errors and status
    pub use fitalloc_arena::AllocError;
    pub use fitalloc_core::Status;
}
