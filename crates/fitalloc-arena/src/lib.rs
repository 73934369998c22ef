//! Fixed-capacity first-fit allocation for constrained targets.
//!
//! Carves a fixed byte arena into variably sized chunks on demand, tracks
//! a bounded number of simultaneous allocations, and returns typed handles
//! instead of raw addresses. Nothing grows, compacts, or runs in the
//! background: every state change is a direct result of an allocate or
//! free call.
//!
//! # Architecture
//!
//! ```text
//! FirstFitAllocator<BUFFER_SIZE, MAX_CHUNKS, S, I>
//! ├── Arena<BUFFER_SIZE>             (inline bytes, 16-byte aligned)
//! └── ChunkTable<S, I, MAX_CHUNKS>   (fixed record array)
//!     ├── ChunkRecord { size: S, start: S, next: I }
//!     └── head: I ──► address-ordered live list via `next`
//! ```
//!
//! Allocation runs a first-fit search over the live list, reserves the
//! first free table slot, splices it in after its address predecessor, and
//! default-constructs the elements. Free unlinks the slot and marks it
//! free. Table exhaustion and arena exhaustion are separate failures.
//!
//! # Handles
//!
//! [`Ptr`] and [`ArrayPtr`] carry a slot index (and an element cursor for
//! arrays). They are resolved through the allocator's `unsafe` accessors,
//! whose contract is the usual one for raw handles: the chunk is live, was
//! allocated for that type, and array cursors stay in bounds.
//!
//! # Features
//!
//! - `stats`: maintain a bytes-in-use counter and expose
//!   [`FirstFitAllocator::stats`].
//! - `diagnostics`: chunk-table dump hooks.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod allocator;
pub mod config;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod error;
pub mod handle;
mod raw;
#[cfg(feature = "stats")]
pub mod stats;
pub mod table;

// Public re-exports for the primary API surface.
pub use allocator::{ChunkInfo, FirstFitAllocator};
pub use config::{ArenaConfig, ARENA_ALIGN};
pub use error::{AllocError, ConfigError};
pub use handle::{ArrayPtr, ChunkHandle, Ptr};
#[cfg(feature = "stats")]
pub use stats::AllocStats;
