//! Core types for the fitalloc allocator workspace.
//!
//! This is the leaf crate with zero internal dependencies. It stands in
//! for the host execution environment: the byte type the arena is made
//! of, the two-valued [`Status`] returned by fallible operations, and the
//! compile-time [`width`] selector used to pack chunk metadata tightly.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod status;
pub mod width;

pub use status::Status;
pub use width::{SmallUint, UintWidth};

/// The generic byte type the arena is built from.
pub type BlockData = u8;
