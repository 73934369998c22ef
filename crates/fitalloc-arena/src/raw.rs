//! Low-level primitives for arena memory operations.
//!
//! This is the only module that dereferences arena memory. Every function
//! here takes a byte offset that the chunk table has already vetted; the
//! `unsafe` contracts spell out what the caller must additionally uphold.

#![allow(unsafe_code)]

use core::cell::UnsafeCell;
use core::mem::{align_of, size_of, MaybeUninit};
use core::ptr;

use crate::config::ARENA_ALIGN;

/// The arena's backing bytes, aligned to [`ARENA_ALIGN`].
///
/// The bytes sit in an `UnsafeCell` so that a shared reference to a stored
/// element may still mutate it (`Cell`, `RefCell`, atomics). This also
/// makes the arena `!Sync`.
#[repr(C, align(16))]
pub(crate) struct Arena<const N: usize> {
    bytes: UnsafeCell<[MaybeUninit<u8>; N]>,
}

const _: () = assert!(align_of::<Arena<1>>() == ARENA_ALIGN);

impl<const N: usize> Arena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            bytes: UnsafeCell::new([MaybeUninit::uninit(); N]),
        }
    }

    /// Pointer to the `T` at `start + offset * size_of::<T>()`.
    ///
    /// Derived from the `UnsafeCell`, so it carries write permission even
    /// when reached through `&self`.
    fn element_ptr<T>(&self, start: usize, offset: usize) -> *mut T {
        self.bytes
            .get()
            .cast::<u8>()
            .wrapping_add(start)
            .cast::<T>()
            .wrapping_add(offset)
    }

    /// Default-construct `count` values of `T` starting at byte `start`.
    ///
    /// # Safety
    ///
    /// `start..start + count * size_of::<T>()` must lie inside the arena,
    /// must not overlap any live chunk, and `start` must be a multiple of
    /// `align_of::<T>()`.
    pub(crate) unsafe fn construct_default<T: Default>(&mut self, start: usize, count: usize) {
        debug_assert!(start + count * size_of::<T>() <= N);
        debug_assert_eq!(start % align_of::<T>(), 0);
        for i in 0..count {
            let slot = self.element_ptr::<T>(start, i);
            // SAFETY: in bounds, aligned, and unaliased per the caller.
            // `ptr::write` does not read or drop the stale bytes.
            unsafe { ptr::write(slot, T::default()) };
        }
    }

    /// Shared reference to element `offset` of the `T` array at `start`.
    ///
    /// # Safety
    ///
    /// A live, initialised `T` must sit at that position: the chunk at
    /// `start` was allocated for `T` and `offset` is below its element
    /// count.
    pub(crate) unsafe fn element<T>(&self, start: usize, offset: usize) -> &T {
        // SAFETY: the caller guarantees an initialised, aligned `T` here,
        // and `&self` keeps the arena borrowed for the returned lifetime.
        unsafe { &*self.element_ptr::<T>(start, offset) }
    }

    /// Mutable reference to element `offset` of the `T` array at `start`.
    ///
    /// # Safety
    ///
    /// Same contract as [`element`](Self::element).
    pub(crate) unsafe fn element_mut<T>(&mut self, start: usize, offset: usize) -> &mut T {
        // SAFETY: as for `element`; `&mut self` makes the borrow unique.
        unsafe { &mut *self.element_ptr::<T>(start, offset) }
    }

    /// The `count` elements of the `T` array at `start` as a slice.
    ///
    /// # Safety
    ///
    /// All `count` elements must be live, initialised values of `T`.
    pub(crate) unsafe fn elements<T>(&self, start: usize, count: usize) -> &[T] {
        // SAFETY: contiguous initialised `T`s per the caller.
        unsafe { core::slice::from_raw_parts(self.element_ptr::<T>(start, 0), count) }
    }

    /// Run `T`'s destructor on `count` elements starting at byte `start`.
    ///
    /// # Safety
    ///
    /// All `count` elements must be live, initialised values of `T` that
    /// are never used again.
    pub(crate) unsafe fn drop_elements<T>(&mut self, start: usize, count: usize) {
        let first = self.element_ptr::<T>(start, 0);
        // SAFETY: the caller hands over ownership of the initialised run.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, count)) };
    }
}
