//! Typed handles over chunk-table slots.
//!
//! A handle is a small value carrying a chunk-table index (and, for arrays,
//! an element offset). It owns nothing and does not borrow the allocator:
//! resolving it to a reference goes through the allocator's accessors.
//! Handles are not generation-checked, so a handle kept past `free` may
//! silently resolve to whatever chunk later reuses the slot.

use core::fmt;
use core::marker::PhantomData;

use fitalloc_core::SmallUint;

/// Common surface of [`Ptr`] and [`ArrayPtr`].
pub trait ChunkHandle: Copy {
    /// The element type the handle resolves to.
    type Target;

    /// Chunk-table index, or `None` for a null handle.
    fn chunk_index(&self) -> Option<usize>;

    /// Element offset from the chunk start (always 0 for [`Ptr`]).
    fn element_offset(&self) -> usize;

    /// Whether the handle is null (allocation failed or never assigned).
    fn is_null(&self) -> bool {
        self.chunk_index().is_none()
    }
}

/// Handle to a single `T` in the arena.
#[must_use]
pub struct Ptr<T, I: SmallUint = u8> {
    index: I,
    _marker: PhantomData<fn() -> T>,
}

impl<T, I: SmallUint> Ptr<T, I> {
    /// The null handle.
    pub const fn null() -> Self {
        Self {
            index: I::MAX,
            _marker: PhantomData,
        }
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self {
            index: I::from_usize(index),
            _marker: PhantomData,
        }
    }

    /// Whether this handle refers to a chunk.
    pub fn is_some(&self) -> bool {
        !self.is_null()
    }
}

impl<T, I: SmallUint> ChunkHandle for Ptr<T, I> {
    type Target = T;

    fn chunk_index(&self) -> Option<usize> {
        (self.index != I::MAX).then(|| self.index.to_usize())
    }

    fn element_offset(&self) -> usize {
        0
    }
}

impl<T, I: SmallUint> Clone for Ptr<T, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, I: SmallUint> Copy for Ptr<T, I> {}

impl<T, I: SmallUint> Default for Ptr<T, I> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T, I: SmallUint> PartialEq for Ptr<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T, I: SmallUint> Eq for Ptr<T, I> {}

impl<T, I: SmallUint> fmt::Debug for Ptr<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chunk_index() {
            Some(index) => write!(f, "Ptr({index})"),
            None => write!(f, "Ptr(null)"),
        }
    }
}

/// Handle to a run of `T`s in the arena, with a movable cursor.
///
/// The cursor starts at element 0. [`inc`](Self::inc) advances it by one
/// element and indexed access is relative to it. Nothing checks the cursor
/// against the number of elements allocated.
///
/// Equality compares chunk identity only: two handles into the same array
/// at different offsets are equal.
#[must_use]
pub struct ArrayPtr<T, I: SmallUint = u8> {
    index: I,
    offset: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T, I: SmallUint> ArrayPtr<T, I> {
    /// The null handle.
    pub const fn null() -> Self {
        Self {
            index: I::MAX,
            offset: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self {
            index: I::from_usize(index),
            offset: 0,
            _marker: PhantomData,
        }
    }

    /// Whether this handle refers to a chunk.
    pub fn is_some(&self) -> bool {
        !self.is_null()
    }

    /// Advance the cursor by one element (pre-increment).
    pub fn inc(&mut self) -> &mut Self {
        self.offset += 1;
        self
    }

    /// Current cursor position, in elements from the chunk start.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// A copy of this handle with the cursor moved back to element 0.
    pub fn rewound(self) -> Self {
        Self { offset: 0, ..self }
    }
}

impl<T, I: SmallUint> ChunkHandle for ArrayPtr<T, I> {
    type Target = T;

    fn chunk_index(&self) -> Option<usize> {
        (self.index != I::MAX).then(|| self.index.to_usize())
    }

    fn element_offset(&self) -> usize {
        self.offset
    }
}

impl<T, I: SmallUint> Clone for ArrayPtr<T, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, I: SmallUint> Copy for ArrayPtr<T, I> {}

impl<T, I: SmallUint> Default for ArrayPtr<T, I> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T, I: SmallUint> PartialEq for ArrayPtr<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T, I: SmallUint> Eq for ArrayPtr<T, I> {}

impl<T, I: SmallUint> fmt::Debug for ArrayPtr<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chunk_index() {
            Some(index) => write!(f, "ArrayPtr({index}+{})", self.offset),
            None => write!(f, "ArrayPtr(null)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handles() {
        let p: Ptr<u32> = Ptr::null();
        assert!(p.is_null());
        assert!(!p.is_some());
        assert_eq!(p.chunk_index(), None);
        assert_eq!(p, Ptr::default());

        let a: ArrayPtr<u32, u16> = ArrayPtr::default();
        assert!(a.is_null());
        assert_eq!(format!("{a:?}"), "ArrayPtr(null)");
    }

    #[test]
    fn ptr_equality_follows_index() {
        let a: Ptr<u32> = Ptr::from_index(2);
        let b: Ptr<u32> = Ptr::from_index(2);
        let c: Ptr<u32> = Ptr::from_index(3);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Ptr::null());
        assert_eq!(a.chunk_index(), Some(2));
        assert_eq!(a.element_offset(), 0);
        assert_eq!(format!("{a:?}"), "Ptr(2)");
    }

    #[test]
    fn array_cursor_advances_and_rewinds() {
        let mut a: ArrayPtr<u16> = ArrayPtr::from_index(1);
        a.inc().inc();
        assert_eq!(a.offset(), 2);
        assert_eq!(a.element_offset(), 2);
        assert_eq!(format!("{a:?}"), "ArrayPtr(1+2)");
        assert_eq!(a.rewound().offset(), 0);
    }

    #[test]
    fn array_equality_ignores_offset() {
        let base: ArrayPtr<u16> = ArrayPtr::from_index(0);
        let mut moved = base;
        moved.inc();
        assert_eq!(base, moved);
        assert_ne!(base, ArrayPtr::from_index(1));
    }

    #[test]
    fn handles_are_copy_for_non_copy_targets() {
        struct NotCopy;
        let p: Ptr<NotCopy> = Ptr::from_index(0);
        let q = p;
        assert_eq!(p, q);
    }
}
