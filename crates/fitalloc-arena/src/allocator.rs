//! The first-fit allocator front-end.
//!
//! [`FirstFitAllocator`] owns a fixed byte arena and a [`ChunkTable`]. An
//! allocation computes its byte size, asks the table for the lowest-address
//! gap that fits, default-constructs the elements in place, records the
//! chunk, and hands back a typed handle wrapping the chunk's slot index.
//!
//! ```
//! use fitalloc_arena::FirstFitAllocator;
//!
//! let mut alloc = FirstFitAllocator::<64, 4>::new();
//! let reading = alloc.allocate::<u32>();
//! assert!(reading.is_some());
//! // SAFETY: `reading` is live and was allocated as a `u32`.
//! unsafe { *alloc.get_mut(reading).unwrap() = 42 };
//! assert_eq!(unsafe { alloc.get(reading) }, Some(&42));
//! assert!(alloc.free(reading).is_success());
//! ```

#![allow(unsafe_code)]

use core::fmt;
use core::mem::{align_of, size_of};
use core::ops::Range;

use fitalloc_core::{SmallUint, Status};

use crate::config::{ArenaConfig, ARENA_ALIGN};
use crate::error::AllocError;
use crate::handle::{ArrayPtr, ChunkHandle, Ptr};
use crate::raw::Arena;
use crate::table::{ChunkRecord, ChunkTable};

/// Fixed-capacity first-fit allocator.
///
/// - `BUFFER_SIZE`: arena capacity in bytes.
/// - `MAX_CHUNKS`: maximum number of simultaneously live allocations.
/// - `S`: word storing chunk sizes and offsets; must cover `BUFFER_SIZE`.
/// - `I`: word storing chunk indices; must cover `MAX_CHUNKS` (its
///   all-ones value is the NONE sentinel).
///
/// Word widths that are too narrow fail to compile. Both the arena and the
/// chunk table live inline in the value; nothing is heap allocated.
///
/// The arena stores values type-erased, so the allocator's auto traits say
/// nothing about what it holds. It is `Send` but not `Sync`; moving it to
/// another thread moves the stored values with it, which the `unsafe`
/// accessors' contracts account for. Dropping the allocator releases the
/// bytes of every live chunk without running element destructors, the
/// same as [`free`](Self::free).
pub struct FirstFitAllocator<
    const BUFFER_SIZE: usize,
    const MAX_CHUNKS: usize,
    S: SmallUint = u16,
    I: SmallUint = u8,
> {
    memory: Arena<BUFFER_SIZE>,
    table: ChunkTable<S, I, MAX_CHUNKS>,
}

/// A live chunk as reported by [`FirstFitAllocator::live_chunks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkInfo {
    /// Chunk-table slot index.
    pub index: usize,
    /// Byte offset within the arena.
    pub start: usize,
    /// Length in bytes.
    pub size: usize,
}

impl ChunkInfo {
    /// The byte range `start..start + size`.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.size
    }
}

impl<const BUFFER_SIZE: usize, const MAX_CHUNKS: usize, S: SmallUint, I: SmallUint>
    FirstFitAllocator<BUFFER_SIZE, MAX_CHUNKS, S, I>
{
    /// Compile-time parameters of this instantiation.
    pub const CONFIG: ArenaConfig =
        ArenaConfig::new(BUFFER_SIZE, MAX_CHUNKS, S::WIDTH, I::WIDTH);

    const VALID: () = match Self::CONFIG.validate() {
        Ok(()) => (),
        Err(error) => panic!("{}", error.message()),
    };

    /// Create an allocator with an empty arena.
    pub const fn new() -> Self {
        let () = Self::VALID;
        Self {
            memory: Arena::new(),
            table: ChunkTable::new(),
        }
    }

    /// Arena capacity in bytes.
    pub const fn capacity(&self) -> usize {
        BUFFER_SIZE
    }

    /// Maximum number of simultaneously live allocations.
    pub const fn max_chunks(&self) -> usize {
        MAX_CHUNKS
    }

    /// Number of live allocations.
    pub fn chunks_used(&self) -> usize {
        self.table.len()
    }

    /// Whether no allocation is live.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Allocate and default-construct one `T`.
    pub fn try_allocate<T: Default>(&mut self) -> Result<Ptr<T, I>, AllocError> {
        self.allocate_chunk::<T>(1).map(Ptr::from_index)
    }

    /// Allocate one `T`, returning a null handle on failure.
    pub fn allocate<T: Default>(&mut self) -> Ptr<T, I> {
        self.try_allocate().unwrap_or_default()
    }

    /// Allocate and default-construct `count` contiguous `T`s.
    pub fn try_allocate_array<T: Default>(
        &mut self,
        count: usize,
    ) -> Result<ArrayPtr<T, I>, AllocError> {
        self.allocate_chunk::<T>(count).map(ArrayPtr::from_index)
    }

    /// Allocate `count` `T`s, returning a null handle on failure.
    pub fn allocate_array<T: Default>(&mut self, count: usize) -> ArrayPtr<T, I> {
        self.try_allocate_array(count).unwrap_or_default()
    }

    /// Release the chunk behind `ptr` without running `T`'s destructor.
    ///
    /// Returns [`Status::ErrUnspec`], changing nothing, if `ptr` is null or
    /// its slot is not occupied.
    pub fn free<T>(&mut self, ptr: Ptr<T, I>) -> Status {
        self.release(ptr.chunk_index())
    }

    /// Release the chunk behind `array` without running any destructors.
    ///
    /// The cursor position of `array` is irrelevant; the whole chunk goes.
    pub fn free_array<T>(&mut self, array: ArrayPtr<T, I>) -> Status {
        self.release(array.chunk_index())
    }

    /// Drop the `T` behind `ptr`, then release its chunk.
    ///
    /// # Safety
    ///
    /// If `ptr` resolves to an occupied slot, that chunk must hold a live
    /// `T` allocated through this handle (or a copy of it) that has not
    /// been dropped already. If the allocator has moved to another thread
    /// since the `T` was stored, `T` must be `Send`.
    pub unsafe fn free_and_drop<T>(&mut self, ptr: Ptr<T, I>) -> Status {
        // SAFETY: forwarded caller contract.
        unsafe { self.finalize_and_release::<T>(ptr.chunk_index()) }
    }

    /// Drop every element of the array behind `array`, then release it.
    ///
    /// The element count is recovered from the chunk's recorded size.
    ///
    /// # Safety
    ///
    /// If `array` resolves to an occupied slot, that chunk must hold live
    /// `T`s allocated through this handle (or a copy of it). If the
    /// allocator has moved to another thread since they were stored, `T`
    /// must be `Send`.
    pub unsafe fn free_array_and_drop<T>(&mut self, array: ArrayPtr<T, I>) -> Status {
        // SAFETY: forwarded caller contract.
        unsafe { self.finalize_and_release::<T>(array.chunk_index()) }
    }

    /// Resolve `handle` to a shared reference.
    ///
    /// Returns `None` for a null handle or a free slot.
    ///
    /// # Safety
    ///
    /// The chunk must have been allocated for `H::Target` through this
    /// handle (not freed and reused since), and for arrays the cursor must
    /// be below the allocated element count. Nothing checks either. If the
    /// allocator has moved to another thread since the value was stored,
    /// `H::Target` must be `Send`.
    pub unsafe fn get<H: ChunkHandle>(&self, handle: H) -> Option<&H::Target> {
        let chunk = self.record(handle)?;
        // SAFETY: forwarded caller contract.
        Some(unsafe {
            self.memory
                .element::<H::Target>(chunk.start(), handle.element_offset())
        })
    }

    /// Resolve `handle` to a mutable reference.
    ///
    /// # Safety
    ///
    /// Same contract as [`get`](Self::get).
    pub unsafe fn get_mut<H: ChunkHandle>(&mut self, handle: H) -> Option<&mut H::Target> {
        let start = self.record(handle)?.start();
        // SAFETY: forwarded caller contract.
        Some(unsafe {
            self.memory
                .element_mut::<H::Target>(start, handle.element_offset())
        })
    }

    /// Element `i` counted from the cursor of `array`.
    ///
    /// # Safety
    ///
    /// Same contract as [`get`](Self::get), with `array.offset() + i`
    /// below the allocated element count.
    pub unsafe fn index<T>(&self, array: ArrayPtr<T, I>, i: usize) -> Option<&T> {
        let chunk = self.record(array)?;
        // SAFETY: forwarded caller contract.
        Some(unsafe { self.memory.element::<T>(chunk.start(), array.offset() + i) })
    }

    /// Mutable element `i` counted from the cursor of `array`.
    ///
    /// # Safety
    ///
    /// Same contract as [`index`](Self::index).
    pub unsafe fn index_mut<T>(&mut self, array: ArrayPtr<T, I>, i: usize) -> Option<&mut T> {
        let start = self.record(array)?.start();
        // SAFETY: forwarded caller contract.
        Some(unsafe { self.memory.element_mut::<T>(start, array.offset() + i) })
    }

    /// The whole array behind `array` as a slice, ignoring its cursor.
    ///
    /// # Safety
    ///
    /// The chunk must have been allocated for `T` through this handle and
    /// not freed since. If the allocator has moved to another thread since
    /// the values were stored, `T` must be `Send`.
    pub unsafe fn as_slice<T>(&self, array: ArrayPtr<T, I>) -> Option<&[T]> {
        let chunk = self.record(array)?;
        let count = Self::element_count::<T>(chunk);
        // SAFETY: forwarded caller contract; every element was constructed
        // at allocation time.
        Some(unsafe { self.memory.elements::<T>(chunk.start(), count) })
    }

    /// Number of `T`s the chunk behind `array` holds.
    pub fn array_len<T>(&self, array: ArrayPtr<T, I>) -> Option<usize> {
        self.record(array).map(Self::element_count::<T>)
    }

    /// Byte range of the chunk behind `handle`.
    pub fn chunk_range<H: ChunkHandle>(&self, handle: H) -> Option<Range<usize>> {
        self.record(handle).map(|c| c.start()..c.end())
    }

    /// Live chunks in ascending address order.
    pub fn live_chunks(&self) -> impl Iterator<Item = ChunkInfo> + '_ {
        self.table.iter().map(|(index, chunk)| ChunkInfo {
            index,
            start: chunk.start(),
            size: chunk.size(),
        })
    }

    /// Current usage counters.
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> crate::stats::AllocStats {
        crate::stats::AllocStats {
            bytes_used: self.table.bytes_used(),
            chunks_used: self.table.len(),
        }
    }

    /// Log the chunk table's contents through `tracing` at `debug` level.
    #[cfg(feature = "diagnostics")]
    pub fn dump_chunks(&self) {
        crate::diagnostics::trace_table(&self.table);
    }

    /// A `Display` view of the chunk table's contents.
    #[cfg(feature = "diagnostics")]
    pub fn chunk_table(&self) -> crate::diagnostics::ChunkTableDump<'_, S, I, MAX_CHUNKS> {
        crate::diagnostics::ChunkTableDump { table: &self.table }
    }

    fn record<H: ChunkHandle>(&self, handle: H) -> Option<&ChunkRecord<S, I>> {
        handle.chunk_index().and_then(|index| self.table.get(index))
    }

    fn element_count<T>(chunk: &ChunkRecord<S, I>) -> usize {
        chunk.size().checked_div(size_of::<T>()).unwrap_or(0)
    }

    fn allocate_chunk<T: Default>(&mut self, count: usize) -> Result<usize, AllocError> {
        const {
            assert!(
                align_of::<T>() <= ARENA_ALIGN,
                "element alignment exceeds arena alignment"
            )
        };

        self.reserve::<T>(count).inspect_err(|error| {
            tracing::debug!(
                %error,
                element_size = size_of::<T>(),
                count,
                chunks_used = self.table.len(),
                "allocation failed"
            );
        })
    }

    fn reserve<T: Default>(&mut self, count: usize) -> Result<usize, AllocError> {
        let size = size_of::<T>()
            .checked_mul(count)
            .ok_or(AllocError::ArenaExhausted {
                requested: usize::MAX,
                capacity: BUFFER_SIZE,
            })?;
        if size == 0 {
            return Err(AllocError::ZeroSize);
        }
        if self.table.is_full() {
            return Err(AllocError::TableExhausted {
                max_chunks: MAX_CHUNKS,
            });
        }

        let gap = self.table.find_gap(size, align_of::<T>(), BUFFER_SIZE)?;
        // SAFETY: `find_gap` returned an aligned, in-bounds range that no
        // live chunk overlaps.
        unsafe { self.memory.construct_default::<T>(gap.start, count) };
        self.table.insert(gap, size)
    }

    fn release(&mut self, index: Option<usize>) -> Status {
        let Some(index) = index else {
            tracing::debug!("free of null handle ignored");
            return Status::ErrUnspec;
        };
        match self.table.remove(index) {
            Some(_) => Status::Success,
            None => {
                tracing::debug!(index, "free of unoccupied slot ignored");
                Status::ErrUnspec
            }
        }
    }

    /// # Safety
    ///
    /// An occupied chunk at `index` must hold live `T`s.
    unsafe fn finalize_and_release<T>(&mut self, index: Option<usize>) -> Status {
        let chunk = index.and_then(|i| self.table.get(i)).copied();
        if let Some(chunk) = chunk {
            let count = Self::element_count::<T>(&chunk);
            // SAFETY: forwarded caller contract; the slot is released right
            // after, so the dropped values are never observed again.
            unsafe { self.memory.drop_elements::<T>(chunk.start(), count) };
        }
        self.release(index)
    }
}

impl<const BUFFER_SIZE: usize, const MAX_CHUNKS: usize, S: SmallUint, I: SmallUint> Default
    for FirstFitAllocator<BUFFER_SIZE, MAX_CHUNKS, S, I>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const BUFFER_SIZE: usize, const MAX_CHUNKS: usize, S: SmallUint, I: SmallUint> fmt::Debug
    for FirstFitAllocator<BUFFER_SIZE, MAX_CHUNKS, S, I>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirstFitAllocator")
            .field("capacity", &BUFFER_SIZE)
            .field("max_chunks", &MAX_CHUNKS)
            .field("chunks_used", &self.table.len())
            .field("head", &self.table.head())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitalloc_core::UintWidth;
    use fitalloc_test_utils::{assert_disjoint, Canary, DropCounter, SensorReading};

    type Small = FirstFitAllocator<16, 4>;

    fn ranges<const B: usize, const C: usize>(alloc: &FirstFitAllocator<B, C>) -> Vec<Range<usize>> {
        alloc.live_chunks().map(|c| c.range()).collect()
    }

    #[test]
    fn config_reflects_generics() {
        assert_eq!(Small::CONFIG.buffer_size, 16);
        assert_eq!(Small::CONFIG.max_chunks, 4);
        assert_eq!(Small::CONFIG.size_width, UintWidth::U16);
        assert_eq!(Small::CONFIG.index_width, UintWidth::U8);
        assert_eq!(
            FirstFitAllocator::<1024, 16, u16, u8>::CONFIG,
            ArenaConfig::tight(1024, 16)
        );
    }

    #[test]
    fn new_allocator_is_empty() {
        let alloc = Small::new();
        assert!(alloc.is_empty());
        assert_eq!(alloc.chunks_used(), 0);
        assert_eq!(alloc.capacity(), 16);
        assert_eq!(alloc.max_chunks(), 4);
        assert_eq!(alloc.live_chunks().count(), 0);
    }

    #[test]
    fn allocate_default_constructs() {
        let mut alloc = FirstFitAllocator::<64, 4>::new();
        let p = alloc.allocate::<Canary>();
        assert!(p.is_some());
        assert_eq!(unsafe { alloc.get(p) }, Some(&Canary::default()));

        let arr = alloc.allocate_array::<SensorReading>(3);
        let readings = unsafe { alloc.as_slice(arr) }.unwrap();
        assert_eq!(readings.len(), 3);
        assert!(readings.iter().all(|r| *r == SensorReading::default()));
    }

    #[test]
    fn first_fit_reuses_lowest_gap() {
        let mut alloc = Small::new();
        let a = alloc.allocate::<[u8; 4]>();
        let b = alloc.allocate::<[u8; 4]>();
        assert_eq!(alloc.chunk_range(a), Some(0..4));
        assert_eq!(alloc.chunk_range(b), Some(4..8));

        assert!(alloc.free(a).is_success());
        let c = alloc.allocate::<[u8; 4]>();
        assert_eq!(alloc.chunk_range(c), Some(0..4));
        assert_eq!(ranges(&alloc), vec![0..4, 4..8]);
    }

    #[test]
    fn arena_exhaustion_with_slot_free() {
        let mut alloc = Small::new();
        let a = alloc.allocate::<[u8; 4]>();
        let _b = alloc.allocate::<[u8; 4]>();
        let _ = alloc.free(a);
        let _c = alloc.allocate::<[u8; 4]>();

        assert_eq!(
            alloc.try_allocate::<[u8; 9]>(),
            Err(AllocError::ArenaExhausted {
                requested: 9,
                capacity: 16
            })
        );
        assert!(alloc.allocate::<[u8; 9]>().is_null());
        assert_eq!(alloc.chunks_used(), 2);
        // The 8-byte tail still fits.
        assert!(alloc.allocate::<[u8; 8]>().is_some());
    }

    #[test]
    fn table_exhaustion_with_bytes_free() {
        let mut alloc = Small::new();
        for _ in 0..4 {
            assert!(alloc.allocate::<u8>().is_some());
        }
        assert_eq!(
            alloc.try_allocate::<u8>(),
            Err(AllocError::TableExhausted { max_chunks: 4 })
        );
        assert!(alloc.allocate_array::<u8>(2).is_null());
        assert_eq!(alloc.chunks_used(), 4);
    }

    #[test]
    fn zero_size_requests_rejected() {
        let mut alloc = Small::new();
        assert_eq!(
            alloc.try_allocate_array::<u32>(0),
            Err(AllocError::ZeroSize)
        );
        assert_eq!(alloc.try_allocate::<()>(), Err(AllocError::ZeroSize));
        assert!(alloc.allocate_array::<u8>(0).is_null());
        assert!(alloc.is_empty());
    }

    #[test]
    fn oversized_count_reports_arena_exhaustion() {
        let mut alloc = Small::new();
        assert!(matches!(
            alloc.try_allocate_array::<u64>(usize::MAX),
            Err(AllocError::ArenaExhausted { .. })
        ));
        assert!(matches!(
            alloc.try_allocate_array::<u8>(17),
            Err(AllocError::ArenaExhausted { requested: 17, .. })
        ));
    }

    #[test]
    fn full_capacity_after_everything_freed() {
        let mut alloc = Small::new();
        let a = alloc.allocate::<u16>();
        let b = alloc.allocate_array::<u8>(5);
        let c = alloc.allocate::<u32>();
        let _ = alloc.free_array(b);
        let _ = alloc.free(a);
        let _ = alloc.free(c);
        assert_eq!(alloc.chunks_used(), 0);
        assert!(alloc.allocate_array::<u8>(16).is_some());
    }

    #[test]
    fn natural_alignment_is_respected() {
        let mut alloc = FirstFitAllocator::<32, 4>::new();
        let byte = alloc.allocate::<u8>();
        let word = alloc.allocate::<u32>();
        assert_eq!(alloc.chunk_range(byte), Some(0..1));
        assert_eq!(alloc.chunk_range(word), Some(4..8));
        let wide = alloc.allocate::<u64>();
        assert_eq!(alloc.chunk_range(wide), Some(8..16));
        // A byte still slots into the padding before the u32.
        let byte2 = alloc.allocate::<u8>();
        assert_eq!(alloc.chunk_range(byte2), Some(1..2));
        assert_disjoint(ranges(&alloc));
    }

    #[test]
    fn free_rejects_null_and_stale_handles() {
        let mut alloc = Small::new();
        assert_eq!(alloc.free(Ptr::<u8>::null()), Status::ErrUnspec);
        let p = alloc.allocate::<u8>();
        assert_eq!(alloc.free(p), Status::Success);
        assert_eq!(alloc.free(p), Status::ErrUnspec);
        assert_eq!(alloc.chunks_used(), 0);
        assert_eq!(unsafe { alloc.get(p) }, None);
    }

    #[test]
    fn array_cursor_walks_to_last_element() {
        let mut alloc = FirstFitAllocator::<64, 4>::new();
        let mut arr = alloc.allocate_array::<u16>(5);
        for i in 0..5 {
            unsafe { *alloc.index_mut(arr, i).unwrap() = i as u16 * 10 };
        }
        for _ in 0..4 {
            arr.inc();
        }
        assert_eq!(unsafe { alloc.get(arr) }, Some(&40));
        // Indexing is relative to the cursor.
        arr = arr.rewound();
        arr.inc();
        assert_eq!(unsafe { alloc.index(arr, 2) }, Some(&30));
        assert_eq!(alloc.array_len(arr), Some(5));
    }

    #[test]
    fn bytes_only_free_skips_destructors() {
        DropCounter::reset();
        let mut alloc = FirstFitAllocator::<64, 4>::new();
        let arr = alloc.allocate_array::<DropCounter>(3);
        assert_eq!(DropCounter::constructed(), 3);
        assert!(alloc.free_array(arr).is_success());
        assert_eq!(DropCounter::dropped(), 0);
    }

    #[test]
    fn dropping_allocator_skips_destructors() {
        DropCounter::reset();
        let mut alloc = FirstFitAllocator::<64, 4>::new();
        let _one = alloc.allocate::<DropCounter>();
        let _many = alloc.allocate_array::<DropCounter>(2);
        drop(alloc);
        assert_eq!(DropCounter::constructed(), 3);
        assert_eq!(DropCounter::dropped(), 0);
    }

    #[test]
    fn finalizing_free_runs_destructors() {
        DropCounter::reset();
        let mut alloc = FirstFitAllocator::<64, 4>::new();
        let one = alloc.allocate::<DropCounter>();
        let many = alloc.allocate_array::<DropCounter>(3);
        assert_eq!(unsafe { alloc.free_and_drop(one) }, Status::Success);
        assert_eq!(DropCounter::dropped(), 1);
        assert_eq!(unsafe { alloc.free_array_and_drop(many) }, Status::Success);
        assert_eq!(DropCounter::dropped(), 4);
        assert!(alloc.is_empty());
        // A second finalizing free finds nothing to drop.
        assert_eq!(unsafe { alloc.free_and_drop(one) }, Status::ErrUnspec);
        assert_eq!(DropCounter::dropped(), 4);
    }

    #[test]
    fn interior_mutability_through_shared_get() {
        use std::cell::{Cell, RefCell};

        let mut alloc = FirstFitAllocator::<64, 4>::new();
        let counter = alloc.allocate::<Cell<u32>>();
        let log = alloc.allocate::<RefCell<[u8; 4]>>();
        let shared = &alloc;
        unsafe {
            shared.get(counter).unwrap().set(7);
            shared.get(log).unwrap().borrow_mut()[3] = 9;
            assert_eq!(shared.get(counter).unwrap().get(), 7);
            assert_eq!(shared.get(log).unwrap().borrow()[3], 9);
        }
    }

    #[test]
    fn allocator_is_send() {
        fn assert_send<T: Send>(_: &T) {}
        let mut alloc = FirstFitAllocator::<64, 4>::new();
        let p = alloc.allocate::<u32>();
        assert_send(&alloc);
        let alloc = std::thread::spawn(move || {
            // SAFETY: `p` is live and `u32` is `Send`.
            unsafe { *alloc.get_mut(p).unwrap() = 5 };
            alloc
        })
        .join()
        .unwrap();
        assert_eq!(unsafe { alloc.get(p) }, Some(&5));
    }

    #[test]
    fn wide_words_cover_large_arenas() {
        let mut alloc = Box::new(FirstFitAllocator::<70_000, 300, u32, u16>::new());
        let big = alloc.allocate_array::<u8>(66_000);
        assert!(big.is_some());
        assert_eq!(alloc.chunk_range(big), Some(0..66_000));
        let _ = alloc.free_array(big);
    }

    #[test]
    fn debug_shows_usage_not_bytes() {
        let mut alloc = Small::new();
        let _ = alloc.allocate::<u8>();
        let text = format!("{alloc:?}");
        assert!(text.contains("chunks_used: 1"));
        assert!(text.contains("capacity: 16"));
    }

    #[cfg(feature = "stats")]
    #[test]
    fn stats_track_bytes_and_chunks() {
        let mut alloc = Small::new();
        let a = alloc.allocate::<u32>();
        let _b = alloc.allocate_array::<u8>(3);
        assert_eq!(
            alloc.stats(),
            crate::stats::AllocStats {
                bytes_used: 7,
                chunks_used: 2
            }
        );
        let _ = alloc.free(a);
        assert_eq!(alloc.stats().bytes_used, 3);
        assert_eq!(alloc.stats().to_string(), "3 bytes in 1 chunks");
    }

    #[cfg(feature = "diagnostics")]
    #[test]
    fn chunk_table_dump_lists_slots() {
        let mut alloc = Small::new();
        let a = alloc.allocate::<[u8; 4]>();
        let _b = alloc.allocate::<[u8; 2]>();
        let _ = alloc.free(a);
        let _c = alloc.allocate::<[u8; 1]>();
        alloc.dump_chunks();
        assert_eq!(
            alloc.chunk_table().to_string(),
            "first chunk: 0\n0: start=0 size=1 next=1\n1: start=4 size=2 next=none\n"
        );
    }
}
