//! The chunk table and the address-ordered live list threaded through it.
//!
//! [`ChunkTable`] is a fixed array of [`ChunkRecord`]s that doubles as the
//! metadata store for live chunks and the pool of free slots. Occupied
//! records are linked through their `next` word into a singly linked list
//! ordered by ascending `start`, rooted at `head`. A slot with `size == 0`
//! is free; its `start` and `next` are stale and never read.
//!
//! The table only does bookkeeping on byte offsets. It never touches the
//! arena memory itself.

use fitalloc_core::SmallUint;

use crate::error::AllocError;

/// Metadata for one chunk-table slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkRecord<S, I> {
    size: S,
    start: S,
    next: I,
}

impl<S: SmallUint, I: SmallUint> ChunkRecord<S, I> {
    /// A free slot.
    pub const FREE: Self = Self {
        size: S::ZERO,
        start: S::ZERO,
        next: I::MAX,
    };

    /// Whether the slot holds a live chunk.
    pub fn occupied(&self) -> bool {
        self.size != S::ZERO
    }

    /// Chunk length in bytes (0 for a free slot).
    pub fn size(&self) -> usize {
        self.size.to_usize()
    }

    /// Byte offset of the chunk within the arena.
    pub fn start(&self) -> usize {
        self.start.to_usize()
    }

    /// One past the last byte of the chunk.
    pub fn end(&self) -> usize {
        self.start() + self.size()
    }

    /// Index of the next chunk in address order, if any.
    pub fn next(&self) -> Option<usize> {
        (self.next != I::MAX).then(|| self.next.to_usize())
    }
}

/// Where the first-fit search decided a new chunk goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gap {
    /// The chunk the new one is linked after; `None` means new head.
    pub prev: Option<usize>,
    /// Byte offset the new chunk starts at.
    pub start: usize,
}

/// Fixed-capacity chunk table with an embedded address-ordered list.
#[derive(Clone, Debug)]
pub struct ChunkTable<S, I, const MAX_CHUNKS: usize> {
    records: [ChunkRecord<S, I>; MAX_CHUNKS],
    /// First chunk in address order, or `I::MAX` when empty.
    head: I,
    /// Occupied slot count; always equal to the list length.
    used: I,
    #[cfg(feature = "stats")]
    bytes_used: usize,
}

impl<S: SmallUint, I: SmallUint, const MAX_CHUNKS: usize> ChunkTable<S, I, MAX_CHUNKS> {
    /// The "no such chunk" / "end of list" index.
    pub const NONE: I = I::MAX;

    /// An empty table with every slot free.
    pub const fn new() -> Self {
        Self {
            records: [ChunkRecord::FREE; MAX_CHUNKS],
            head: I::MAX,
            used: I::ZERO,
            #[cfg(feature = "stats")]
            bytes_used: 0,
        }
    }

    /// Number of live chunks.
    pub fn len(&self) -> usize {
        self.used.to_usize()
    }

    /// Whether no chunk is live.
    pub fn is_empty(&self) -> bool {
        self.head == Self::NONE
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len() >= MAX_CHUNKS
    }

    /// Index of the lowest-address live chunk.
    pub fn head(&self) -> Option<usize> {
        (self.head != Self::NONE).then(|| self.head.to_usize())
    }

    /// The record at `index`, if that slot is occupied.
    pub fn get(&self, index: usize) -> Option<&ChunkRecord<S, I>> {
        self.records.get(index).filter(|r| r.occupied())
    }

    /// Bytes held by live chunks.
    #[cfg(feature = "stats")]
    pub fn bytes_used(&self) -> usize {
        self.bytes_used
    }

    /// Iterate live chunks in ascending address order.
    pub fn iter(&self) -> Chunks<'_, S, I, MAX_CHUNKS> {
        Chunks {
            table: self,
            cursor: self.head(),
        }
    }

    /// Index of the first free slot, scanning from slot 0.
    pub fn reserve_slot(&self) -> Option<usize> {
        self.records.iter().position(|r| !r.occupied())
    }

    /// First-fit search for `size` bytes aligned to `align`.
    ///
    /// Walks the list keeping the end of the previous chunk; the first gap
    /// whose aligned start leaves room for `size` bytes wins. The tail gap
    /// up to `capacity` is tried last.
    pub fn find_gap(&self, size: usize, align: usize, capacity: usize) -> Result<Gap, AllocError> {
        let mut end = 0usize;
        let mut prev = None;
        for (index, chunk) in self.iter() {
            let start = end.next_multiple_of(align);
            if chunk.start().checked_sub(start).is_some_and(|gap| gap >= size) {
                return Ok(Gap { prev, start });
            }
            end = chunk.end();
            prev = Some(index);
        }

        let start = end.next_multiple_of(align);
        if capacity.checked_sub(start).is_some_and(|gap| gap >= size) {
            Ok(Gap { prev, start })
        } else {
            Err(AllocError::ArenaExhausted {
                requested: size,
                capacity,
            })
        }
    }

    /// Record a chunk of `size` bytes at `gap` and splice it into the list.
    ///
    /// Does not check that the gap actually has room; that is
    /// [`find_gap`](Self::find_gap)'s job. Returns the slot index used.
    pub fn insert(&mut self, gap: Gap, size: usize) -> Result<usize, AllocError> {
        let slot = self.reserve_slot().ok_or(AllocError::TableExhausted {
            max_chunks: MAX_CHUNKS,
        })?;
        let slot_word = I::from_usize(slot);

        let old_next = match gap.prev {
            Some(prev) => core::mem::replace(&mut self.records[prev].next, slot_word),
            None => core::mem::replace(&mut self.head, slot_word),
        };

        self.records[slot] = ChunkRecord {
            size: S::from_usize(size),
            start: S::from_usize(gap.start),
            next: old_next,
        };
        self.used = I::from_usize(self.len() + 1);
        #[cfg(feature = "stats")]
        {
            self.bytes_used += size;
        }

        tracing::trace!(slot, start = gap.start, size, "chunk inserted");
        Ok(slot)
    }

    /// Unlink the chunk at `index` and mark its slot free.
    ///
    /// Returns the freed chunk's record, or `None` without changing
    /// anything if the slot was not occupied.
    pub fn remove(&mut self, index: usize) -> Option<ChunkRecord<S, I>> {
        let removed = *self.get(index)?;
        let target = I::from_usize(index);

        if self.head == target {
            self.head = removed.next;
        } else {
            let mut cursor = self.head();
            while let Some(prev) = cursor {
                let record = &mut self.records[prev];
                if record.next == target {
                    record.next = removed.next;
                    break;
                }
                cursor = record.next();
            }
        }

        self.records[index].size = S::ZERO;
        self.used = I::from_usize(self.len() - 1);
        #[cfg(feature = "stats")]
        {
            self.bytes_used -= removed.size();
        }

        tracing::trace!(
            slot = index,
            start = removed.start(),
            size = removed.size(),
            "chunk removed"
        );
        Some(removed)
    }

    /// Occupied slots in table order, regardless of list position.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &ChunkRecord<S, I>)> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.occupied())
    }
}

impl<S: SmallUint, I: SmallUint, const MAX_CHUNKS: usize> Default
    for ChunkTable<S, I, MAX_CHUNKS>
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over live chunks in address order.
///
/// Yields `(slot index, record)` pairs by following `next` links from the
/// head of the list.
pub struct Chunks<'a, S, I, const MAX_CHUNKS: usize> {
    table: &'a ChunkTable<S, I, MAX_CHUNKS>,
    cursor: Option<usize>,
}

impl<'a, S: SmallUint, I: SmallUint, const MAX_CHUNKS: usize> Iterator
    for Chunks<'a, S, I, MAX_CHUNKS>
{
    type Item = (usize, &'a ChunkRecord<S, I>);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let record = &self.table.records[index];
        self.cursor = record.next();
        Some((index, record))
    }
}
