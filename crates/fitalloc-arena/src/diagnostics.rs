//! Chunk-table dump hook, compiled in with the `diagnostics` feature.
//!
//! Nothing here mutates the allocator; enabling the feature only adds
//! read-only views.

use core::fmt;

use fitalloc_core::SmallUint;

use crate::table::ChunkTable;

/// `Display` adapter listing every occupied chunk-table slot.
///
/// Slots are listed in table order, not address order, so the `next`
/// links can be followed by eye.
pub struct ChunkTableDump<'a, S, I, const MAX_CHUNKS: usize> {
    pub(crate) table: &'a ChunkTable<S, I, MAX_CHUNKS>,
}

impl<S: SmallUint, I: SmallUint, const MAX_CHUNKS: usize> fmt::Display
    for ChunkTableDump<'_, S, I, MAX_CHUNKS>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.table.head() {
            Some(head) => writeln!(f, "first chunk: {head}")?,
            None => writeln!(f, "first chunk: none")?,
        }
        for (index, chunk) in self.table.occupied() {
            write!(f, "{index}: start={} size={} next=", chunk.start(), chunk.size())?;
            match chunk.next() {
                Some(next) => writeln!(f, "{next}")?,
                None => writeln!(f, "none")?,
            }
        }
        Ok(())
    }
}

/// Emit one `debug` event per occupied slot, plus a summary event.
pub(crate) fn trace_table<S: SmallUint, I: SmallUint, const MAX_CHUNKS: usize>(
    table: &ChunkTable<S, I, MAX_CHUNKS>,
) {
    tracing::debug!(
        head = ?table.head(),
        chunks_used = table.len(),
        max_chunks = MAX_CHUNKS,
        "chunk table"
    );
    for (index, chunk) in table.occupied() {
        tracing::debug!(
            index,
            start = chunk.start(),
            size = chunk.size(),
            next = ?chunk.next(),
            "chunk"
        );
    }
}
