//! Cursor navigation over an ordered chunk sequence

/// Cursor-based access to a precomputed chunk sequence
///
/// Implementors supply positional lookup, the count, and the two cursor
/// mutators. Every other accessor is derived from those and treats an
/// out-of-range cursor as "no chunk".
pub trait Chunker {
    /// Get the chunk at an absolute position
    fn chunk_at(&self, index: usize) -> Option<&str>;

    /// Total number of chunks
    fn count_chunks(&self) -> usize;

    /// Current cursor position
    fn index(&self) -> usize;

    /// Advance the cursor by one position
    ///
    /// The cursor is not clamped. Moving past the last chunk leaves the
    /// current chunk absent until [`Chunker::reset`] is called.
    fn next(&mut self);

    /// Move the cursor back to the first chunk
    fn reset(&mut self);

    /// Chunk under the cursor
    fn current_chunk(&self) -> Option<&str> {
        self.chunk_at(self.index())
    }

    /// Chunk after the cursor, without moving it
    fn next_chunk(&self) -> Option<&str> {
        self.index()
            .checked_add(1)
            .and_then(|index| self.chunk_at(index))
    }

    /// Chunk before the cursor, without moving it
    fn previous_chunk(&self) -> Option<&str> {
        self.index()
            .checked_sub(1)
            .and_then(|index| self.chunk_at(index))
    }

    /// Whether the text fits in exactly one chunk
    fn has_chunk(&self) -> bool {
        self.count_chunks() == 1
    }

    /// Whether the text produced at least one chunk
    fn has_chunks(&self) -> bool {
        self.count_chunks() >= 1
    }

    /// Whether a chunk exists after the cursor
    fn has_next_chunk(&self) -> bool {
        self.next_chunk().is_some()
    }

    /// Whether a chunk exists before the cursor
    fn has_previous_chunk(&self) -> bool {
        self.previous_chunk().is_some()
    }
}
