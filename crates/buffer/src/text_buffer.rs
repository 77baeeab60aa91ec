// Chunk: docs/chunks/text_buffer - Byte buffer with embedded cursor
// Chunk: docs/chunks/allocation_failure - Atomic growth with explicit failure

//! TextBuffer is the storage half of the editing core.
//!
//! It is a contiguous, growable byte store with an embedded edit cursor. Every
//! buffer element is one byte and one single-width unit of motion; there is no
//! codepoint or grapheme awareness.
//!
//! Growth is amortized doubling. Growth happens before any byte moves, so an
//! allocation failure leaves the buffer exactly as it was and is reported as
//! [`BufferError::AllocationFailure`]. A buffer may also carry a capacity
//! limit; growth past it fails the same way.

use std::io::{ErrorKind, Read, Write};
use std::ops::Range;

use crate::error::BufferError;
use crate::line_index::LineIndex;
use crate::types::Position;

/// Capacity allocated for a freshly created buffer.
pub const INITIAL_CAPACITY: usize = 1024;
const GROWTH_FACTOR: usize = 2;
/// Bytes pulled from a reader per read call while loading.
const LOAD_CHUNK: usize = 8 * 1024;

/// A byte buffer with an edit cursor.
///
/// Invariants, held after every call including failed ones:
/// - `cursor() <= len()`
/// - `len() <= capacity()`
#[derive(Debug, Clone)]
pub struct TextBuffer {
    content: Vec<u8>,
    cursor: usize,
    /// Largest document, in bytes, growth may make room for.
    capacity_limit: usize,
}

impl TextBuffer {
    /// Creates a new empty buffer with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a new empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            content: Vec::with_capacity(capacity.max(1)),
            cursor: 0,
            capacity_limit: usize::MAX,
        }
    }

    /// Creates a buffer holding `bytes`, cursor at the start.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut content = Vec::with_capacity(bytes.len().max(INITIAL_CAPACITY));
        content.extend_from_slice(bytes);
        Self {
            content,
            cursor: 0,
            capacity_limit: usize::MAX,
        }
    }

    // ==================== Accessors ====================

    /// Returns the whole document.
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Returns the number of valid bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the allocated storage size in bytes.
    pub fn capacity(&self) -> usize {
        self.content.capacity()
    }

    /// Returns the largest document size growth may reach.
    pub fn capacity_limit(&self) -> usize {
        self.capacity_limit
    }

    /// Caps how large the document may grow. Content already past the limit
    /// is kept; only further growth fails.
    pub fn set_capacity_limit(&mut self, limit: usize) {
        self.capacity_limit = limit;
    }

    /// Returns the cursor offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamped to `[0, len]`.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.content.len());
    }

    /// Returns the bytes in `range`, clamped to the buffer.
    pub fn slice(&self, range: Range<usize>) -> &[u8] {
        let end = range.end.min(self.content.len());
        let start = range.start.min(end);
        &self.content[start..end]
    }

    /// Returns a line-addressing view over the current contents.
    pub fn lines(&self) -> LineIndex<'_> {
        LineIndex::new(&self.content)
    }

    /// Returns the row and column of the cursor.
    pub fn row_col(&self) -> Position {
        self.lines().row_col_of(self.cursor)
    }

    /// Returns the number of rows (at least 1).
    pub fn total_rows(&self) -> usize {
        self.lines().total_rows()
    }

    // ==================== Cursor Movement ====================

    /// Moves the cursor one byte left. No-op at the start.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one byte right. No-op at the end.
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the start of its row.
    pub fn move_home(&mut self) {
        let row = self.row_col().row;
        self.cursor = self.lines().row_start(row);
    }

    /// Moves the cursor to the end of its row (before the newline).
    pub fn move_end(&mut self) {
        let lines = self.lines();
        let start = lines.row_start(self.row_col().row);
        self.cursor = lines.row_end(start);
    }

    // ==================== Mutations ====================

    /// Makes room for `needed` bytes, doubling the capacity as often as
    /// required. Does nothing to the contents on failure.
    fn ensure_capacity(&mut self, needed: usize) -> Result<(), BufferError> {
        if needed > self.capacity_limit {
            tracing::warn!(requested = needed, limit = self.capacity_limit, "buffer limit reached");
            return Err(BufferError::AllocationFailure { requested: needed });
        }
        let cap = self.content.capacity();
        if needed <= cap {
            return Ok(());
        }

        let mut new_cap = cap.max(1);
        while new_cap < needed {
            new_cap = new_cap
                .checked_mul(GROWTH_FACTOR)
                .ok_or(BufferError::AllocationFailure { requested: needed })?;
        }
        let new_cap = new_cap.min(self.capacity_limit);

        let additional = new_cap - self.content.len();
        self.content.try_reserve_exact(additional).map_err(|err| {
            tracing::warn!(requested = new_cap, %err, "buffer growth failed");
            BufferError::AllocationFailure { requested: new_cap }
        })
    }

    /// Guarantees room for `additional` more bytes.
    ///
    /// A following insert of at most `additional` bytes cannot fail.
    pub fn reserve(&mut self, additional: usize) -> Result<(), BufferError> {
        let needed = self
            .content
            .len()
            .checked_add(additional)
            .ok_or(BufferError::AllocationFailure { requested: usize::MAX })?;
        self.ensure_capacity(needed)
    }

    /// Inserts `bytes` at `at` and leaves the cursor just after them.
    ///
    /// `at` is clamped to `[0, len]`. Inserting nothing is a no-op. On
    /// allocation failure the buffer, including the cursor, is unchanged.
    pub fn insert_at(&mut self, at: usize, bytes: &[u8]) -> Result<(), BufferError> {
        if bytes.is_empty() {
            return Ok(());
        }
        debug_assert!(at <= self.content.len(), "insert offset {at} past end");
        let at = at.min(self.content.len());

        self.reserve(bytes.len())?;

        // Capacity is already reserved, so neither call reallocates.
        self.content.extend_from_slice(bytes);
        self.content[at..].rotate_right(bytes.len());
        self.cursor = at + bytes.len();

        self.debug_check_invariants();
        Ok(())
    }

    /// Inserts `bytes` at the cursor.
    pub fn insert(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.insert_at(self.cursor, bytes)
    }

    /// Inserts a single byte at the cursor.
    pub fn insert_byte(&mut self, byte: u8) -> Result<(), BufferError> {
        self.insert(&[byte])
    }

    /// Removes bytes `[a, z)`.
    ///
    /// Both bounds are clamped to `[0, len]`; an empty or inverted range is a
    /// no-op. A cursor after the range shifts left by the removed length, a
    /// cursor inside the range snaps to `a`, and a cursor before it stays put.
    pub fn delete_range(&mut self, a: usize, z: usize) {
        let len = self.content.len();
        let a = a.min(len);
        let z = z.min(len);
        if z <= a {
            return;
        }

        self.content.drain(a..z);

        if self.cursor > z {
            self.cursor -= z - a;
        } else if self.cursor > a {
            self.cursor = a;
        }

        self.debug_check_invariants();
    }

    /// Deletes the byte before the cursor. No-op at offset 0.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.delete_range(self.cursor - 1, self.cursor);
    }

    /// Replaces the whole document with `bytes`, cursor at the end.
    pub fn replace_contents(&mut self, bytes: Vec<u8>) {
        self.content = bytes;
        self.cursor = self.content.len();
        self.debug_check_invariants();
    }

    // ==================== Persistence ====================

    /// Replaces the document with everything `reader` yields.
    ///
    /// The data is read into a staging allocation first; if reading or
    /// growing the staging area fails the current document is left untouched.
    /// On success the cursor sits at the end of the new document.
    pub fn load_from<R: Read>(&mut self, mut reader: R) -> Result<(), BufferError> {
        let mut staging: Vec<u8> = Vec::new();
        let mut chunk = [0u8; LOAD_CHUNK];
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            let needed = staging.len() + n;
            if needed > self.capacity_limit {
                tracing::warn!(requested = needed, limit = self.capacity_limit, "file exceeds buffer limit");
                return Err(BufferError::AllocationFailure { requested: needed });
            }
            staging.try_reserve(n).map_err(|err| {
                tracing::warn!(requested = needed, %err, "staging growth failed");
                BufferError::AllocationFailure { requested: needed }
            })?;
            staging.extend_from_slice(&chunk[..n]);
        }
        tracing::debug!(bytes = staging.len(), "loaded document");
        self.replace_contents(staging);
        Ok(())
    }

    /// Writes the whole document to `writer`, verbatim.
    ///
    /// Succeeds only if every byte was accepted.
    pub fn save_to<W: Write>(&self, mut writer: W) -> Result<(), BufferError> {
        let expected = self.content.len();
        let mut written = 0;
        while written < expected {
            match writer.write(&self.content[written..]) {
                Ok(0) => return Err(BufferError::ShortWrite { written, expected }),
                Ok(n) => written += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
        writer.flush()?;
        tracing::debug!(bytes = written, "saved document");
        Ok(())
    }

    // ==================== Validation ====================

    /// Debug assertion: the cursor and length invariants hold.
    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        assert!(
            self.cursor <= self.content.len(),
            "cursor {} past length {}",
            self.cursor,
            self.content.len()
        );
        assert!(self.content.len() <= self.content.capacity());
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_invariants(&self) {}
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
