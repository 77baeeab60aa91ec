// Chunk: docs/chunks/line_addressing - Row/column addressing derived from newlines

//! Row/column addressing over a buffer snapshot.
//!
//! Nothing is cached: every query rescans the bytes from the start (or from a
//! known row start), so each call is O(length). Results are therefore always
//! consistent with the current contents, no matter how the buffer was mutated
//! between calls.

use crate::types::Position;

/// Stateless line-addressing view over a byte slice.
///
/// A "row" is the number of newline bytes strictly before an offset; the
/// "column" is the byte count since the preceding newline (or buffer start).
#[derive(Debug, Clone, Copy)]
pub struct LineIndex<'a> {
    bytes: &'a [u8],
}

impl<'a> LineIndex<'a> {
    /// Creates a view over the given bytes.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Returns the number of bytes in the viewed buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the viewed buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the row and column of `offset`.
    ///
    /// Offsets past the end are treated as the end of the buffer.
    pub fn row_col_of(&self, offset: usize) -> Position {
        let end = offset.min(self.bytes.len());
        let mut pos = Position::default();
        for &b in &self.bytes[..end] {
            if b == b'\n' {
                pos.row += 1;
                pos.col = 0;
            } else {
                pos.col += 1;
            }
        }
        pos
    }

    /// Returns the offset where `row` starts.
    ///
    /// Row 0 always starts at 0. Rows beyond the last clamp to the buffer
    /// length rather than failing.
    pub fn row_start(&self, row: usize) -> usize {
        if row == 0 {
            return 0;
        }
        let mut seen = 0;
        for (i, &b) in self.bytes.iter().enumerate() {
            if b == b'\n' {
                seen += 1;
                if seen == row {
                    return i + 1;
                }
            }
        }
        self.bytes.len()
    }

    /// Returns the offset of the first newline at or after `start`, or the
    /// buffer length if there is none.
    pub fn row_end(&self, start: usize) -> usize {
        let start = start.min(self.bytes.len());
        self.bytes[start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.bytes.len(), |i| start + i)
    }

    /// Returns the length of `row` in bytes, excluding its newline.
    pub fn row_len(&self, row: usize) -> usize {
        let start = self.row_start(row);
        self.row_end(start) - start
    }

    /// Returns the number of rows. An empty buffer has exactly one.
    pub fn total_rows(&self) -> usize {
        1 + self.bytes.iter().filter(|&&b| b == b'\n').count()
    }

    /// Returns the offset for `(row, col)`.
    ///
    /// The column is clamped to the row's length so it never runs past the
    /// end of the row into the next one.
    pub fn offset_of_row_col(&self, row: usize, col: usize) -> usize {
        let start = self.row_start(row);
        let len = self.row_end(start) - start;
        start + col.min(len)
    }

    /// Convenience wrapper for [`Self::offset_of_row_col`].
    pub fn offset_of(&self, pos: Position) -> usize {
        self.offset_of_row_col(pos.row, pos.col)
    }

    /// Returns the byte range of `row`, excluding its newline.
    pub fn row_range(&self, row: usize) -> std::ops::Range<usize> {
        let start = self.row_start(row);
        start..self.row_end(start)
    }
}
