// Chunk: docs/chunks/editable_buffer - Document editing operations
// Chunk: docs/chunks/text_selection_model - Selection-aware editing
//!
//! A document is the buffer, its selection and the sticky column, edited
//! together.
//!
//! Every operation keeps the selection consistent with the buffer:
//! - edits replace the selection (if any), then leave a zero-width selection
//!   at the new cursor
//! - non-extending moves collapse the selection at the new cursor
//! - extending moves anchor at the cursor on the first move, then drag the
//!   caret along
//!
//! Operations that may allocate reserve their space before touching the
//! buffer, so an allocation failure leaves the document (selection included)
//! exactly as it was.

use std::io::Read;

use pen_buffer::{BufferError, Position, Selection, TextBuffer};

#[derive(Debug, Clone, Default)]
pub struct Document {
    buffer: TextBuffer,
    selection: Selection,
    /// Column that vertical motion aims for.
    desired_col: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: TextBuffer::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Creates a document holding `bytes`, cursor at the end.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut doc = Self::new();
        doc.buffer.replace_contents(bytes.to_vec());
        doc.after_jump();
        doc
    }

    // ==================== Accessors ====================

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn cursor_position(&self) -> Position {
        self.buffer.row_col()
    }

    pub fn desired_col(&self) -> usize {
        self.desired_col
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Caps the document size; edits and loads that would exceed it fail.
    pub fn set_capacity_limit(&mut self, limit: usize) {
        self.buffer.set_capacity_limit(limit);
    }

    // ==================== Editing ====================

    /// Replaces the selection (if any) with `bytes`.
    ///
    /// Returns `Ok(true)` if the content changed.
    pub fn type_text(&mut self, bytes: &[u8]) -> Result<bool, BufferError> {
        if bytes.is_empty() {
            return Ok(self.delete_selection());
        }
        // Removing the selection only shrinks the buffer, so reserving for
        // the full insert up front makes the whole replacement infallible.
        self.buffer.reserve(bytes.len())?;
        self.delete_selection();
        self.buffer.insert(bytes)?;
        self.after_jump();
        Ok(true)
    }

    pub fn type_byte(&mut self, byte: u8) -> Result<bool, BufferError> {
        self.type_text(&[byte])
    }

    pub fn insert_newline(&mut self) -> Result<bool, BufferError> {
        self.type_byte(b'\n')
    }

    /// Inserts `width` spaces.
    pub fn insert_tab(&mut self, width: usize) -> Result<bool, BufferError> {
        self.type_text(&vec![b' '; width])
    }

    /// Deletes the selection, or the byte before the cursor if there is none.
    ///
    /// Returns `true` if the content changed; backspace at offset 0 with no
    /// selection is a no-op.
    pub fn backspace(&mut self) -> bool {
        let changed = if self.selection.has_selection() {
            self.delete_selection()
        } else if self.buffer.cursor() > 0 {
            self.buffer.backspace();
            true
        } else {
            false
        };
        self.after_jump();
        changed
    }

    /// Pastes `bytes` over the selection. An empty paste is a no-op.
    pub fn paste(&mut self, bytes: &[u8]) -> Result<bool, BufferError> {
        if bytes.is_empty() {
            return Ok(false);
        }
        self.type_text(bytes)
    }

    /// Returns a copy of the selected bytes, or `None` with no selection.
    pub fn copy_selection(&self) -> Option<Vec<u8>> {
        let range = self.selection.range()?;
        Some(self.buffer.slice(range).to_vec())
    }

    /// Removes the selected bytes and returns them.
    pub fn cut_selection(&mut self) -> Option<Vec<u8>> {
        let bytes = self.copy_selection()?;
        self.delete_selection();
        self.after_jump();
        Some(bytes)
    }

    /// Removes the selected range. Leaves the selection collapsed at the
    /// cursor either way.
    fn delete_selection(&mut self) -> bool {
        let removed = match self.selection.range() {
            Some(range) => {
                self.buffer.delete_range(range.start, range.end);
                true
            }
            None => false,
        };
        self.selection.collapse_to(self.buffer.cursor());
        removed
    }

    // ==================== Cursor Movement ====================

    /// Runs `motion`, then either extends the selection to the new cursor or
    /// collapses it there.
    fn move_with(&mut self, extend: bool, motion: impl FnOnce(&mut TextBuffer)) {
        if extend {
            self.selection.begin_at(self.buffer.cursor());
        }
        motion(&mut self.buffer);
        let cursor = self.buffer.cursor();
        if extend {
            self.selection.extend_to(cursor, cursor);
        } else {
            self.selection.collapse_to(cursor);
        }
    }

    pub fn move_left(&mut self, extend: bool) {
        self.move_with(extend, TextBuffer::move_left);
        self.remember_col();
    }

    pub fn move_right(&mut self, extend: bool) {
        self.move_with(extend, TextBuffer::move_right);
        self.remember_col();
    }

    pub fn move_home(&mut self, extend: bool) {
        self.move_with(extend, TextBuffer::move_home);
        self.remember_col();
    }

    pub fn move_end(&mut self, extend: bool) {
        self.move_with(extend, TextBuffer::move_end);
        self.remember_col();
    }

    // Chunk: docs/chunks/line_nav_sticky_column - Sticky column for vertical motion
    /// Moves one row up, aiming for the sticky column. On the first row the
    /// cursor stays on that row.
    pub fn move_up(&mut self, extend: bool) {
        let col = self.desired_col;
        self.move_with(extend, |buffer| {
            let row = buffer.row_col().row.saturating_sub(1);
            let target = buffer.lines().offset_of_row_col(row, col);
            buffer.set_cursor(target);
        });
    }

    /// Moves one row down, aiming for the sticky column. On the last row the
    /// cursor stays on that row.
    pub fn move_down(&mut self, extend: bool) {
        let col = self.desired_col;
        self.move_with(extend, |buffer| {
            let last_row = buffer.total_rows() - 1;
            let row = (buffer.row_col().row + 1).min(last_row);
            let target = buffer.lines().offset_of_row_col(row, col);
            buffer.set_cursor(target);
        });
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&mut self.buffer);
        self.remember_col();
    }

    // ==================== Pointer ====================

    /// Places the cursor at a clicked offset; with `extend`, grows the
    /// selection from the current cursor instead.
    pub fn click(&mut self, offset: usize, extend: bool) {
        self.move_with(extend, |buffer| buffer.set_cursor(offset));
        self.remember_col();
    }

    /// Drags the caret to `offset`, anchoring at the cursor if no selection
    /// is in progress.
    pub fn drag_to(&mut self, offset: usize) {
        self.move_with(true, |buffer| buffer.set_cursor(offset));
        self.remember_col();
    }

    // ==================== Loading ====================

    /// Replaces the whole document with what `reader` yields.
    ///
    /// On failure the document is unchanged.
    pub fn load_from<R: Read>(&mut self, reader: R) -> Result<(), BufferError> {
        self.buffer.load_from(reader)?;
        self.after_jump();
        Ok(())
    }

    /// Replaces the whole document with `bytes`, cursor at the end.
    pub fn load(&mut self, bytes: Vec<u8>) {
        self.buffer.replace_contents(bytes);
        self.after_jump();
    }

    // ==================== Helpers ====================

    fn remember_col(&mut self) {
        self.desired_col = self.buffer.row_col().col;
    }

    /// Collapses the selection at the cursor and resets the sticky column.
    fn after_jump(&mut self) {
        self.selection.collapse_to(self.buffer.cursor());
        self.remember_col();
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        let len = self.buffer.len();
        assert!(self.buffer.cursor() <= len);
        assert!(self.selection.anchor() <= len);
        assert!(self.selection.caret() <= len);
    }
}
