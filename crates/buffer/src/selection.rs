// Chunk: docs/chunks/text_selection_model - Anchor/caret selection over byte offsets

//! Selection model layered on buffer offsets.
//!
//! The anchor is the fixed end and the caret the moving end. The anchor may be
//! numerically greater than the caret when selecting leftward; consumers must
//! use [`Selection::clipped_range`] rather than the raw ends.

use std::ops::Range;

use crate::text_buffer::TextBuffer;

/// Anchor/caret pair plus an "in progress" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    active: bool,
    anchor: usize,
    caret: usize,
}

impl Selection {
    /// A zero-width, inactive selection at `offset`.
    pub fn collapsed(offset: usize) -> Self {
        Self {
            active: false,
            anchor: offset,
            caret: offset,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Returns true if a selection gesture is active and spans at least one byte.
    pub fn has_selection(&self) -> bool {
        self.active && self.anchor != self.caret
    }

    /// Returns `[min(anchor, caret), max(anchor, caret))`.
    pub fn clipped_range(&self) -> Range<usize> {
        self.anchor.min(self.caret)..self.anchor.max(self.caret)
    }

    /// Returns the clipped range only when [`Self::has_selection`] holds.
    pub fn range(&self) -> Option<Range<usize>> {
        self.has_selection().then(|| self.clipped_range())
    }

    /// Resets to a zero-width, inactive selection at `offset`.
    pub fn collapse_to(&mut self, offset: usize) {
        *self = Self::collapsed(offset);
    }

    /// Moves the caret to `offset`, first anchoring at `cursor` if no
    /// selection is active yet.
    pub fn extend_to(&mut self, cursor: usize, offset: usize) {
        if !self.active {
            self.active = true;
            self.anchor = cursor;
        }
        self.caret = offset;
    }

    /// Activates a zero-width selection at `cursor` unless one is active.
    ///
    /// Used when the extend modifier goes down before any motion.
    pub fn begin_at(&mut self, cursor: usize) {
        if !self.active {
            self.active = true;
            self.anchor = cursor;
            self.caret = cursor;
        }
    }

    /// Selects the whole buffer and moves its cursor to the end.
    pub fn select_all(&mut self, buffer: &mut TextBuffer) {
        let len = buffer.len();
        self.active = true;
        self.anchor = 0;
        self.caret = len;
        buffer.set_cursor(len);
    }

    /// Clamps both ends into `[0, len]`.
    pub fn clamp_to(&mut self, len: usize) {
        self.anchor = self.anchor.min(len);
        self.caret = self.caret.min(len);
    }
}
