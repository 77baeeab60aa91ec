// Chunk: docs/chunks/viewport_rendering - Row-granular viewport
// Chunk: docs/chunks/viewport_scrolling - Wheel scrolling and cursor follow
//!
//! Viewport abstraction for mapping buffer rows to screen rows
//!
//! The viewport determines which logical rows are on screen:
//! - `scroll_row`: the first logical row drawn at the top of the text area
//! - `visible_rows`: how many rows fit (computed from the text area height)
//!
//! Scrolling is whole-row only. The scroll position is always clamped to
//! `[0, max_scroll]` where `max_scroll = max(0, total_rows - visible_rows)`,
//! so the last row can reach the bottom edge but never leave empty space
//! below it.

use std::ops::Range;

#[derive(Debug, Clone)]
pub struct Viewport {
    line_height: f32,
    scroll_row: usize,
    /// Always at least 1
    visible_rows: usize,
}

impl Viewport {
    /// Creates a viewport at row 0 showing a single row.
    ///
    /// Call `update_size()` to fit it to the text area.
    pub fn new(line_height: f32) -> Self {
        Self {
            line_height,
            scroll_row: 0,
            visible_rows: 1,
        }
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Returns the first visible logical row.
    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Largest valid scroll row for a document of `total_rows` rows.
    pub fn max_scroll(&self, total_rows: usize) -> usize {
        total_rows.saturating_sub(self.visible_rows)
    }

    /// Recomputes `visible_rows = floor(height_px / line_height)` (at least 1)
    /// and re-clamps the scroll position.
    // Chunk: docs/chunks/resize_click_alignment - Re-clamp scroll on resize
    pub fn update_size(&mut self, height_px: f32, total_rows: usize) {
        let rows = if self.line_height > 0.0 {
            (height_px / self.line_height).floor()
        } else {
            0.0
        };
        self.visible_rows = if rows.is_finite() && rows >= 1.0 {
            rows as usize
        } else {
            1
        };
        self.scroll_to(self.scroll_row, total_rows);
    }

    /// Puts `row` at the top, clamped to valid bounds.
    pub fn scroll_to(&mut self, row: usize, total_rows: usize) {
        self.scroll_row = row.min(self.max_scroll(total_rows));
    }

    /// Applies one frame of mouse wheel movement.
    ///
    /// Positive `wheel` scrolls toward the start of the document. Fractional
    /// movement is truncated toward zero, so sub-notch deltas do nothing.
    pub fn scroll_by_wheel(&mut self, wheel: f32, total_rows: usize) {
        let notches = wheel.trunc();
        if notches == 0.0 || !notches.is_finite() {
            return;
        }
        let target = self.scroll_row as f64 - notches as f64;
        let target = if target <= 0.0 { 0 } else { target as usize };
        self.scroll_to(target, total_rows);
    }

    /// Scrolls the minimum amount needed to show `row`.
    ///
    /// Returns `true` if the scroll position changed.
    pub fn ensure_row_visible(&mut self, row: usize, total_rows: usize) -> bool {
        let old = self.scroll_row;
        let mut target = self.scroll_row;
        if row < target {
            target = row;
        } else if row >= target + self.visible_rows {
            target = row + 1 - self.visible_rows;
        }
        self.scroll_to(target, total_rows);
        self.scroll_row != old
    }

    /// Returns the logical rows on screen: `[scroll_row, scroll_row + visible_rows)`
    /// truncated at the end of the document.
    pub fn visible_range(&self, total_rows: usize) -> Range<usize> {
        let start = self.scroll_row.min(total_rows);
        let end = (self.scroll_row + self.visible_rows).min(total_rows);
        start..end
    }

    /// Returns to the top of the document.
    pub fn reset(&mut self) {
        self.scroll_row = 0;
    }
}
