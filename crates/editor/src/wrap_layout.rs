// Chunk: docs/chunks/line_wrap_rendering - Word-aware soft line wrapping
//!
//! Wrap layout calculation for soft line wrapping
//!
//! A logical line (the bytes between two newlines) is broken greedily into
//! visual segments that fit a pixel width. The breaking rule is:
//!
//! ```text
//! for i in 0..line.len():
//!     remember i if line[i] is a space
//!     if width(line[..=i]) > max_width:
//!         return last_space + 1      // the space stays on this segment
//!             or max(i, 1)           // no space seen: force a break
//! return line.len()                  // the rest fits
//! ```
//!
//! The layout is stateless: nothing is cached and every call re-measures,
//! so it never needs invalidation when the buffer changes.

use std::ops::Range;

use crate::services::TextMeasure;

/// Maximum number of bytes a single fit call examines.
///
/// Longer lines are still fully partitioned; they just take more calls.
pub const MEASURE_LIMIT: usize = 4095;

/// Stateless greedy line breaker for a given pixel width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapLayout {
    max_width: f32,
}

impl WrapLayout {
    /// Creates a layout that breaks lines wider than `max_width` pixels.
    pub fn new(max_width: f32) -> Self {
        Self { max_width }
    }

    #[inline]
    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    // Chunk: docs/chunks/line_wrap_rendering - Greedy fit of one segment
    /// Returns how many leading bytes of `line` form the next visual segment.
    ///
    /// # Arguments
    /// * `measure` - Text measurer for the editor font
    /// * `line` - The not-yet-consumed rest of a logical line
    ///
    /// # Returns
    /// 0 for empty input; otherwise a length in `[1, line.len()]`.
    pub fn fit_count<M: TextMeasure + ?Sized>(&self, measure: &M, line: &[u8]) -> usize {
        if line.is_empty() {
            return 0;
        }

        let take_max = line.len().min(MEASURE_LIMIT);
        let mut last_space = None;

        for i in 0..take_max {
            if line[i] == b' ' {
                last_space = Some(i);
            }
            if measure.measure(&line[..=i]) > self.max_width {
                return match last_space {
                    Some(space) => space + 1,
                    None => i.max(1),
                };
            }
        }

        take_max
    }

    // Chunk: docs/chunks/line_wrap_rendering - Segment iteration
    /// Iterates over the visual segments of `line` as byte ranges into it.
    ///
    /// An empty line yields exactly one empty segment so it still occupies
    /// a visual row.
    pub fn segments<'a, M: TextMeasure + ?Sized>(
        &self,
        measure: &'a M,
        line: &'a [u8],
    ) -> Segments<'a, M> {
        Segments {
            layout: *self,
            measure,
            line,
            offset: 0,
            emitted_empty: false,
        }
    }

    /// Returns the number of visual rows `line` occupies (at least 1).
    pub fn visual_rows<M: TextMeasure + ?Sized>(&self, measure: &M, line: &[u8]) -> usize {
        self.segments(measure, line).count()
    }

    // Chunk: docs/chunks/line_wrap_rendering - Caret x within a segment
    /// Returns the x offset of a caret sitting `col` bytes into `segment`.
    ///
    /// `col` is clamped to the segment length.
    #[inline]
    pub fn caret_x<M: TextMeasure + ?Sized>(measure: &M, segment: &[u8], col: usize) -> f32 {
        measure.measure(&segment[..col.min(segment.len())])
    }
}

/// Iterator returned by [`WrapLayout::segments`].
pub struct Segments<'a, M: TextMeasure + ?Sized> {
    layout: WrapLayout,
    measure: &'a M,
    line: &'a [u8],
    offset: usize,
    emitted_empty: bool,
}

impl<M: TextMeasure + ?Sized> Iterator for Segments<'_, M> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.line.is_empty() {
            if self.emitted_empty {
                return None;
            }
            self.emitted_empty = true;
            return Some(0..0);
        }

        let remaining = &self.line[self.offset..];
        if remaining.is_empty() {
            return None;
        }

        // fit_count guarantees [1, remaining.len()] here; clamp anyway so a
        // misbehaving measurer cannot stall or overrun the iteration.
        let take = self
            .layout
            .fit_count(self.measure, remaining)
            .clamp(1, remaining.len());
        let start = self.offset;
        self.offset += take;
        Some(start..self.offset)
    }
}

// =============================================================================
// Tests
// =============================================================================
