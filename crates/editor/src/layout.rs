// Chunk: docs/chunks/viewport_rendering - Visual rows for one frame
// Chunk: docs/chunks/line_wrap_rendering - Wrapped rows, highlights and caret
//!
//! Frame layout: what to draw, without drawing it.
//!
//! Starting at the viewport's scroll row, each logical row is split into
//! wrap segments until the viewport is full. The result lists one
//! [`VisualRow`] per screen row with its bytes, the selection highlight
//! within it, and where the caret goes. A renderer only has to paint.

use std::ops::Range;

use crate::document::Document;
use crate::services::TextMeasure;
use crate::viewport::Viewport;
use crate::wrap_layout::WrapLayout;

/// One screen row of text.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualRow {
    /// The logical row this segment belongs to.
    pub logical_row: usize,
    /// Byte range of the segment within the document.
    pub range: Range<usize>,
    /// True for every segment after the first of a wrapped row.
    pub continuation: bool,
    /// Selected columns within the segment, if any.
    pub highlight: Option<Range<usize>>,
}

/// Where the caret is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretPlacement {
    /// Index into [`FrameLayout::rows`].
    pub visual_row: usize,
    /// Column within that segment.
    pub col: usize,
    /// Measured x offset from the left of the text area.
    pub x: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameLayout {
    pub rows: Vec<VisualRow>,
    /// `None` when the caret's row is scrolled out of view.
    pub caret: Option<CaretPlacement>,
}

impl FrameLayout {
    /// Top y offset of visual row `index`, relative to the text area.
    pub fn row_y(index: usize, line_height: f32) -> f32 {
        index as f32 * line_height
    }
}

/// Lays out the visible part of `document`.
///
/// # Arguments
/// * `document` - The document to lay out
/// * `viewport` - Supplies the first logical row and the visual row budget
/// * `measure` - Text measurer for the editor font
/// * `max_width` - Text area width in pixels
pub fn layout_frame<M: TextMeasure + ?Sized>(
    document: &Document,
    viewport: &Viewport,
    measure: &M,
    max_width: f32,
) -> FrameLayout {
    let bytes = document.as_bytes();
    let lines = document.buffer().lines();
    let total_rows = lines.total_rows();
    let budget = viewport.visible_rows();
    let wrap = WrapLayout::new(max_width);

    let caret_pos = document.cursor_position();
    let selection = document.selection().range();

    let mut frame = FrameLayout::default();

    for row in viewport.scroll_row()..total_rows {
        if frame.rows.len() >= budget {
            break;
        }
        let line_range = lines.row_range(row);
        let line = &bytes[line_range.clone()];

        for (index, segment) in wrap.segments(measure, line).enumerate() {
            if frame.rows.len() >= budget {
                break;
            }

            let start = line_range.start + segment.start;
            let end = line_range.start + segment.end;

            let highlight = selection.as_ref().and_then(|sel| {
                let lo = sel.start.max(start);
                let hi = sel.end.min(end);
                (hi > lo).then(|| lo - start..hi - start)
            });

            if row == caret_pos.row {
                let col = caret_pos.col;
                let last_segment = segment.end == line.len();
                let inside = col >= segment.start && col < segment.end;
                if inside || (last_segment && col == line.len()) {
                    let local = col - segment.start;
                    frame.caret = Some(CaretPlacement {
                        visual_row: frame.rows.len(),
                        col: local,
                        x: WrapLayout::caret_x(measure, &line[segment.clone()], local),
                    });
                }
            }

            frame.rows.push(VisualRow {
                logical_row: row,
                range: start..end,
                continuation: index > 0,
                highlight,
            });
        }
    }

    frame
}
