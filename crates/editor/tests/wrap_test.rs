// Chunk: docs/chunks/line_wrap_rendering - Integration tests for soft line wrapping
//!
//! Integration tests for soft line wrapping.
//!
//! `wrap_layout.rs` unit-tests the greedy fit against a monospace measure.
//! These tests use a proportional measure and check the properties every
//! renderer relies on: segments partition the line, each segment fits unless
//! it is a single byte, and frame layout agrees with the segmentation.

use std::ops::Range;

use pen_editor::{layout_frame, Document, TextMeasure, Viewport, WrapLayout, MEASURE_LIMIT};

/// Narrow letters are thin, wide letters fat, everything else in between.
struct Proportional;

impl Proportional {
    fn advance(byte: u8) -> f32 {
        match byte {
            b'i' | b'l' | b'.' => 4.0,
            b' ' => 5.0,
            b'm' | b'w' | b'M' | b'W' => 14.0,
            _ => 9.0,
        }
    }
}

impl TextMeasure for Proportional {
    fn measure(&self, text: &[u8]) -> f32 {
        text.iter().map(|&b| Self::advance(b)).sum()
    }
}

fn segments(line: &[u8], width: f32) -> Vec<Range<usize>> {
    WrapLayout::new(width).segments(&Proportional, line).collect()
}

fn assert_partition(line: &[u8], width: f32) {
    let segs = segments(line, width);
    assert!(!segs.is_empty(), "every line has at least one segment");

    let mut expected_start = 0;
    for seg in &segs {
        assert_eq!(seg.start, expected_start, "segments are contiguous");
        if !line.is_empty() {
            assert!(seg.end > seg.start, "segments are non-empty");
        }
        let text = &line[seg.clone()];
        let fits = Proportional.measure(text) <= width;
        let trailing_space_only = text.last() == Some(&b' ')
            && Proportional.measure(&text[..text.len() - 1]) <= width;
        assert!(
            fits || text.len() == 1 || trailing_space_only,
            "segment {:?} of width {} overflows {}",
            String::from_utf8_lossy(text),
            Proportional.measure(text),
            width
        );
        expected_start = seg.end;
    }
    assert_eq!(expected_start, line.len(), "segments cover the line");
}

// =============================================================================
// Partition properties
// =============================================================================

#[test]
fn test_segments_partition_prose() {
    let line = b"the quick brown fox jumps over the lazy dog while williams mimics";
    for width in [1.0, 20.0, 45.0, 60.0, 100.0, 333.0, 10_000.0] {
        assert_partition(line, width);
    }
}

#[test]
fn test_segments_partition_without_spaces() {
    let line = "mwmwiiilllmmmm".repeat(10);
    for width in [3.0, 14.0, 27.0, 90.0] {
        assert_partition(line.as_bytes(), width);
    }
}

#[test]
fn test_segments_partition_runs_of_spaces() {
    let line = b"a     b          c   ";
    for width in [5.0, 12.0, 30.0] {
        assert_partition(line, width);
    }
}

#[test]
fn test_empty_line_is_one_empty_segment() {
    assert_eq!(segments(b"", 50.0), vec![0..0]);
}

#[test]
fn test_wide_enough_line_is_single_segment() {
    let line = b"fits on one row";
    let width = Proportional.measure(line);
    assert_eq!(segments(line, width), vec![0..line.len()]);
}

// =============================================================================
// Break choice
// =============================================================================

#[test]
fn test_breaks_after_last_space() {
    // "ill" is 12 wide and a space 5: the second "ill" overflows 28
    let segs = segments(b"ill ill ill", 28.0);
    assert_eq!(segs, vec![0..4, 4..8, 8..11]);
}

#[test]
fn test_space_at_overflow_stays_on_row() {
    // The space that overflows is kept as the segment's last byte
    let segs = segments(b"ill ill ill", 30.0);
    assert_eq!(segs, vec![0..8, 8..11]);
}

#[test]
fn test_hard_break_without_space() {
    // Each 'm' is 14 wide: two fit in 30, the third overflows
    let segs = segments(b"mmmmm", 30.0);
    assert_eq!(segs, vec![0..2, 2..4, 4..5]);
}

#[test]
fn test_glyph_wider_than_row_still_advances() {
    let segs = segments(b"WWW", 5.0);
    assert_eq!(segs, vec![0..1, 1..2, 2..3]);
}

#[test]
fn test_measure_limit_caps_a_segment() {
    let line = vec![b'i'; MEASURE_LIMIT + 100];
    let segs = segments(&line, f32::MAX);
    assert_eq!(segs, vec![0..MEASURE_LIMIT, MEASURE_LIMIT..line.len()]);
}

#[test]
fn test_visual_rows_counts_segments() {
    let layout = WrapLayout::new(30.0);
    assert_eq!(layout.visual_rows(&Proportional, b""), 1);
    assert_eq!(layout.visual_rows(&Proportional, b"mmmmm"), 3);
}

// =============================================================================
// Frame layout agrees with segmentation
// =============================================================================

fn tall_viewport() -> Viewport {
    let mut viewport = Viewport::new(10.0);
    viewport.update_size(1000.0, 100);
    viewport
}

#[test]
fn test_frame_rows_follow_segments() {
    let text = b"short\nthe quick brown fox jumps over the lazy dog\n\nend";
    let doc = Document::from_bytes(text);
    let width = 60.0;
    let frame = layout_frame(&doc, &tall_viewport(), &Proportional, width);

    let layout = WrapLayout::new(width);
    let expected: usize = doc
        .as_bytes()
        .split(|&b| b == b'\n')
        .map(|line| layout.visual_rows(&Proportional, line))
        .sum();
    assert_eq!(frame.rows.len(), expected);

    // Rows are contiguous within each logical line
    for pair in frame.rows.windows(2) {
        if pair[1].continuation {
            assert_eq!(pair[0].logical_row, pair[1].logical_row);
            assert_eq!(pair[0].range.end, pair[1].range.start);
        } else {
            assert_eq!(pair[0].logical_row + 1, pair[1].logical_row);
        }
    }
}

#[test]
fn test_caret_x_uses_measured_prefix() {
    let mut doc = Document::from_bytes(b"ill mmm");
    doc.click(5, false);
    let frame = layout_frame(&doc, &tall_viewport(), &Proportional, 1000.0);

    let caret = frame.caret.expect("caret is visible");
    assert_eq!(caret.col, 5);
    assert_eq!(caret.x, 4.0 * 3.0 + 5.0 + 14.0);
}

#[test]
fn test_caret_at_end_of_wrapped_line_is_on_last_segment() {
    let doc = Document::from_bytes(b"mmmmm");
    let frame = layout_frame(&doc, &tall_viewport(), &Proportional, 30.0);

    let caret = frame.caret.expect("caret is visible");
    assert_eq!(frame.rows.len(), 3);
    assert_eq!(caret.visual_row, 2);
    assert_eq!(caret.col, 1);
    assert_eq!(caret.x, 14.0);
}
