// Chunk: docs/chunks/viewport_rendering - Viewport + buffer-to-screen mapping
// Chunk: docs/chunks/resize_click_alignment - Clicks stay aligned across resizes
//!
//! Integration tests for the viewport and pointer mapping.
//!
//! These tests verify:
//! - Visible ranges and cursor follow against a real buffer
//! - Pointer positions map to the offset drawn under them, at any scroll row
//! - Resizing the text area re-clamps scrolling before the next click

use pen_buffer::{Position, TextBuffer};
use pen_editor::{
    EditorSession, FileService, HitTester, MemoryClipboard, MonospaceMeasure, Rect, Services,
    Viewport,
};
use pen_input::{InputFrame, MouseEvent, MouseEventKind};
use std::path::{Path, PathBuf};
use std::time::Instant;

fn numbered(lines: usize) -> TextBuffer {
    let text: Vec<String> = (0..lines).map(|i| format!("row {i}")).collect();
    TextBuffer::from_bytes(text.join("\n").as_bytes())
}

// =============================================================================
// Viewport over a buffer
// =============================================================================

#[test]
fn test_visible_range_tracks_scroll() {
    let buffer = numbered(100);
    let total = buffer.total_rows();
    let mut viewport = Viewport::new(20.0);
    viewport.update_size(200.0, total);

    assert_eq!(viewport.visible_range(total), 0..10);
    viewport.scroll_to(45, total);
    assert_eq!(viewport.visible_range(total), 45..55);
    viewport.scroll_to(1000, total);
    assert_eq!(viewport.visible_range(total), 90..100);
}

#[test]
fn test_short_document_never_scrolls() {
    let buffer = numbered(3);
    let total = buffer.total_rows();
    let mut viewport = Viewport::new(20.0);
    viewport.update_size(200.0, total);

    viewport.scroll_by_wheel(-5.0, total);
    assert_eq!(viewport.scroll_row(), 0);
    assert_eq!(viewport.visible_range(total), 0..3);
}

#[test]
fn test_cursor_follow_both_directions() {
    let mut buffer = numbered(100);
    let total = buffer.total_rows();
    let mut viewport = Viewport::new(20.0);
    viewport.update_size(200.0, total);

    let target = buffer.lines().offset_of_row_col(60, 0);
    buffer.set_cursor(target);
    let row = buffer.row_col().row;
    assert!(viewport.ensure_row_visible(row, total));
    assert_eq!(viewport.visible_range(total), 51..61);

    // Already visible: nothing moves
    assert!(!viewport.ensure_row_visible(55, total));

    assert!(viewport.ensure_row_visible(3, total));
    assert_eq!(viewport.scroll_row(), 3);
}

// =============================================================================
// Pointer mapping
// =============================================================================

#[test]
fn test_offsets_under_pointer_match_rows_drawn() {
    let buffer = numbered(100);
    let lines = buffer.lines();
    let hit = HitTester::new(Rect::new(0.0, 0.0, 300.0, 200.0), 20.0, 10.0);

    for scroll_row in [0, 17, 90] {
        for screen_row in 0..10 {
            let y = screen_row as f32 * 20.0 + 10.0;
            let offset = hit.offset_at(&lines, 0.0, y, scroll_row);
            let expected = (scroll_row + screen_row).min(99);
            assert_eq!(lines.row_col_of(offset), Position::new(expected, 0));
        }
    }
}

#[test]
fn test_half_cell_rounding() {
    let buffer = TextBuffer::from_bytes(b"abcdef");
    let lines = buffer.lines();
    let hit = HitTester::new(Rect::new(0.0, 0.0, 300.0, 200.0), 20.0, 10.0);

    assert_eq!(hit.offset_at(&lines, 14.9, 5.0, 0), 1);
    assert_eq!(hit.offset_at(&lines, 15.0, 5.0, 0), 2);
    assert_eq!(hit.offset_at(&lines, 299.0, 5.0, 0), 6);
}

// =============================================================================
// Resize through the session
// =============================================================================

struct NoDialogs;

impl FileService for NoDialogs {
    fn open_dialog(&mut self) -> Option<PathBuf> {
        None
    }

    fn save_dialog(&mut self, _suggested: &Path) -> Option<PathBuf> {
        None
    }
}

fn tick(session: &mut EditorSession, clipboard: &mut MemoryClipboard, frame: InputFrame) {
    let measure = MonospaceMeasure::new(10.0);
    let mut files = NoDialogs;
    let mut services = Services::new(&measure, clipboard, &mut files);
    session.tick(&frame, &mut services, Instant::now());
}

fn session_with_rows(rows: usize) -> (EditorSession, MemoryClipboard) {
    use pen_editor::Clipboard;

    let mut session = EditorSession::default();
    session.set_text_area(Rect::new(0.0, 0.0, 400.0, 300.0));
    let mut clipboard = MemoryClipboard::new();
    let text: Vec<String> = (0..rows).map(|i| format!("row {i}")).collect();
    clipboard.set_text(text.join("\n").as_bytes());
    tick(
        &mut session,
        &mut clipboard,
        InputFrame::new().key(pen_input::KeyEvent::ctrl('v')),
    );
    (session, clipboard)
}

#[test]
fn test_growing_window_reclamps_scroll() {
    // 30px rows: 10 visible of 40, cursor on the last row
    let (mut session, _clipboard) = session_with_rows(40);
    assert_eq!(session.viewport().scroll_row(), 30);

    session.set_text_area(Rect::new(0.0, 0.0, 400.0, 900.0));
    assert_eq!(session.viewport().visible_rows(), 30);
    assert_eq!(session.viewport().scroll_row(), 10);
}

#[test]
fn test_click_after_resize_hits_drawn_row() {
    let (mut session, mut clipboard) = session_with_rows(40);
    session.set_text_area(Rect::new(0.0, 0.0, 400.0, 600.0));
    let top = session.viewport().scroll_row();
    assert_eq!(top, 20);

    let frame = session.layout(&MonospaceMeasure::new(10.0));
    assert_eq!(frame.rows[0].logical_row, top);

    // Third screen row
    tick(
        &mut session,
        &mut clipboard,
        InputFrame::new()
            .mouse(MouseEvent::new(MouseEventKind::Down, 0.0, 75.0))
            .mouse(MouseEvent::new(MouseEventKind::Up, 0.0, 75.0)),
    );
    assert_eq!(
        session.document().cursor_position(),
        Position::new(top + 2, 0)
    );
}

#[test]
fn test_tiny_window_still_shows_one_row() {
    let (mut session, _clipboard) = session_with_rows(5);
    session.set_text_area(Rect::new(0.0, 0.0, 400.0, 3.0));
    assert_eq!(session.viewport().visible_rows(), 1);
    assert_eq!(session.layout(&MonospaceMeasure::new(10.0)).rows.len(), 1);
}
