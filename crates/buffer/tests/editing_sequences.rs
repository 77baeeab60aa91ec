// Chunk: docs/chunks/text_buffer - Byte buffer with embedded cursor

//! Integration tests for realistic editing sequences.
//!
//! These tests drive the buffer and selection together the way an editor
//! tick does, checking the cursor/length/selection invariants throughout.

use pen_buffer::{Position, Selection, TextBuffer};

fn assert_invariants(buf: &TextBuffer, sel: &Selection) {
    assert!(buf.cursor() <= buf.len(), "cursor past end");
    assert!(buf.len() <= buf.capacity(), "length past capacity");
    assert!(sel.anchor() <= buf.len(), "anchor past end");
    assert!(sel.caret() <= buf.len(), "caret past end");
}

/// Types `bytes` the way the editor does: replace any selection, then insert.
fn type_bytes(buf: &mut TextBuffer, sel: &mut Selection, bytes: &[u8]) {
    if let Some(range) = sel.range() {
        buf.delete_range(range.start, range.end);
    }
    buf.insert(bytes).unwrap();
    sel.collapse_to(buf.cursor());
}

#[test]
fn test_type_word_then_delete_entirely() {
    let mut buf = TextBuffer::new();

    for &b in b"hello" {
        buf.insert_byte(b).unwrap();
    }
    assert_eq!(buf.as_bytes(), b"hello");
    assert_eq!(buf.row_col(), Position::new(0, 5));

    for _ in 0..5 {
        buf.backspace();
    }
    assert!(buf.is_empty());
    assert_eq!(buf.cursor(), 0);

    // One more is a no-op
    buf.backspace();
    assert!(buf.is_empty());
}

#[test]
fn test_type_multiple_lines_and_navigate() {
    let mut buf = TextBuffer::new();
    buf.insert(b"first line\nsecond line\nthird line").unwrap();

    assert_eq!(buf.total_rows(), 3);
    assert_eq!(buf.lines().row_range(1), 11..22);

    // "second |line"
    let offset = buf.lines().offset_of_row_col(1, 7);
    buf.set_cursor(offset);
    buf.insert(b"awesome ").unwrap();

    let range = buf.lines().row_range(1);
    assert_eq!(buf.slice(range), b"second awesome line");
}

#[test]
fn test_split_and_rejoin_lines() {
    let mut buf = TextBuffer::from_bytes(b"helloworld");
    buf.set_cursor(5);
    buf.insert_byte(b'\n').unwrap();
    assert_eq!(buf.total_rows(), 2);
    assert_eq!(buf.row_col(), Position::new(1, 0));

    buf.backspace();
    assert_eq!(buf.total_rows(), 1);
    assert_eq!(buf.as_bytes(), b"helloworld");
    assert_eq!(buf.cursor(), 5);
}

#[test]
fn test_newline_adds_exactly_one_row() {
    let mut buf = TextBuffer::new();
    assert_eq!(buf.total_rows(), 1);
    buf.insert_byte(b'\n').unwrap();
    assert_eq!(buf.total_rows(), 2);
}

#[test]
fn test_rapid_insert_delete_cycles() {
    let mut buf = TextBuffer::new();

    buf.insert(b"teh").unwrap();
    buf.backspace();
    buf.backspace();
    buf.backspace();
    buf.insert(b"the ").unwrap();
    buf.insert(b"quikc").unwrap();
    buf.backspace();
    buf.backspace();
    buf.insert(b"ck brown fox").unwrap();

    assert_eq!(buf.as_bytes(), b"the quick brown fox");
}

#[test]
fn test_select_all_then_type_replaces_document() {
    let mut buf = TextBuffer::from_bytes(b"abcdef");
    let mut sel = Selection::default();
    sel.select_all(&mut buf);
    assert_eq!((sel.anchor(), sel.caret()), (0, 6));

    type_bytes(&mut buf, &mut sel, b"x");

    assert_eq!(buf.as_bytes(), b"x");
    assert_eq!(buf.cursor(), 1);
    assert!(!sel.has_selection());
    assert_invariants(&buf, &sel);
}

#[test]
fn test_backward_selection_replace() {
    let mut buf = TextBuffer::from_bytes(b"hello world");
    buf.set_cursor(11);
    let mut sel = Selection::collapsed(11);
    // Select "world" leftward
    sel.extend_to(11, 6);
    buf.set_cursor(6);

    type_bytes(&mut buf, &mut sel, b"there");
    assert_eq!(buf.as_bytes(), b"hello there");
    assert_eq!(buf.cursor(), 11);
    assert_invariants(&buf, &sel);
}

#[test]
fn test_multiline_selection_delete() {
    let mut buf = TextBuffer::from_bytes(b"hello\nworld\ntest");
    let lines = buf.lines();
    let from = lines.offset_of_row_col(0, 3);
    let to = lines.offset_of_row_col(1, 3);
    buf.set_cursor(to);
    let mut sel = Selection::collapsed(to);
    sel.extend_to(to, from);

    let range = sel.clipped_range();
    assert_eq!(buf.slice(range.clone()), b"lo\nwor");
    buf.delete_range(range.start, range.end);
    sel.collapse_to(buf.cursor());

    assert_eq!(buf.as_bytes(), b"helld\ntest");
    assert_eq!(buf.row_col(), Position::new(0, 3));
    assert_invariants(&buf, &sel);
}

#[test]
fn test_invariants_hold_through_mixed_edits() {
    let mut buf = TextBuffer::with_capacity(2);
    let mut sel = Selection::default();

    let script: &[&[u8]] = &[b"ab", b"\n", b"cdef", b"\n\n", b"g"];
    for (i, chunk) in script.iter().enumerate() {
        type_bytes(&mut buf, &mut sel, chunk);
        assert_invariants(&buf, &sel);

        if i % 2 == 0 {
            buf.backspace();
            sel.collapse_to(buf.cursor());
        }
        buf.delete_range(0, i);
        sel.collapse_to(buf.cursor());
        assert_invariants(&buf, &sel);
    }
}
