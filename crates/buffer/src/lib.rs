// Chunk: docs/chunks/text_buffer - Byte buffer with embedded cursor
// Chunk: docs/chunks/text_selection_model - Anchor/caret selection over byte offsets

//! pen-buffer: the storage layer of the pen editing core.
//!
//! This crate provides a byte buffer with an embedded cursor, a selection model
//! layered on buffer offsets, and stateless row/column addressing.
//!
//! # Overview
//!
//! - [`TextBuffer`] - contiguous growable bytes plus a cursor; insert, delete,
//!   backspace, load and save
//! - [`Selection`] - anchor/caret pair with an order-independent range
//! - [`LineIndex`] - row/column queries recomputed from the bytes on demand
//!
//! # Example
//!
//! ```
//! use pen_buffer::{Position, Selection, TextBuffer};
//!
//! let mut buffer = TextBuffer::new();
//! buffer.insert(b"hello\nworld").unwrap();
//! assert_eq!(buffer.total_rows(), 2);
//! assert_eq!(buffer.row_col(), Position::new(1, 5));
//!
//! // Select everything, then replace it
//! let mut selection = Selection::default();
//! selection.select_all(&mut buffer);
//! let range = selection.clipped_range();
//! buffer.delete_range(range.start, range.end);
//! buffer.insert_byte(b'x').unwrap();
//! assert_eq!(buffer.as_bytes(), b"x");
//! assert_eq!(buffer.cursor(), 1);
//! ```
//!
//! # Units
//!
//! Every byte is one unit of motion and one column. Multi-byte text is stored
//! faithfully but cursor motion may land inside a codepoint.

mod error;
mod line_index;
mod selection;
mod text_buffer;
mod types;

pub use error::BufferError;
pub use line_index::LineIndex;
pub use selection::Selection;
pub use text_buffer::{TextBuffer, INITIAL_CAPACITY};
pub use types::Position;
