// Chunk: docs/chunks/status_line - Document name and cursor position
//!
//! The one-line status summary: document name and 1-based cursor position.

use std::fmt;
use std::path::Path;

use pen_buffer::Position;

/// Name shown when the document has never been saved.
pub const UNTITLED_LABEL: &str = "(untitled)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub name: String,
    pub position: Position,
    pub dirty: bool,
}

impl StatusLine {
    pub fn new(path: Option<&Path>, position: Position, dirty: bool) -> Self {
        let name = match path {
            Some(path) => base_name(&path.to_string_lossy()).to_string(),
            None => UNTITLED_LABEL.to_string(),
        };
        Self {
            name,
            position,
            dirty,
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  |  Row {} Col {}",
            self.name,
            self.position.row + 1,
            self.position.col + 1
        )
    }
}

/// Returns the last component of `path`, splitting on both `/` and `\`.
///
/// Paths that end in a separator yield an empty name.
pub fn base_name(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
