// Chunk: docs/chunks/editor_session - Session-level error enum
//!
//! Errors surfaced by the editing session.
//!
//! None of these are fatal. The session reports them (toast plus log) and
//! keeps running with the document intact.

use std::path::PathBuf;

use pen_buffer::BufferError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl EditorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EditorError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error came from buffer growth.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, EditorError::Buffer(err) if err.is_allocation_failure())
    }
}
