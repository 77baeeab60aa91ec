// Chunk: docs/chunks/allocation_failure - Explicit allocation / IO error enum
//!
//! Error type for buffer operations.
//!
//! Nothing here is fatal: every variant is returned only after the buffer has
//! been left exactly as it was before the failing call.

use thiserror::Error;

/// Errors surfaced by [`crate::TextBuffer`] mutations and persistence.
#[derive(Error, Debug)]
pub enum BufferError {
    /// Growing the backing storage could not obtain memory.
    #[error("allocation failure: could not grow buffer to {requested} bytes")]
    AllocationFailure { requested: usize },

    /// Reading or writing the document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The destination accepted fewer bytes than the document holds.
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
}

impl BufferError {
    /// Returns true for the allocation variant.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, BufferError::AllocationFailure { .. })
    }
}
