// Chunk: docs/chunks/file_save_toast - Transient notifications
//!
//! A single transient message ("Saved", "Open failed", ...) with an expiry
//! time. Showing a new message replaces the old one.

use std::time::{Duration, Instant};

/// How long the "Opened" notice stays up.
pub const OPENED_DURATION: Duration = Duration::from_millis(1000);
/// How long the "Saved" / "Saved As" notices stay up.
pub const SAVED_DURATION: Duration = Duration::from_millis(1200);
/// How long failure notices stay up.
pub const FAILURE_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: String,
    until: Option<Instant>,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` until `now + duration`.
    pub fn show(&mut self, message: impl Into<String>, duration: Duration, now: Instant) {
        self.message = message.into();
        self.until = Some(now + duration);
    }

    /// Returns the message if it has not expired at `now`.
    pub fn visible(&self, now: Instant) -> Option<&str> {
        match self.until {
            Some(until) if now < until && !self.message.is_empty() => Some(&self.message),
            _ => None,
        }
    }

    /// Returns the most recent message, expired or not.
    pub fn last_message(&self) -> Option<&str> {
        self.until.map(|_| self.message.as_str())
    }
}
