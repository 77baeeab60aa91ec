// Chunk: docs/chunks/backspace_repeat - Held-key repeat timing
//!
//! Repeat timing for a held key.
//!
//! The platform tells us whether the key is down this frame, and whether it
//! went down since the last frame. This machine turns those signals into
//! discrete "fire" events: one on the press edge, then one after the initial
//! delay, then one every repeat interval until release. A tap that starts and
//! ends between two frames still fires once.
//!
//! This is a pure data structure with no I/O. The caller passes the current
//! time on every update, which makes it easy to test.

use std::time::{Duration, Instant};

use crate::config::KeyRepeatConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatState {
    /// The key is up.
    Idle,
    /// The key is held; the next fire is due at `next_fire`.
    Repeating { next_fire: Instant },
}

#[derive(Debug, Clone)]
pub struct KeyRepeat {
    state: RepeatState,
    initial_delay: Duration,
    repeat_rate: Duration,
}

impl KeyRepeat {
    pub fn new(initial_delay: Duration, repeat_rate: Duration) -> Self {
        Self {
            state: RepeatState::Idle,
            initial_delay,
            repeat_rate,
        }
    }

    pub fn from_config(config: &KeyRepeatConfig) -> Self {
        Self::new(config.initial_delay(), config.repeat_rate())
    }

    pub fn state(&self) -> RepeatState {
        self.state
    }

    /// Advances the machine for one frame.
    ///
    /// # Arguments
    ///
    /// * `held` - Whether the key is down this frame
    /// * `now` - The current timestamp (passed in for testability)
    ///
    /// # Returns
    ///
    /// `true` if the action should run once this frame.
    pub fn update(&mut self, held: bool, now: Instant) -> bool {
        match (self.state, held) {
            (_, false) => {
                self.state = RepeatState::Idle;
                false
            }
            (RepeatState::Idle, true) => {
                self.state = RepeatState::Repeating {
                    next_fire: now + self.initial_delay,
                };
                true
            }
            (RepeatState::Repeating { next_fire }, true) if now >= next_fire => {
                self.state = RepeatState::Repeating {
                    next_fire: now + self.repeat_rate,
                };
                true
            }
            (RepeatState::Repeating { .. }, true) => false,
        }
    }

    /// Advances the machine for one frame, honoring a reported press edge.
    ///
    /// # Arguments
    ///
    /// * `pressed` - Whether the key went down since the last frame
    /// * `held` - Whether the key is down this frame
    /// * `now` - The current timestamp
    ///
    /// A press always fires once and restarts the initial delay, even if the
    /// key was already released when the frame was sampled.
    pub fn update_with_press(&mut self, pressed: bool, held: bool, now: Instant) -> bool {
        if !pressed {
            return self.update(held, now);
        }
        self.state = if held {
            RepeatState::Repeating {
                next_fire: now + self.initial_delay,
            }
        } else {
            RepeatState::Idle
        };
        true
    }

    /// Forces the machine back to idle.
    pub fn reset(&mut self) {
        self.state = RepeatState::Idle;
    }
}

impl Default for KeyRepeat {
    fn default() -> Self {
        Self::from_config(&KeyRepeatConfig::default())
    }
}
