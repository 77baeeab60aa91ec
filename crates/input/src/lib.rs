// Chunk: docs/chunks/input_frame - Per-tick input snapshot
//!
//! Input event types for keyboard, mouse, and scroll handling.
//!
//! The platform layer polls its event source once per frame and packs what it
//! saw into an [`InputFrame`]. The editor core never talks to a windowing
//! library directly; it only consumes these values.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a character chord with control held.
    pub fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers::CONTROL,
        }
    }

    /// Creates a KeyEvent for a character chord with control and shift held.
    pub fn ctrl_shift(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            modifiers: Modifiers {
                shift: true,
                control: true,
            },
        }
    }

    /// Creates a KeyEvent for a non-character key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }
}

/// Modifier keys that can be held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key (extends selections)
    pub shift: bool,
    /// Control key (shortcut chords)
    pub control: bool,
}

impl Modifiers {
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
    };

    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
    };

    /// Returns true if no modifier keys are held.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.control
    }
}

/// Keys the editor reacts to.
///
/// Backspace is absent: it is reported on [`InputFrame::backspace_pressed`]
/// and [`InputFrame::backspace_held`] and turned into deletions by the key
/// repeat machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Return / Enter
    Return,
    /// Tab key
    Tab,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Escape key
    Escape,
}

/// Scroll delta from a mouse wheel, in notches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDelta {
    /// Vertical wheel movement (positive = away from the user, scrolls up)
    pub dy: f32,
}

impl ScrollDelta {
    pub fn new(dy: f32) -> Self {
        Self { dy }
    }
}

/// A mouse event.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// The type of mouse event
    pub kind: MouseEventKind,
    /// Position in window coordinates (pixels from top-left)
    pub position: (f32, f32),
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: (x, y),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Kind of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Primary button pressed
    Down,
    /// Primary button released
    Up,
    /// Pointer moved while the primary button is held
    Moved,
}

/// Everything the platform observed during one frame.
///
/// Events are in arrival order. Held state (`modifiers`, `backspace_held`)
/// reflects the keyboard at the moment the frame was sampled;
/// `backspace_pressed` records that Backspace went down at any point since
/// the previous frame, even if it is already up again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    pub mouse: Vec<MouseEvent>,
    pub scroll: Option<ScrollDelta>,
    pub keys: Vec<KeyEvent>,
    pub modifiers: Modifiers,
    pub backspace_pressed: bool,
    pub backspace_held: bool,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, event: KeyEvent) -> Self {
        self.keys.push(event);
        self
    }

    /// Appends one unmodified `Char` event per character of `text`.
    pub fn text(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(KeyEvent::char));
        self
    }

    pub fn mouse(mut self, event: MouseEvent) -> Self {
        self.mouse.push(event);
        self
    }

    pub fn scroll(mut self, dy: f32) -> Self {
        self.scroll = Some(ScrollDelta::new(dy));
        self
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn backspace(mut self, held: bool) -> Self {
        self.backspace_held = held;
        self
    }

    /// Reports a Backspace press since the last frame.
    pub fn backspace_press(mut self) -> Self {
        self.backspace_pressed = true;
        self
    }

    /// Returns true if the frame carries no events and no held keys.
    pub fn is_idle(&self) -> bool {
        self.mouse.is_empty()
            && self.scroll.is_none()
            && self.keys.is_empty()
            && self.modifiers.is_empty()
            && !self.backspace_pressed
            && !self.backspace_held
    }
}
