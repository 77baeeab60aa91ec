// Chunk: docs/chunks/editor_session - Per-frame editor session
//!
//! The editing session: one document plus everything needed to drive it from
//! per-frame input.
//!
//! The platform layer calls [`EditorSession::tick`] once per frame with the
//! input it collected. A tick processes, in order:
//! 1. pointer press / drag / release
//! 2. mouse wheel
//! 3. backspace: the press edge, then held repeat
//! 4. key events in arrival order (shortcuts, Enter, Tab, typing, motion)
//! 5. cursor follow: if the cursor or content changed, scroll it into view
//!
//! Commands run from a menu through [`EditorSession::execute`] scroll the
//! cursor into view as soon as they return.
//!
//! Nothing here is fatal. Failed file operations and failed allocations are
//! logged, shown as a toast and returned in the [`TickOutcome`]; the document
//! is left intact.

use std::path::{Path, PathBuf};
use std::time::Instant;

use pen_buffer::BufferError;
use pen_input::{InputFrame, Key, KeyEvent, MouseEventKind};

use crate::config::EditorConfig;
use crate::document::Document;
use crate::error::EditorError;
use crate::hit_test::{HitTester, Rect};
use crate::key_repeat::KeyRepeat;
use crate::layout::{layout_frame, FrameLayout};
use crate::services::{FileService, Services, TextMeasure};
use crate::status::StatusLine;
use crate::toast::{Toast, FAILURE_DURATION, OPENED_DURATION, SAVED_DURATION};
use crate::viewport::Viewport;

// =============================================================================
// Commands
// =============================================================================

/// Menu and shortcut commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    Save,
    SaveAs,
    Quit,
    Cut,
    Copy,
    Paste,
    SelectAll,
}

impl Command {
    /// Entries of the File menu, top to bottom.
    pub const FILE_MENU: [Command; 4] = [
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Quit,
    ];

    /// Entries of the Edit menu, top to bottom.
    pub const EDIT_MENU: [Command; 4] = [
        Command::Cut,
        Command::Copy,
        Command::Paste,
        Command::SelectAll,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Command::Open => "Open…",
            Command::Save => "Save",
            Command::SaveAs => "Save As…",
            Command::Quit => "Quit",
            Command::Cut => "Cut",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::SelectAll => "Select All",
        }
    }

    pub fn shortcut(self) -> &'static str {
        match self {
            Command::Open => "Ctrl+O",
            Command::Save => "Ctrl+S",
            Command::SaveAs => "Ctrl+Shift+S",
            Command::Quit => "Ctrl+Q",
            Command::Cut => "Ctrl+X",
            Command::Copy => "Ctrl+C",
            Command::Paste => "Ctrl+V",
            Command::SelectAll => "Ctrl+A",
        }
    }
}

/// What a single key event asks for.
#[derive(Debug, Clone, PartialEq)]
enum KeyAction {
    Command(Command),
    /// Insert one printable ASCII byte
    Type(u8),
    InsertNewline,
    InsertTab,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveToLineStart,
    MoveToLineEnd,
}

/// Resolves a key event to an action.
///
/// This is a pure stateless function: (modifiers, key) → Option<KeyAction>.
/// Only printable ASCII (space through `~`) is typed; other characters are
/// ignored.
fn resolve_key(event: &KeyEvent) -> Option<KeyAction> {
    let mods = &event.modifiers;

    match &event.key {
        Key::Escape => Some(KeyAction::Command(Command::Quit)),

        // Ctrl chords
        Key::Char(ch) if mods.control => {
            let command = match ch.to_ascii_lowercase() {
                'o' => Command::Open,
                's' if mods.shift => Command::SaveAs,
                's' => Command::Save,
                'q' => Command::Quit,
                'a' => Command::SelectAll,
                'c' => Command::Copy,
                'x' => Command::Cut,
                'v' => Command::Paste,
                _ => return None,
            };
            Some(KeyAction::Command(command))
        }

        // Printable characters
        Key::Char(ch) if (' '..='~').contains(ch) => Some(KeyAction::Type(*ch as u8)),
        Key::Char(_) => None,

        Key::Return if !mods.control => Some(KeyAction::InsertNewline),
        Key::Tab if !mods.control => Some(KeyAction::InsertTab),

        Key::Left => Some(KeyAction::MoveLeft),
        Key::Right => Some(KeyAction::MoveRight),
        Key::Up => Some(KeyAction::MoveUp),
        Key::Down => Some(KeyAction::MoveDown),
        Key::Home => Some(KeyAction::MoveToLineStart),
        Key::End => Some(KeyAction::MoveToLineEnd),

        // Unhandled
        _ => None,
    }
}

// =============================================================================
// Session
// =============================================================================

/// Result of one tick.
#[derive(Debug, Default)]
pub struct TickOutcome {
    /// The document content changed this tick.
    pub content_changed: bool,
    /// Quit was requested (Escape, Ctrl+Q or the Quit command).
    pub quit_requested: bool,
    /// Failures reported this tick, in the order they happened.
    pub errors: Vec<EditorError>,
}

#[derive(Debug)]
pub struct EditorSession {
    config: EditorConfig,
    document: Document,
    viewport: Viewport,
    /// Text area in window pixels, as last laid out by the platform.
    text_area: Rect,
    backspace: KeyRepeat,
    dragging: bool,
    path: Option<PathBuf>,
    dirty: bool,
    toast: Toast,
    quit_requested: bool,
    /// A command moved the cursor or replaced the document; follow it.
    follow_pending: bool,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        let mut document = Document::with_capacity(config.initial_capacity);
        if let Some(limit) = config.max_document_bytes {
            document.set_capacity_limit(limit);
        }
        Self {
            document,
            viewport: Viewport::new(config.line_height()),
            text_area: Rect::default(),
            backspace: KeyRepeat::from_config(&config.key_repeat),
            dragging: false,
            path: None,
            dirty: false,
            toast: Toast::new(),
            quit_requested: false,
            follow_pending: false,
            config,
        }
    }

    // ==================== Accessors ====================

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn text_area(&self) -> Rect {
        self.text_area
    }

    /// The file the document was last opened from or saved to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// True if the content changed since the last successful open or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Returns the toast message still showing at `now`.
    pub fn toast(&self, now: Instant) -> Option<&str> {
        self.toast.visible(now)
    }

    pub fn status_line(&self) -> StatusLine {
        StatusLine::new(self.path(), self.document.cursor_position(), self.dirty)
    }

    /// Sets where the text is drawn. Call whenever the window is resized.
    pub fn set_text_area(&mut self, text_area: Rect) {
        self.text_area = text_area;
        let total_rows = self.document.buffer().total_rows();
        self.viewport.update_size(text_area.height, total_rows);
    }

    /// Lays out the visible rows for drawing.
    pub fn layout<M: TextMeasure + ?Sized>(&self, measure: &M) -> FrameLayout {
        layout_frame(&self.document, &self.viewport, measure, self.text_area.width)
    }

    fn hit_tester(&self, measure: &dyn TextMeasure) -> HitTester {
        HitTester::new(self.text_area, self.config.line_height(), measure.char_width())
    }

    // ==================== Tick ====================

    /// Processes one frame of input.
    pub fn tick(
        &mut self,
        frame: &InputFrame,
        services: &mut Services<'_>,
        now: Instant,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        let cursor_before = self.document.cursor();

        let total_rows = self.document.buffer().total_rows();
        self.viewport.update_size(self.text_area.height, total_rows);

        let held_shift = frame.modifiers.shift;
        self.handle_pointer(frame, services.measure);

        if let Some(scroll) = frame.scroll {
            self.viewport.scroll_by_wheel(scroll.dy, total_rows);
        }

        let fire = self.backspace.update_with_press(
            frame.backspace_pressed,
            frame.backspace_held,
            now,
        );
        if fire && self.document.backspace() {
            self.mark_changed(&mut outcome);
        }

        for event in &frame.keys {
            if let Some(action) = resolve_key(event) {
                let extend = event.modifiers.shift || held_shift;
                self.apply_key_action(action, extend, services, now, &mut outcome);
            }
        }

        if outcome.content_changed || self.document.cursor() != cursor_before {
            self.follow_pending = true;
        }
        if self.follow_pending {
            self.follow_cursor();
        } else {
            let total_rows = self.document.buffer().total_rows();
            self.viewport.scroll_to(self.viewport.scroll_row(), total_rows);
        }

        outcome.quit_requested = self.quit_requested;
        outcome
    }

    fn handle_pointer(&mut self, frame: &InputFrame, measure: &dyn TextMeasure) {
        let hit = self.hit_tester(measure);
        for event in &frame.mouse {
            let (x, y) = event.position;
            match event.kind {
                MouseEventKind::Down if hit.contains(x, y) => {
                    self.dragging = true;
                    let offset = self.offset_at(&hit, x, y);
                    let extend = event.modifiers.shift || frame.modifiers.shift;
                    self.document.click(offset, extend);
                }
                MouseEventKind::Moved if self.dragging && hit.contains(x, y) => {
                    let offset = self.offset_at(&hit, x, y);
                    self.document.drag_to(offset);
                }
                MouseEventKind::Up => self.dragging = false,
                _ => {}
            }
        }
    }

    /// Scrolls the cursor row into view.
    fn follow_cursor(&mut self) {
        let total_rows = self.document.buffer().total_rows();
        self.viewport.update_size(self.text_area.height, total_rows);
        let row = self.document.cursor_position().row;
        self.viewport.ensure_row_visible(row, total_rows);
        self.follow_pending = false;
    }

    fn offset_at(&self, hit: &HitTester, x: f32, y: f32) -> usize {
        let lines = self.document.buffer().lines();
        hit.offset_at(&lines, x, y, self.viewport.scroll_row())
    }

    fn apply_key_action(
        &mut self,
        action: KeyAction,
        extend: bool,
        services: &mut Services<'_>,
        now: Instant,
        outcome: &mut TickOutcome,
    ) {
        let edit = match action {
            KeyAction::Command(command) => self.run_command(command, services, now),
            KeyAction::Type(byte) => self.edit(|doc| doc.type_byte(byte), now),
            KeyAction::InsertNewline => self.edit(Document::insert_newline, now),
            KeyAction::InsertTab => {
                let width = self.config.tab_width;
                self.edit(|doc| doc.insert_tab(width), now)
            }
            motion => {
                self.apply_motion(motion, extend);
                return;
            }
        };

        match edit {
            Ok(true) => self.mark_changed(outcome),
            Ok(false) => {}
            Err(err) => outcome.errors.push(err),
        }
    }

    fn apply_motion(&mut self, motion: KeyAction, extend: bool) {
        match motion {
            KeyAction::MoveLeft => self.document.move_left(extend),
            KeyAction::MoveRight => self.document.move_right(extend),
            KeyAction::MoveUp => self.document.move_up(extend),
            KeyAction::MoveDown => self.document.move_down(extend),
            KeyAction::MoveToLineStart => self.document.move_home(extend),
            KeyAction::MoveToLineEnd => self.document.move_end(extend),
            _ => {}
        }
    }

    /// Runs a document edit, reporting allocation failure.
    fn edit(
        &mut self,
        op: impl FnOnce(&mut Document) -> Result<bool, BufferError>,
        now: Instant,
    ) -> Result<bool, EditorError> {
        op(&mut self.document).map_err(|err| self.report_edit_failure(err, now))
    }

    fn mark_changed(&mut self, outcome: &mut TickOutcome) {
        self.dirty = true;
        outcome.content_changed = true;
    }

    fn report_edit_failure(&mut self, err: BufferError, now: Instant) -> EditorError {
        tracing::warn!(error = %err, "edit failed");
        self.toast.show("Out of memory", FAILURE_DURATION, now);
        EditorError::Buffer(err)
    }

    // ==================== Commands ====================

    /// Runs a menu or shortcut command.
    ///
    /// Cancelled dialogs and clipboard commands with nothing to act on are
    /// no-ops. Failures have already been logged and toasted when this
    /// returns `Err`. A command that moves the cursor scrolls it into view.
    pub fn execute(
        &mut self,
        command: Command,
        services: &mut Services<'_>,
        now: Instant,
    ) -> Result<(), EditorError> {
        let edited = self.run_command(command, services, now);
        if self.follow_pending {
            self.follow_cursor();
        }
        if edited? {
            self.dirty = true;
        }
        Ok(())
    }

    /// Runs `command`; returns `Ok(true)` if it edited the content.
    fn run_command(
        &mut self,
        command: Command,
        services: &mut Services<'_>,
        now: Instant,
    ) -> Result<bool, EditorError> {
        let cursor_before = self.document.cursor();
        let result = self.dispatch_command(command, services, now);
        if matches!(result, Ok(true)) || self.document.cursor() != cursor_before {
            self.follow_pending = true;
        }
        result
    }

    fn dispatch_command(
        &mut self,
        command: Command,
        services: &mut Services<'_>,
        now: Instant,
    ) -> Result<bool, EditorError> {
        match command {
            Command::Open => self.open(services.files, now).map(|()| false),
            Command::Save => self.save(services.files, now).map(|()| false),
            Command::SaveAs => self.save_as(services.files, now).map(|()| false),
            Command::Quit => {
                self.quit_requested = true;
                Ok(false)
            }
            Command::Copy => {
                if let Some(bytes) = self.document.copy_selection() {
                    services.clipboard.set_text(&bytes);
                }
                Ok(false)
            }
            Command::Cut => match self.document.cut_selection() {
                Some(bytes) => {
                    services.clipboard.set_text(&bytes);
                    Ok(true)
                }
                None => Ok(false),
            },
            Command::Paste => match services.clipboard.get_text() {
                Some(bytes) => self.edit(|doc| doc.paste(&bytes), now),
                None => Ok(false),
            },
            Command::SelectAll => {
                self.document.select_all();
                Ok(false)
            }
        }
    }

    fn open(&mut self, files: &mut dyn FileService, now: Instant) -> Result<(), EditorError> {
        let Some(path) = files.open_dialog() else {
            return Ok(());
        };
        self.open_path(&path, files, now)
    }

    /// Loads `path` into the document, replacing it.
    ///
    /// On failure the current document, path and dirty flag are unchanged.
    pub fn open_path(
        &mut self,
        path: &Path,
        files: &mut dyn FileService,
        now: Instant,
    ) -> Result<(), EditorError> {
        let loaded = files
            .open_read(path)
            .map_err(BufferError::from)
            .and_then(|reader| self.document.load_from(reader));

        if let Err(err) = loaded {
            return Err(self.report_io_failure("Open failed", path, err, now));
        }

        tracing::debug!(path = %path.display(), bytes = self.document.as_bytes().len(), "opened file");
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        self.viewport.reset();
        self.follow_cursor();
        self.toast.show("Opened", OPENED_DURATION, now);
        Ok(())
    }

    fn save(&mut self, files: &mut dyn FileService, now: Instant) -> Result<(), EditorError> {
        match self.path.clone() {
            Some(path) => {
                self.write_to(&path, files, now)?;
                self.toast.show("Saved", SAVED_DURATION, now);
                Ok(())
            }
            None => self.save_as(files, now),
        }
    }

    fn save_as(&mut self, files: &mut dyn FileService, now: Instant) -> Result<(), EditorError> {
        let suggested = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.untitled_name));
        let Some(path) = files.save_dialog(&suggested) else {
            return Ok(());
        };

        self.write_to(&path, files, now)?;
        self.path = Some(path);
        self.toast.show("Saved As", SAVED_DURATION, now);
        Ok(())
    }

    fn write_to(
        &mut self,
        path: &Path,
        files: &mut dyn FileService,
        now: Instant,
    ) -> Result<(), EditorError> {
        let written = files
            .create_write(path)
            .map_err(BufferError::from)
            .and_then(|writer| self.document.buffer().save_to(writer));

        if let Err(err) = written {
            return Err(self.report_io_failure("Save failed", path, err, now));
        }

        tracing::debug!(path = %path.display(), bytes = self.document.as_bytes().len(), "saved file");
        self.dirty = false;
        Ok(())
    }

    fn report_io_failure(
        &mut self,
        message: &str,
        path: &Path,
        err: BufferError,
        now: Instant,
    ) -> EditorError {
        tracing::warn!(path = %path.display(), error = %err, "{}", message);
        self.toast.show(message, FAILURE_DURATION, now);
        match err {
            BufferError::Io(source) => EditorError::io(path, source),
            other => EditorError::Buffer(other),
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
