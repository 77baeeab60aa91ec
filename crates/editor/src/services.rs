// Chunk: docs/chunks/external_services - Measure, clipboard and file seams
//!
//! The collaborators the session talks to but does not own.
//!
//! Each one is a trait so the platform layer can plug in a real font, system
//! clipboard and native dialogs, while tests plug in the in-memory versions
//! below. These are humble objects: no editing logic lives behind them.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Pixel width of a run of bytes in the editor font.
pub trait TextMeasure {
    fn measure(&self, text: &[u8]) -> f32;

    /// Width of one column, used for hit-testing and selection highlights.
    ///
    /// Measured as the width of `M`, with a fallback for fonts that report
    /// a degenerate advance.
    fn char_width(&self) -> f32 {
        let width = self.measure(b"M");
        if width < 1.0 {
            FALLBACK_CHAR_WIDTH
        } else {
            width
        }
    }
}

/// Column width used when the font reports less than one pixel.
pub const FALLBACK_CHAR_WIDTH: f32 = 12.0;

/// Fixed advance per byte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl MonospaceMeasure {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &[u8]) -> f32 {
        text.len() as f32 * self.advance
    }
}

/// System clipboard access.
pub trait Clipboard {
    /// Returns the clipboard text, or `None` if it holds no text.
    fn get_text(&mut self) -> Option<Vec<u8>>;

    fn set_text(&mut self, text: &[u8]);
}

/// A process-local clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<Vec<u8>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<Vec<u8>> {
        self.contents.clone()
    }

    fn set_text(&mut self, text: &[u8]) {
        self.contents = Some(text.to_vec());
    }
}

/// File dialogs and file access.
///
/// Dialog methods return `None` when the user cancels. The reader and writer
/// methods default to the local filesystem.
pub trait FileService {
    fn open_dialog(&mut self) -> Option<PathBuf>;

    /// Asks for a destination, pre-filled with `suggested`.
    fn save_dialog(&mut self, suggested: &Path) -> Option<PathBuf>;

    fn open_read(&mut self, path: &Path) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(File::open(path)?))
    }

    fn create_write(&mut self, path: &Path) -> io::Result<Box<dyn Write>> {
        Ok(Box::new(File::create(path)?))
    }
}

/// Everything one tick may call out to.
pub struct Services<'a> {
    pub measure: &'a dyn TextMeasure,
    pub clipboard: &'a mut dyn Clipboard,
    pub files: &'a mut dyn FileService,
}

impl<'a> Services<'a> {
    pub fn new(
        measure: &'a dyn TextMeasure,
        clipboard: &'a mut dyn Clipboard,
        files: &'a mut dyn FileService,
    ) -> Self {
        Self {
            measure,
            clipboard,
            files,
        }
    }
}
