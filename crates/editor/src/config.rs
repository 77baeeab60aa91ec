// Chunk: docs/chunks/editor_config - JSON editor configuration
//!
//! Editor configuration.
//!
//! The configuration file is optional. When present it is a JSON object whose
//! fields override the defaults individually; any field left out keeps its
//! default value.
//!
//! ## File Location
//!
//! `<config dir>/pen/config.json`, where the config dir comes from
//! [`dirs::config_dir`] (`~/.config` on Linux, `~/Library/Application Support`
//! on macOS).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Application name used for the config directory.
const APP_NAME: &str = "pen";

/// Config file name.
const CONFIG_FILENAME: &str = "config.json";

/// Timing of the held-backspace repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyRepeatConfig {
    /// Delay between the first deletion and the first repeat.
    pub initial_delay_ms: u64,
    /// Delay between subsequent repeats.
    pub repeat_rate_ms: u64,
}

impl Default for KeyRepeatConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 320,
            repeat_rate_ms: 45,
        }
    }
}

impl KeyRepeatConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn repeat_rate(&self) -> Duration {
        Duration::from_millis(self.repeat_rate_ms)
    }
}

/// User-tunable editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor font size in pixels.
    pub font_size: f32,
    /// Extra vertical space between rows, in pixels.
    pub line_gap: f32,
    /// Number of spaces inserted for Tab.
    pub tab_width: usize,
    /// Initial buffer capacity in bytes.
    pub initial_capacity: usize,
    /// Largest document, in bytes, the editor will hold. `None` means no
    /// limit beyond available memory.
    pub max_document_bytes: Option<usize>,
    pub key_repeat: KeyRepeatConfig,
    /// Suggested file name for Save As when the document has no path.
    pub untitled_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: 22.0,
            line_gap: 8.0,
            tab_width: 4,
            initial_capacity: pen_buffer::INITIAL_CAPACITY,
            max_document_bytes: None,
            key_repeat: KeyRepeatConfig::default(),
            untitled_name: "untitled.txt".to_string(),
        }
    }
}

impl EditorConfig {
    /// Height of one text row in pixels.
    pub fn line_height(&self) -> f32 {
        self.font_size + self.line_gap
    }

    /// Loads the config from the default location.
    ///
    /// A missing file, or a platform without a config directory, yields the
    /// defaults.
    pub fn load() -> Result<Self, EditorError> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory; using default config");
                Ok(Self::default())
            }
        }
    }

    /// Loads the config from `path`.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is an error.
    pub fn load_from(path: &Path) -> Result<Self, EditorError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found; using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(EditorError::io(path, err)),
        };

        let config: EditorConfig =
            serde_json::from_str(&contents).map_err(|source| EditorError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config.sanitized())
    }

    /// Writes the config to `path` as pretty JSON.
    ///
    /// Writes to a temporary sibling first and renames it into place.
    pub fn save_to(&self, path: &Path) -> Result<(), EditorError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| EditorError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| EditorError::io(parent, err))?;
        }
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json).map_err(|err| EditorError::io(&temp_path, err))?;
        fs::rename(&temp_path, path).map_err(|err| EditorError::io(path, err))?;
        Ok(())
    }

    /// Replaces values that would break layout or editing with defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            tracing::warn!(font_size = self.font_size, "invalid font size in config");
            self.font_size = defaults.font_size;
        }
        if !(self.line_gap.is_finite() && self.line_gap >= 0.0) {
            tracing::warn!(line_gap = self.line_gap, "invalid line gap in config");
            self.line_gap = defaults.line_gap;
        }
        if self.initial_capacity == 0 {
            self.initial_capacity = defaults.initial_capacity;
        }
        if self.untitled_name.is_empty() {
            self.untitled_name = defaults.untitled_name;
        }
        self
    }
}

/// Returns the path to the config file, or `None` if the platform has no
/// config directory.
pub fn config_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_NAME).join(CONFIG_FILENAME))
}
