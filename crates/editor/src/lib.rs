// Chunk: docs/chunks/editor_session - Headless editing session
//!
//! pen-editor: everything between per-frame input and pixels, minus the
//! pixels.
//!
//! The platform layer owns the window, font, clipboard and dialogs. Each
//! frame it builds a [`pen_input::InputFrame`], calls
//! [`EditorSession::tick`], then asks [`EditorSession::layout`] for the rows,
//! highlights and caret to draw.
//!
//! ```
//! use std::time::Instant;
//!
//! use pen_editor::{EditorSession, FileService, MemoryClipboard, MonospaceMeasure, Rect, Services};
//! use pen_input::InputFrame;
//!
//! struct NoDialogs;
//!
//! impl FileService for NoDialogs {
//!     fn open_dialog(&mut self) -> Option<std::path::PathBuf> {
//!         None
//!     }
//!     fn save_dialog(&mut self, _: &std::path::Path) -> Option<std::path::PathBuf> {
//!         None
//!     }
//! }
//!
//! let measure = MonospaceMeasure::new(10.0);
//! let mut clipboard = MemoryClipboard::new();
//! let mut files = NoDialogs;
//! let mut services = Services::new(&measure, &mut clipboard, &mut files);
//!
//! let mut session = EditorSession::default();
//! session.set_text_area(Rect::new(0.0, 0.0, 400.0, 300.0));
//! session.tick(&InputFrame::new().text("hi"), &mut services, Instant::now());
//!
//! assert_eq!(session.document().as_bytes(), b"hi");
//! assert!(session.is_dirty());
//! assert_eq!(session.layout(&measure).rows.len(), 1);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod key_repeat;
pub mod layout;
pub mod services;
pub mod session;
pub mod status;
pub mod toast;
pub mod viewport;
pub mod wrap_layout;

pub use config::{config_file_path, EditorConfig, KeyRepeatConfig};
pub use document::Document;
pub use error::EditorError;
pub use hit_test::{HitTester, Rect};
pub use key_repeat::{KeyRepeat, RepeatState};
pub use layout::{layout_frame, CaretPlacement, FrameLayout, VisualRow};
pub use services::{
    Clipboard, FileService, MemoryClipboard, MonospaceMeasure, Services, TextMeasure,
};
pub use session::{Command, EditorSession, TickOutcome};
pub use status::{base_name, StatusLine};
pub use toast::Toast;
pub use viewport::Viewport;
pub use wrap_layout::{WrapLayout, MEASURE_LIMIT};
