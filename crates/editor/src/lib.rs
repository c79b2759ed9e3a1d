//! Text editor widget for mint.
//!
//! Wraps a [`mint_buffer::TextBuffer`] with a caret, selection and viewport,
//! maps keys to editing commands and hosts the find/replace controller.

pub mod config;
mod editor;
pub mod find_replace;
pub mod keyboard;
pub mod rendering;

pub use config::EditorConfig;
pub use editor::Editor;
pub use find_replace::{FindReplace, Notice, Notifier, SearchTarget};
pub use keyboard::EditorCommand;

pub use mint_buffer::{Cursor, Range};
pub use mint_text_search::{SearchDirection, SearchOptions};
