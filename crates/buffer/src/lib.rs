//! Text buffer with rope data structure for mint.
//!
//! Provides text storage and manipulation using ropey, along with
//! cursor/selection types, undo/redo history, and the viewport.

mod buffer;
mod cursor;
mod history;
mod viewport;

pub use buffer::TextBuffer;
pub use cursor::{Cursor, Range, Selection};
pub use history::{Action, History};
pub use viewport::Viewport;

pub use mint_text_search::{SearchDirection, SearchOptions};

/// Line ending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    LF, // Unix \n
    CRLF, // Windows \r\n
}
