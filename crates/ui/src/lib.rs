//! UI building blocks for mint.
//!
//! Modal results, the single-line text input used by dialogs,
//! and layout helpers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Modal window result (generic version).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult<T> {
    /// User confirmed the action with a result.
    Confirmed(T),
    /// User cancelled the action.
    Cancelled,
}

/// Default modal size constants.
pub mod modal_constants {
    /// Minimum modal width (default).
    pub const MIN_WIDTH_DEFAULT: u16 = 30;
    /// Minimum modal width (wide).
    pub const MIN_WIDTH_WIDE: u16 = 44;
    /// Maximum width as percentage of screen (default: 75%).
    pub const MAX_WIDTH_PERCENTAGE_DEFAULT: f32 = 0.75;
    /// Maximum width as percentage of screen (wide: 90%).
    pub const MAX_WIDTH_PERCENTAGE_WIDE: f32 = 0.90;
    /// Padding with single border.
    pub const PADDING_WITH_BORDER: u16 = 6;
    /// Padding with double border.
    pub const PADDING_WITH_DOUBLE_BORDER: u16 = 8;
    /// Button spacing in modal dialogs.
    pub const BUTTON_SPACING: u16 = 4;
}

/// Configuration for modal width calculation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalWidthConfig {
    /// Use wide modal constraints (90% max vs 75% default).
    pub wide: bool,
    /// Use double border padding.
    pub double_border: bool,
}

impl ModalWidthConfig {
    /// Create config for wide modals with double border.
    pub fn wide() -> Self {
        Self {
            wide: true,
            double_border: true,
        }
    }
}

/// Calculate modal width based on content and screen constraints.
///
/// Takes the widest content, adds padding, then applies min/max limits.
pub fn calculate_modal_width(
    content_widths: impl Iterator<Item = u16>,
    screen_width: u16,
    config: ModalWidthConfig,
) -> u16 {
    let content_width = content_widths.max().unwrap_or(0);

    let padding = if config.double_border {
        modal_constants::PADDING_WITH_DOUBLE_BORDER
    } else {
        modal_constants::PADDING_WITH_BORDER
    };

    let (max_percentage, min_width) = if config.wide {
        (
            modal_constants::MAX_WIDTH_PERCENTAGE_WIDE,
            modal_constants::MIN_WIDTH_WIDE,
        )
    } else {
        (
            modal_constants::MAX_WIDTH_PERCENTAGE_DEFAULT,
            modal_constants::MIN_WIDTH_DEFAULT,
        )
    };

    let max_width = (screen_width as f32 * max_percentage) as u16;

    (content_width + padding)
        .max(min_width)
        .min(max_width)
        .min(screen_width)
}

/// Display width of the widest line in multiline text.
pub fn max_line_width(text: &str) -> u16 {
    text.lines().map(|line| line.width()).max().unwrap_or(0) as u16
}

/// Text input handler with cursor management
///
/// Tracks the cursor in characters (not bytes) so multi-byte
/// input is edited correctly.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    input: String,
    cursor_pos: usize,
}

impl TextInput {
    /// Create a new text input handler with empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let input = text.into();
        let cursor_pos = input.chars().count();
        Self { input, cursor_pos }
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    /// Cursor position in characters
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Set the input text and move cursor to end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.cursor_pos = self.input.chars().count();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at the cursor position
    pub fn insert(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.input.insert(byte_idx, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        self.cursor_pos -= 1;
        let byte_idx = self.byte_index();
        self.input.remove(byte_idx);
        true
    }

    /// Delete character at cursor (delete key)
    pub fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.input.chars().count() {
            return false;
        }
        let byte_idx = self.byte_index();
        self.input.remove(byte_idx);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor_pos < self.input.chars().count() {
            self.cursor_pos += 1;
            true
        } else {
            false
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}

/// Create a centered rectangle with specified width and height within a container
pub fn centered_rect_with_size(width: u16, height: u16, r: Rect) -> Rect {
    let horizontal_margin = r.width.saturating_sub(width) / 2;
    let vertical_margin = r.height.saturating_sub(height) / 2;

    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_margin),
            Constraint::Length(height),
            Constraint::Length(vertical_margin),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(horizontal_margin),
            Constraint::Length(width),
            Constraint::Length(horizontal_margin),
        ])
        .split(vertical_layout[1])[1]
}

/// Place a rect at the top center of a container, one row below its top edge.
pub fn top_center_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + r.width.saturating_sub(width) / 2;
    let y = r.y + 1;
    Rect::new(
        x,
        y,
        width.min(r.width),
        height.min(r.height.saturating_sub(1)),
    )
}
