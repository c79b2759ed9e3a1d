//! Modal dialog system for mint.
//!
//! Provides themed modal dialogs for user interaction.
//! Uses mint-ui for base utilities and mint-theme for styling.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use mint_theme::Theme;

pub use mint_ui::{
    calculate_modal_width, centered_rect_with_size, max_line_width, modal_constants,
    top_center_rect, ModalResult, ModalWidthConfig, TextInput,
};

pub mod base;
pub mod find_replace;
pub mod info;
pub mod input;
pub mod save_changes;

pub use find_replace::{FindReplaceAction, FindReplaceModal, FindReplaceRequest};
pub use info::{InfoKind, InfoModal};
pub use input::InputModal;
pub use save_changes::{SaveChangesModal, SaveChoice};

/// Trait for all modal windows.
pub trait Modal {
    /// Modal window result type.
    type Result;

    /// Render the modal window with theme.
    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Handle keyboard event.
    /// Returns Some(result) when the modal has something to report.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>>;
}
