//! Unsaved changes prompt (Save / Discard / Cancel).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use mint_theme::Theme;

use crate::{
    base, calculate_modal_width, centered_rect_with_size, max_line_width, Modal, ModalResult,
    ModalWidthConfig,
};

const TITLE: &str = "Mint";
const BUTTONS: [&str; 3] = ["Save", "Discard", "Cancel"];

/// User's answer; cancelling is reported as `ModalResult::Cancelled`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
}

/// Prompt shown before a modified document would be thrown away
#[derive(Debug)]
pub struct SaveChangesModal {
    message: String,
    /// 0 = Save, 1 = Discard, 2 = Cancel
    selected: usize,
}

impl SaveChangesModal {
    pub fn new() -> Self {
        Self::with_message("The document has been modified.\nDo you want to save your changes?")
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            selected: 0,
        }
    }

    fn choose(&self) -> ModalResult<SaveChoice> {
        match self.selected {
            0 => ModalResult::Confirmed(SaveChoice::Save),
            1 => ModalResult::Confirmed(SaveChoice::Discard),
            _ => ModalResult::Cancelled,
        }
    }
}

impl Default for SaveChangesModal {
    fn default() -> Self {
        Self::new()
    }
}

impl Modal for SaveChangesModal {
    type Result = SaveChoice;

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let message_lines = self.message.lines().count().max(1) as u16;
        // border + message + blank + buttons + border
        let height = message_lines + 4;
        let width = calculate_modal_width(
            [max_line_width(&self.message), base::buttons_width(&BUTTONS)].into_iter(),
            area.width,
            ModalWidthConfig::default(),
        );
        let modal_area = centered_rect_with_size(width, height, area);

        let inner = base::render_modal_frame(modal_area, buf, theme, TITLE);

        let message_area = Rect {
            height: message_lines,
            ..inner
        };
        Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.fg))
            .render(message_area, buf);

        let buttons_area = Rect {
            y: inner.y + message_lines + 1,
            height: 1,
            ..inner
        };
        if buttons_area.y < inner.bottom() {
            base::render_buttons(buf, buttons_area, &BUTTONS, Some(self.selected), theme);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        let result = match key.code {
            KeyCode::Left | KeyCode::BackTab => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Right | KeyCode::Tab => {
                self.selected = (self.selected + 1).min(BUTTONS.len() - 1);
                None
            }
            KeyCode::Enter => Some(self.choose()),
            KeyCode::Esc => Some(ModalResult::Cancelled),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(ModalResult::Confirmed(SaveChoice::Save)),
            KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(ModalResult::Confirmed(SaveChoice::Discard))
            }
            KeyCode::Char('c') | KeyCode::Char('C') => Some(ModalResult::Cancelled),
            _ => None,
        };
        Ok(result)
    }
}
