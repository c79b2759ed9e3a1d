//! Single-line text input dialog (file paths for Open and Save As).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use mint_theme::Theme;

use crate::{
    base, calculate_modal_width, centered_rect_with_size, Modal, ModalResult, ModalWidthConfig,
    TextInput,
};

const BUTTONS: [&str; 2] = ["OK", "Cancel"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusArea {
    Input,
    Buttons,
}

/// Text input modal window
#[derive(Debug)]
pub struct InputModal {
    title: String,
    prompt: String,
    input: TextInput,
    focus: FocusArea,
    /// 0 = OK, 1 = Cancel
    selected_button: usize,
    error: Option<String>,
}

impl InputModal {
    pub fn new(title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::with_default(title, prompt, "")
    }

    /// Create with the field prefilled
    pub fn with_default(
        title: impl Into<String>,
        prompt: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            input: TextInput::with_text(default),
            focus: FocusArea::Input,
            selected_button: 0,
            error: None,
        }
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    fn submit(&mut self) -> Option<ModalResult<String>> {
        let value = self.input.text().trim();
        if value.is_empty() {
            self.error = Some("Please enter a file name".to_string());
            return None;
        }
        Some(ModalResult::Confirmed(value.to_string()))
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<ModalResult<String>> {
        match key.code {
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus = FocusArea::Buttons,
            KeyCode::Backspace => {
                self.input.backspace();
            }
            KeyCode::Delete => {
                self.input.delete();
            }
            KeyCode::Left => {
                self.input.move_left();
            }
            KeyCode::Right => {
                self.input.move_right();
            }
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char(ch)
                if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.input.insert(ch);
                self.error = None;
            }
            _ => {}
        }
        None
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) -> Option<ModalResult<String>> {
        match key.code {
            KeyCode::Left => self.selected_button = 0,
            KeyCode::Right => self.selected_button = 1,
            KeyCode::Tab | KeyCode::Up | KeyCode::BackTab => self.focus = FocusArea::Input,
            KeyCode::Enter if self.selected_button == 0 => return self.submit(),
            KeyCode::Enter => return Some(ModalResult::Cancelled),
            _ => {}
        }
        None
    }
}

impl Modal for InputModal {
    type Result = String;

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let width = calculate_modal_width(
            [
                self.title.width() as u16 + 2,
                self.prompt.width() as u16,
                self.input.text().width() as u16 + 10,
                base::buttons_width(&BUTTONS),
            ]
            .into_iter(),
            area.width,
            ModalWidthConfig::wide(),
        );
        // border + prompt + input + error + buttons + border
        let height = 6u16.min(area.height);
        let modal_area = centered_rect_with_size(width, height, area);

        let inner = base::render_modal_frame(modal_area, buf, theme, &self.title);
        if inner.height < 4 {
            return;
        }
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        buf.set_stringn(
            inner.x,
            inner.y,
            &self.prompt,
            inner.width as usize,
            Style::default().fg(theme.fg),
        );
        base::render_input_field(
            buf,
            inner.x,
            inner.y + 1,
            inner.width,
            self.input.text(),
            self.input.cursor_pos(),
            self.focus == FocusArea::Input,
            theme,
        );
        if let Some(error) = &self.error {
            buf.set_stringn(
                inner.x,
                inner.y + 2,
                error,
                inner.width as usize,
                Style::default().fg(theme.error),
            );
        }

        let selected = (self.focus == FocusArea::Buttons).then_some(self.selected_button);
        let buttons_area = Rect {
            y: inner.y + 3,
            height: 1,
            ..inner
        };
        base::render_buttons(buf, buttons_area, &BUTTONS, selected, theme);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        // Escape always cancels
        if key.code == KeyCode::Esc {
            return Ok(Some(ModalResult::Cancelled));
        }

        Ok(match self.focus {
            FocusArea::Input => self.handle_input_key(key),
            FocusArea::Buttons => self.handle_buttons_key(key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_returns_trimmed_text() {
        let mut modal = InputModal::with_default("Open", "File path:", "  notes.txt ");
        assert_eq!(
            modal.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Confirmed("notes.txt".to_string()))
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let mut modal = InputModal::new("Save As", "File path:");
        assert_eq!(modal.handle_key(key(KeyCode::Enter)).unwrap(), None);
        assert!(modal.error.is_some());

        modal.handle_key(key(KeyCode::Char('a'))).unwrap();
        assert!(modal.error.is_none());
        assert_eq!(modal.text(), "a");
    }

    #[test]
    fn test_cancel_button() {
        let mut modal = InputModal::with_default("Open", "File path:", "a.txt");
        modal.handle_key(key(KeyCode::Tab)).unwrap();
        modal.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(
            modal.handle_key(key(KeyCode::Enter)).unwrap(),
            Some(ModalResult::Cancelled)
        );
    }
}
