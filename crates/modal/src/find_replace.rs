//! Search & Replace dialog.
//!
//! The dialog is non-blocking: every action is reported to the caller as a
//! [`FindReplaceRequest`] while the dialog stays open. Only `Esc` closes it.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
};

use mint_text_search::SearchOptions;
use mint_theme::Theme;

use crate::{base, top_center_rect, Modal, ModalResult, TextInput};

const TITLE: &str = "Search & Replace";
const FIND_LABEL: &str = "Search:       ";
const REPLACE_LABEL: &str = "Replace with: ";
const CASE_LABEL: &str = "Case Sensitive";
const WHOLE_WORD_LABEL: &str = "Whole words only";
const BUTTONS: [&str; 4] = ["Next", "Previous", "Replace", "Replace All"];

/// What the user asked the dialog to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindReplaceAction {
    /// Find text changed; search again from the current match
    Search,
    Next,
    Previous,
    Replace,
    ReplaceAll,
}

/// Request emitted by the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindReplaceRequest {
    pub action: FindReplaceAction,
    pub find: String,
    pub replace: String,
    pub options: SearchOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Find,
    Replace,
    CaseSensitive,
    WholeWord,
    Buttons,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Find => Focus::Replace,
            Focus::Replace => Focus::CaseSensitive,
            Focus::CaseSensitive => Focus::WholeWord,
            Focus::WholeWord => Focus::Buttons,
            Focus::Buttons => Focus::Find,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Find => Focus::Buttons,
            Focus::Replace => Focus::Find,
            Focus::CaseSensitive => Focus::Replace,
            Focus::WholeWord => Focus::CaseSensitive,
            Focus::Buttons => Focus::WholeWord,
        }
    }
}

/// Message shown at the bottom of the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
enum Feedback {
    Info(String),
    Warning(String),
}

/// Search & Replace dialog
#[derive(Debug)]
pub struct FindReplaceModal {
    find: TextInput,
    replace: TextInput,
    options: SearchOptions,
    focus: Focus,
    /// Index into BUTTONS
    selected_button: usize,
    feedback: Option<Feedback>,
}

impl FindReplaceModal {
    pub fn new() -> Self {
        Self {
            find: TextInput::new(),
            replace: TextInput::new(),
            options: SearchOptions::default(),
            focus: Focus::Find,
            selected_button: 0,
            feedback: None,
        }
    }

    /// Prefill the Search field (e.g. with the selected text)
    pub fn with_find_text(mut self, text: impl Into<String>) -> Self {
        self.find.set_text(text);
        self
    }

    /// Restore fields and options from an earlier session of the dialog
    pub fn with_state(mut self, find: &str, replace: &str, options: SearchOptions) -> Self {
        self.find.set_text(find);
        self.replace.set_text(replace);
        self.options = options;
        self
    }

    pub fn find_text(&self) -> &str {
        self.find.text()
    }

    pub fn replace_text(&self) -> &str {
        self.replace.text()
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Show an informational line (e.g. replacement count)
    pub fn set_info(&mut self, message: impl Into<String>) {
        self.feedback = Some(Feedback::Info(message.into()));
    }

    /// Show a warning line (e.g. text not found)
    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.feedback = Some(Feedback::Warning(message.into()));
    }

    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    fn request(&mut self, action: FindReplaceAction) -> Option<ModalResult<FindReplaceRequest>> {
        self.feedback = None;
        Some(ModalResult::Confirmed(FindReplaceRequest {
            action,
            find: self.find.text().to_string(),
            replace: self.replace.text().to_string(),
            options: self.options,
        }))
    }

    fn button_action(&self) -> FindReplaceAction {
        match self.selected_button {
            0 => FindReplaceAction::Next,
            1 => FindReplaceAction::Previous,
            2 => FindReplaceAction::Replace,
            _ => FindReplaceAction::ReplaceAll,
        }
    }

    fn handle_find_key(&mut self, key: KeyEvent) -> Option<ModalResult<FindReplaceRequest>> {
        let changed = match key.code {
            KeyCode::Enter => return self.request(FindReplaceAction::Next),
            KeyCode::Backspace => self.find.backspace(),
            KeyCode::Delete => self.find.delete(),
            KeyCode::Char(ch) if is_text_input(&key) => {
                self.find.insert(ch);
                true
            }
            _ => {
                edit_cursor(&mut self.find, key.code);
                false
            }
        };

        // Live search on every change of the pattern
        if changed {
            self.request(FindReplaceAction::Search)
        } else {
            None
        }
    }

    fn handle_replace_key(&mut self, key: KeyEvent) -> Option<ModalResult<FindReplaceRequest>> {
        match key.code {
            KeyCode::Enter => return self.request(FindReplaceAction::Replace),
            KeyCode::Backspace => {
                self.replace.backspace();
            }
            KeyCode::Delete => {
                self.replace.delete();
            }
            KeyCode::Char(ch) if is_text_input(&key) => self.replace.insert(ch),
            code => edit_cursor(&mut self.replace, code),
        }
        None
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) -> Option<ModalResult<FindReplaceRequest>> {
        match key.code {
            KeyCode::Left => self.selected_button = self.selected_button.saturating_sub(1),
            KeyCode::Right => {
                self.selected_button = (self.selected_button + 1).min(BUTTONS.len() - 1)
            }
            KeyCode::Enter | KeyCode::Char(' ') => return self.request(self.button_action()),
            _ => {}
        }
        None
    }
}

impl Default for FindReplaceModal {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain or shifted character, not a shortcut
fn is_text_input(key: &KeyEvent) -> bool {
    key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT
}

fn edit_cursor(input: &mut TextInput, code: KeyCode) {
    match code {
        KeyCode::Left => {
            input.move_left();
        }
        KeyCode::Right => {
            input.move_right();
        }
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

impl Modal for FindReplaceModal {
    type Result = FindReplaceRequest;

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let width = (base::buttons_width(&BUTTONS) + 8)
            .max(60)
            .min(area.width);
        // border + find + replace + case + whole word + feedback + buttons + border
        let height = 8u16.min(area.height);
        let modal_area = top_center_rect(width, height, area);

        let inner = base::render_modal_frame(modal_area, buf, theme, TITLE);
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Search
                Constraint::Length(1), // Replace with
                Constraint::Length(1), // Case sensitive
                Constraint::Length(1), // Whole words
                Constraint::Length(1), // Feedback
                Constraint::Length(1), // Buttons
            ])
            .split(inner);

        base::render_labeled_input(
            buf,
            rows[0],
            FIND_LABEL,
            self.find.text(),
            self.find.cursor_pos(),
            self.focus == Focus::Find,
            theme,
        );
        base::render_labeled_input(
            buf,
            rows[1],
            REPLACE_LABEL,
            self.replace.text(),
            self.replace.cursor_pos(),
            self.focus == Focus::Replace,
            theme,
        );
        base::render_checkbox(
            buf,
            rows[2].x,
            rows[2].y,
            CASE_LABEL,
            self.options.case_sensitive,
            self.focus == Focus::CaseSensitive,
            theme,
        );
        base::render_checkbox(
            buf,
            rows[3].x,
            rows[3].y,
            WHOLE_WORD_LABEL,
            self.options.whole_word,
            self.focus == Focus::WholeWord,
            theme,
        );

        if let Some(feedback) = &self.feedback {
            let (text, color) = match feedback {
                Feedback::Info(text) => (text, theme.success),
                Feedback::Warning(text) => (text, theme.warning),
            };
            buf.set_stringn(
                rows[4].x,
                rows[4].y,
                text,
                rows[4].width as usize,
                Style::default().fg(color),
            );
        }

        let selected = (self.focus == Focus::Buttons).then_some(self.selected_button);
        base::render_buttons(buf, rows[5], &BUTTONS, selected, theme);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        // Keys that work regardless of focus
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => return Ok(Some(ModalResult::Cancelled)),
            (KeyCode::Tab, _) => {
                self.focus = self.focus.next();
                return Ok(None);
            }
            (KeyCode::BackTab, _) => {
                self.focus = self.focus.prev();
                return Ok(None);
            }
            (KeyCode::F(3), KeyModifiers::SHIFT) => {
                return Ok(self.request(FindReplaceAction::Previous))
            }
            (KeyCode::F(3), _) => return Ok(self.request(FindReplaceAction::Next)),
            (KeyCode::Char('c'), KeyModifiers::ALT) => {
                self.options.case_sensitive = !self.options.case_sensitive;
                return Ok(None);
            }
            (KeyCode::Char('w'), KeyModifiers::ALT) => {
                self.options.whole_word = !self.options.whole_word;
                return Ok(None);
            }
            (KeyCode::Char('a'), KeyModifiers::ALT) => {
                return Ok(self.request(FindReplaceAction::ReplaceAll))
            }
            (KeyCode::Down, _) if self.focus != Focus::Buttons => {
                self.focus = self.focus.next();
                return Ok(None);
            }
            (KeyCode::Up, _) if self.focus != Focus::Find => {
                self.focus = self.focus.prev();
                return Ok(None);
            }
            _ => {}
        }

        let result = match self.focus {
            Focus::Find => self.handle_find_key(key),
            Focus::Replace => self.handle_replace_key(key),
            Focus::CaseSensitive | Focus::WholeWord => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    if self.focus == Focus::CaseSensitive {
                        self.options.case_sensitive = !self.options.case_sensitive;
                    } else {
                        self.options.whole_word = !self.options.whole_word;
                    }
                }
                None
            }
            Focus::Buttons => self.handle_buttons_key(key),
        };
        Ok(result)
    }
}
