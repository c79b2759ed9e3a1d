//! Message box for information and warnings.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget, Wrap},
};

use mint_theme::Theme;

use crate::{
    base, calculate_modal_width, centered_rect_with_size, max_line_width, Modal, ModalResult,
    ModalWidthConfig,
};

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    Information,
    Warning,
}

/// Information modal window (closes on any key)
#[derive(Debug)]
pub struct InfoModal {
    title: String,
    message: String,
    kind: InfoKind,
}

impl InfoModal {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: InfoKind::Information,
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: InfoKind::Warning,
            ..Self::new(title, message)
        }
    }

    pub fn kind(&self) -> InfoKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Modal for InfoModal {
    type Result = ();

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let width = calculate_modal_width(
            [self.title.len() as u16 + 4, max_line_width(&self.message)].into_iter(),
            area.width,
            ModalWidthConfig::default(),
        );
        let text_width = width.saturating_sub(4).max(1) as usize;
        let message_lines: u16 = self
            .message
            .lines()
            .map(|line| (line.chars().count().max(1)).div_ceil(text_width) as u16)
            .sum::<u16>()
            .max(1);
        // border + message + blank + button + border
        let height = (message_lines + 4).min(area.height);
        let modal_area = centered_rect_with_size(width, height, area);

        let inner = base::render_modal_frame(modal_area, buf, theme, &self.title);

        let color = match self.kind {
            InfoKind::Information => theme.fg,
            InfoKind::Warning => theme.warning,
        };
        let message_area = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            height: inner.height.saturating_sub(2),
            ..inner
        };
        Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(color))
            .render(message_area, buf);

        if inner.height >= 1 {
            let button_area = Rect {
                y: inner.bottom() - 1,
                height: 1,
                ..inner
            };
            Paragraph::new("[ OK ]")
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(theme.selected_fg)
                        .bg(theme.selected_bg)
                        .add_modifier(Modifier::BOLD),
                )
                .render(button_area, buf);
        }
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        // Close on any key
        Ok(Some(ModalResult::Confirmed(())))
    }
}
