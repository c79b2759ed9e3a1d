//! Drop-down menu widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use mint_theme::Theme;

/// Drop-down menu item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem {
    pub label: String,
    /// Shortcut shown right-aligned, may be empty
    pub shortcut: String,
}

impl DropdownItem {
    pub fn new(label: impl Into<String>, shortcut: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            shortcut: shortcut.into(),
        }
    }
}

/// Drop-down menu
pub struct Dropdown<'a> {
    items: &'a [DropdownItem],
    selected: usize,
    x: u16,
    y: u16,
}

impl<'a> Dropdown<'a> {
    pub fn new(items: &'a [DropdownItem], selected: usize, x: u16, y: u16) -> Self {
        Self {
            items,
            selected,
            x,
            y,
        }
    }

    /// Area the drop-down occupies inside `bounds`
    pub fn area(&self, bounds: Rect) -> Rect {
        let label_width = self.items.iter().map(|i| i.label.width()).max().unwrap_or(0);
        let shortcut_width = self
            .items
            .iter()
            .map(|i| i.shortcut.width())
            .max()
            .unwrap_or(0);
        // borders + padding + gap between label and shortcut
        let width = (label_width + shortcut_width + 6).min(bounds.width as usize) as u16;
        let height = ((self.items.len() + 2) as u16).min(bounds.height);

        let max_x = bounds.x + bounds.width.saturating_sub(width);
        let max_y = bounds.y + bounds.height.saturating_sub(height);

        Rect {
            x: self.x.min(max_x),
            y: self.y.min(max_y),
            width,
            height,
        }
    }

    pub fn render(&self, buf: &mut Buffer, theme: &Theme) {
        if self.items.is_empty() {
            return;
        }

        let area = self.area(buf.area);
        let inner_width = area.width.saturating_sub(2) as usize;

        // Clear area under dropdown
        Clear.render(area, buf);

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == self.selected {
                    Style::default()
                        .bg(theme.selected_bg)
                        .fg(theme.selected_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg)
                };
                let shortcut_style = if i == self.selected {
                    style
                } else {
                    Style::default().fg(theme.disabled)
                };

                let gap = inner_width
                    .saturating_sub(item.label.width() + item.shortcut.width() + 2)
                    .max(1);

                let line = Line::from(vec![
                    Span::styled(" ", style),
                    Span::styled(item.label.as_str(), style),
                    Span::styled(" ".repeat(gap), style),
                    Span::styled(item.shortcut.as_str(), shortcut_style),
                    Span::styled(" ", style),
                ]);

                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accented_fg))
                .style(Style::default().bg(theme.accented_bg)),
        );

        list.render(area, buf);
    }
}
