//! Toolbar rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use mint_theme::Theme;

/// Toolbar button: label plus the shortcut that triggers it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton<'a> {
    pub label: &'a str,
    pub shortcut: &'a str,
}

/// Render buttons as `[ New ^N ]` left to right.
///
/// Buttons that do not fit are dropped. Returns the x range of each
/// rendered button.
pub fn render_toolbar(
    buf: &mut Buffer,
    area: Rect,
    buttons: &[ToolbarButton<'_>],
    theme: &Theme,
) -> Vec<(u16, u16)> {
    if area.height == 0 {
        return Vec::new();
    }

    let background = Style::default().bg(theme.accented_bg).fg(theme.fg);
    buf.set_style(area, background);
    for x in area.left()..area.right() {
        buf[(x, area.top())].set_char(' ');
    }

    let label_style = Style::default()
        .bg(theme.accented_bg)
        .fg(theme.fg)
        .add_modifier(Modifier::BOLD);
    let shortcut_style = Style::default().bg(theme.accented_bg).fg(theme.disabled);
    let bracket_style = Style::default().bg(theme.accented_bg).fg(theme.accented_fg);

    let mut ranges = Vec::new();
    let mut x = area.x + 1;
    for button in buttons {
        let width = (button.label.width() + button.shortcut.width() + 5) as u16;
        if x + width > area.right() {
            break;
        }

        let start = x;
        x = buf.set_stringn(x, area.y, "[ ", usize::MAX, bracket_style).0;
        x = buf.set_stringn(x, area.y, button.label, usize::MAX, label_style).0;
        x = buf.set_stringn(x, area.y, " ", usize::MAX, label_style).0;
        x = buf.set_stringn(x, area.y, button.shortcut, usize::MAX, shortcut_style).0;
        x = buf.set_stringn(x, area.y, " ]", usize::MAX, bracket_style).0;
        ranges.push((start, x));

        x += 1;
    }
    ranges
}
