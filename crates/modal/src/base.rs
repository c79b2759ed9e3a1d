//! Common modal rendering utilities.
//!
//! Frame, input field, checkbox and button row drawing shared by the dialogs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use mint_theme::Theme;

use crate::modal_constants::BUTTON_SPACING;

/// Clear the area and draw a bordered frame with a title.
///
/// Returns the inner area.
pub fn render_modal_frame(area: Rect, buf: &mut Buffer, theme: &Theme, title: &str) -> Rect {
    Clear.render(area, buf);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.accented_fg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accented_fg))
        .style(Style::default().fg(theme.fg).bg(theme.bg));

    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Render a text input field with cursor.
///
/// `cursor` is the cursor position in chars. Text scrolls left when it
/// does not fit.
#[allow(clippy::too_many_arguments)]
pub fn render_input_field(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    width: u16,
    text: &str,
    cursor: usize,
    is_focused: bool,
    theme: &Theme,
) {
    if width == 0 {
        return;
    }

    let field_style = if is_focused {
        Style::default().fg(theme.fg).bg(theme.accented_bg)
    } else {
        Style::default().fg(theme.disabled).bg(theme.accented_bg)
    };

    // Clear the field background
    buf.set_string(x, y, " ".repeat(width as usize), field_style);

    // Keep the cursor inside the visible part
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let visible = width.saturating_sub(1) as usize;
    let skip = cursor.saturating_sub(visible);
    let shown: String = chars.iter().skip(skip).take(width as usize).collect();
    buf.set_stringn(x, y, &shown, width as usize, field_style);

    if is_focused {
        let before: String = chars[skip..cursor].iter().collect();
        let cursor_x = x + (before.width() as u16).min(width - 1);
        buf[(cursor_x, y)].set_style(field_style.add_modifier(Modifier::REVERSED));
    }
}

/// Render a label followed by an input field filling the rest of the row.
pub fn render_labeled_input(
    buf: &mut Buffer,
    area: Rect,
    label: &str,
    text: &str,
    cursor: usize,
    is_focused: bool,
    theme: &Theme,
) {
    let label_width = label.width() as u16;
    let label_style = if is_focused {
        Style::default().fg(theme.accented_fg)
    } else {
        Style::default().fg(theme.fg)
    };
    buf.set_string(area.x, area.y, label, label_style);

    render_input_field(
        buf,
        area.x + label_width,
        area.y,
        area.width.saturating_sub(label_width),
        text,
        cursor,
        is_focused,
        theme,
    );
}

/// Render a `[x] Label` checkbox. Returns its width.
pub fn render_checkbox(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    label: &str,
    checked: bool,
    is_focused: bool,
    theme: &Theme,
) -> u16 {
    let mark = if checked { 'x' } else { ' ' };
    let text = format!("[{}] {}", mark, label);
    let style = if is_focused {
        Style::default()
            .fg(theme.selected_fg)
            .bg(theme.selected_bg)
    } else {
        Style::default().fg(theme.fg)
    };
    buf.set_string(x, y, &text, style);
    text.width() as u16
}

/// Style for a dialog button.
pub fn button_style(is_selected: bool, theme: &Theme) -> Style {
    if is_selected {
        Style::default()
            .fg(theme.selected_fg)
            .bg(theme.selected_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accented_fg)
    }
}

/// Render a centered row of `[ Label ]` buttons.
pub fn render_buttons(
    buf: &mut Buffer,
    area: Rect,
    labels: &[&str],
    selected: Option<usize>,
    theme: &Theme,
) {
    let texts: Vec<String> = labels.iter().map(|l| format!("[ {} ]", l)).collect();
    let total: u16 = texts.iter().map(|t| t.width() as u16).sum::<u16>()
        + BUTTON_SPACING * texts.len().saturating_sub(1) as u16;

    let mut x = area.x + area.width.saturating_sub(total) / 2;
    for (idx, text) in texts.iter().enumerate() {
        buf.set_string(x, area.y, text, button_style(selected == Some(idx), theme));
        x += text.width() as u16 + BUTTON_SPACING;
    }
}

/// Width of a button row as drawn by [`render_buttons`].
pub fn buttons_width(labels: &[&str]) -> u16 {
    let text: u16 = labels.iter().map(|l| l.width() as u16 + 4).sum();
    text + BUTTON_SPACING * labels.len().saturating_sub(1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_buttons_are_centered() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        render_buttons(&mut buf, area, &["Yes", "No"], Some(0), &theme);

        let row = row_text(&buf, 0);
        assert_eq!(buttons_width(&["Yes", "No"]), 17);
        assert!(row.starts_with("      [ Yes ]    [ No ]"));
    }

    #[test]
    fn test_input_field_scrolls_to_cursor() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        render_input_field(&mut buf, 0, 0, 5, "abcdefgh", 8, true, &theme);

        assert_eq!(row_text(&buf, 0), "efgh ");
    }

    #[test]
    fn test_checkbox_mark() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        let width = render_checkbox(&mut buf, 0, 0, "Case", true, false, &theme);

        assert_eq!(width, 8);
        assert!(row_text(&buf, 0).starts_with("[x] Case"));
    }
}
