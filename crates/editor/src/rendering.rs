//! Editor content rendering.
//!
//! Lines are drawn from the viewport's top line and left display column.
//! Tabs expand to the next tab stop; wide chars take two cells.

use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Color, Modifier, Style},
};
use unicode_width::UnicodeWidthChar;

use mint_buffer::{Cursor, Range, TextBuffer, Viewport};
use mint_theme::Theme;

/// Cells taken by `ch` when it starts at display column `column`
pub fn char_width(ch: char, column: usize, tab_size: usize) -> usize {
    if ch == '\t' {
        let tab_size = tab_size.max(1);
        tab_size - column % tab_size
    } else {
        ch.width().unwrap_or(0)
    }
}

/// Display column of the char at `char_column` in `line`
pub fn display_column(line: &str, char_column: usize, tab_size: usize) -> usize {
    line.chars()
        .take(char_column)
        .fold(0, |col, ch| col + char_width(ch, col, tab_size))
}

/// Style for a char, given whether it is selected.
fn determine_cell_style(is_selected: bool, theme: &Theme) -> Style {
    if is_selected {
        Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
    } else {
        Style::default().bg(theme.bg).fg(theme.fg)
    }
}

/// Draw visible lines, the selection and the caret.
///
/// `cursor` is the caret in display columns.
#[allow(clippy::too_many_arguments)]
pub fn render_editor_content(
    buf: &mut Buffer,
    area: Rect,
    buffer: &TextBuffer,
    viewport: &Viewport,
    cursor: Cursor,
    selection: Range,
    tab_size: usize,
    theme: &Theme,
) {
    let base_style = Style::default().bg(theme.bg).fg(theme.fg);
    buf.set_style(area, base_style);

    let left = viewport.left_column;
    let right = left + area.width as usize;

    for row in 0..area.height as usize {
        let line_idx = viewport.top_line + row;
        let Some(line) = buffer.line(line_idx) else {
            break;
        };
        let y = area.y + row as u16;
        let line_start = buffer.line_start(line_idx);

        let mut col = 0;
        for (i, ch) in line.chars().enumerate() {
            let width = char_width(ch, col, tab_size);
            let style = determine_cell_style(selection.contains(line_start + i), theme);

            // Only draw chars that fit entirely inside the visible columns
            if col >= left && col + width <= right {
                let x = area.x + (col - left) as u16;
                if ch == '\t' {
                    for dx in 0..width as u16 {
                        buf.set_string(x + dx, y, " ", style);
                    }
                } else if width > 0 {
                    buf.set_string(x, y, ch.to_string(), style);
                }
            }

            col += width;
            if col >= right {
                break;
            }
        }

        // Selected line break shows as one highlighted cell
        let line_end = line_start + line.chars().count();
        if line_idx + 1 < buffer.line_count()
            && selection.contains(line_end)
            && col >= left
            && col < right
        {
            let x = area.x + (col - left) as u16;
            buf.set_string(x, y, " ", determine_cell_style(true, theme));
        }
    }

    if viewport.is_line_visible(cursor.line) && cursor.column >= left && cursor.column < right {
        let x = area.x + (cursor.column - left) as u16;
        let y = area.y + (cursor.line - viewport.top_line) as u16;
        render_cursor_at(buf, x, y, area, theme);
    }
}

/// Render cursor by inverting cell colors at the given position.
pub fn render_cursor_at(buf: &mut Buffer, x: u16, y: u16, area: Rect, theme: &Theme) {
    if x < area.x + area.width && y < area.y + area.height {
        if let Some(cell) = buf.cell_mut((x, y)) {
            invert_cell_colors(cell, theme);
        }
    }
}

/// Swap foreground and background, using theme defaults for Reset colors.
fn invert_cell_colors(cell: &mut Cell, theme: &Theme) {
    let current_fg = match cell.fg {
        Color::Reset => theme.fg,
        color => color,
    };
    let current_bg = match cell.bg {
        Color::Reset => theme.bg,
        color => color,
    };

    cell.set_style(
        Style::default()
            .bg(current_fg)
            .fg(current_bg)
            .add_modifier(Modifier::BOLD),
    );
}
