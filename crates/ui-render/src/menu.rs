//! Menu bar rendering.
//!
//! The top line shows the menu titles, the document title and a clock.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use mint_theme::Theme;

const OPEN_HINT: &str = "F10 Menu";
const NAVIGATE_HINT: &str = "\u{2190}\u{2192} Navigate  Enter Select  Esc Close";

/// Parameters for rendering the menu bar.
pub struct MenuRenderParams<'a> {
    pub theme: &'a Theme,
    /// Menu titles, left to right
    pub menus: &'a [&'a str],
    pub selected_menu: Option<usize>,
    pub menu_open: bool,
    /// Document title ("Mint - notes.txt*")
    pub title: &'a str,
}

/// Render top menu in Midnight Commander style
pub fn render_menu(frame: &mut Frame, area: Rect, params: &MenuRenderParams) {
    let mut spans = vec![Span::raw(" ")];

    for (i, item) in params.menus.iter().enumerate() {
        let is_selected = params.selected_menu == Some(i);
        let (base_style, accent_style) = if is_selected && params.menu_open {
            let base = Style::default()
                .fg(params.theme.selected_fg)
                .bg(params.theme.selected_bg)
                .add_modifier(Modifier::BOLD);
            (base, base)
        } else {
            let base = Style::default().fg(params.theme.fg);
            let accent = Style::default()
                .fg(params.theme.accented_fg)
                .add_modifier(Modifier::BOLD);
            (base, accent)
        };

        // First letter is the keyboard accelerator
        if let Some(first_char) = item.chars().next() {
            let first = first_char.to_string();
            let rest = &item[first.len()..];

            spans.push(Span::styled(first, accent_style));
            if !rest.is_empty() {
                spans.push(Span::styled(rest, base_style));
            }
        }

        spans.push(Span::raw("  "));
    }

    let hint = if params.menu_open {
        NAVIGATE_HINT
    } else {
        OPEN_HINT
    };
    let hint_text = format!(" {} ", hint);
    let title_text = format!(" {} ", params.title);
    let clock_text = format!(" {} ", Local::now().format("%H:%M"));

    let used_width: usize = spans.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize)
        .saturating_sub(used_width + hint_text.width() + title_text.width() + clock_text.width());

    if remaining > 0 {
        spans.push(Span::raw(" ".repeat(remaining)));
    }

    spans.push(Span::styled(hint_text, Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        title_text,
        Style::default()
            .fg(params.theme.accented_fg)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        clock_text,
        Style::default()
            .fg(params.theme.fg)
            .add_modifier(Modifier::BOLD),
    ));

    let menu =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(params.theme.accented_bg));

    frame.render_widget(menu, area);
}

/// X coordinate of a menu title, for drop-down positioning
pub fn get_menu_item_x(menus: &[&str], index: usize) -> u16 {
    let mut x = 1_u16;
    for (i, item) in menus.iter().enumerate() {
        if i == index {
            return x;
        }
        x += item.width() as u16 + 2; // +2 for spaces
    }
    x
}
