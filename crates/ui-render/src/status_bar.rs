use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use mint_theme::Theme;

/// Status bar rendering parameters
pub struct StatusBarParams<'a> {
    pub theme: &'a Theme,
    /// Status message (message, is_error)
    pub status_message: Option<&'a (String, bool)>,
    /// Status tip of the highlighted menu item; shown instead of the message
    pub tip: Option<&'a str>,
    /// Position indicator ("Line: 1, Column: 1")
    pub position: &'a str,
}

/// Status bar at the bottom of screen
pub struct StatusBar;

impl StatusBar {
    /// Render status bar
    pub fn render(buf: &mut Buffer, area: Rect, params: &StatusBarParams<'_>) {
        if area.height == 0 {
            return;
        }

        // Fill entire line with background color from theme
        for x in area.left()..area.right() {
            buf[(x, area.top())]
                .set_char(' ')
                .set_style(Style::default().bg(params.theme.accented_bg));
        }

        let line = Line::from(Self::get_status_text(params, area.width));
        let y = area.top();

        let mut current_x = area.left();
        for span in line.spans {
            for ch in span.content.chars() {
                if current_x >= area.right() {
                    break;
                }
                buf[(current_x, y)].set_char(ch).set_style(span.style);
                current_x += 1;
            }
        }
    }

    /// Message (or tip) on the left, position on the right
    fn get_status_text<'a>(params: &'a StatusBarParams<'a>, total_width: u16) -> Vec<Span<'a>> {
        let theme = params.theme;

        let base_style = Style::default().fg(theme.fg).bg(theme.accented_bg);
        let highlight_style = Style::default()
            .fg(theme.accented_fg)
            .bg(theme.accented_bg)
            .add_modifier(Modifier::BOLD);

        let left = match (params.tip, params.status_message) {
            (Some(tip), _) => Span::styled(format!(" {} ", tip), base_style),
            (None, Some((message, true))) => Span::styled(
                format!(" {} ", message),
                Style::default()
                    .fg(theme.error)
                    .bg(theme.accented_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            (None, Some((message, false))) => Span::styled(format!(" {} ", message), base_style),
            (None, None) => Span::styled(" ", base_style),
        };

        let position = format!(" {} ", params.position);
        let padding = (total_width as usize).saturating_sub(left.width() + position.width());

        vec![
            left,
            Span::styled(" ".repeat(padding), base_style),
            Span::styled(position, highlight_style),
        ]
    }
}
