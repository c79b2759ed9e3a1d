//! Theme color definitions.

use ratatui::style::Color;

/// Editor theme with semantic color assignments.
///
/// The theme uses a minimal 10-color palette:
/// - 2 base colors (bg, fg)
/// - 2 accented colors (accented_bg, accented_fg)
/// - 2 selection colors (selected_bg, selected_fg)
/// - 1 disabled color
/// - 3 semantic colors (success, warning, error)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme name for display
    pub name: &'static str,

    // === Base ===
    /// Editor and dialog backgrounds
    pub bg: Color,
    /// Main text
    pub fg: Color,

    // === Accented ===
    /// Title bar, menu bar, toolbar and status bar background
    pub accented_bg: Color,
    /// Borders, menu hotkey letters, focused buttons
    pub accented_fg: Color,

    // === Selection ===
    /// Text selection and highlighted menu item background
    pub selected_bg: Color,
    /// Text on selection
    pub selected_fg: Color,

    // === Disabled ===
    /// Inactive elements, hints, separators
    pub disabled: Color,

    // === Semantic ===
    /// Confirmation messages
    pub success: Color,
    /// Warnings and the modified marker
    pub warning: Color,
    /// Failed operations
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        *Self::get_by_name("default")
    }
}
