//! Editor configuration.

use mint_config::{defaults, EditorSettings};

/// Per-editor settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Spaces inserted by Tab (and the width of a tab stop when rendering)
    pub tab_size: usize,
    /// Reject editing keys
    pub read_only: bool,
    /// Undo steps kept per document
    pub history_size: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: defaults::TAB_SIZE,
            read_only: false,
            history_size: defaults::HISTORY_SIZE,
        }
    }
}

impl EditorConfig {
    pub fn from_settings(settings: &EditorSettings) -> Self {
        Self {
            tab_size: settings.tab_size.max(1),
            read_only: false,
            history_size: settings.history_size,
        }
    }
}
