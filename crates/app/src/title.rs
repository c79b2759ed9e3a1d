//! Window title.

use std::path::{Path, PathBuf};

const APP_NAME: &str = "Mint";
const UNTITLED: &str = "Untitled";

/// What the title depends on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub file_path: Option<PathBuf>,
    pub modified: bool,
}

impl EditorState {
    pub fn new(file_path: Option<&Path>, modified: bool) -> Self {
        Self {
            file_path: file_path.map(Path::to_path_buf),
            modified,
        }
    }

    /// File name shown to the user, "Untitled" without a path
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }
}

/// `"Mint - notes.txt"`, with a trailing `*` while there are unsaved changes.
pub fn render_title(state: &EditorState) -> String {
    let marker = if state.modified { "*" } else { "" };
    format!("{} - {}{}", APP_NAME, state.display_name(), marker)
}
