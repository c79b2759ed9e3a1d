//! Keyboard command handling for the editor.
//!
//! Key parsing is kept apart from command execution so bindings can be
//! tested without an editor. File and dialog shortcuts belong to the
//! application and never reach this table.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::Editor;

/// Editor command representing a user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    // Navigation (clears selection)
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLeft,
    MoveCursorRight,
    MoveToLineStart,
    MoveToLineEnd,
    PageUp,
    PageDown,
    MoveToDocumentStart,
    MoveToDocumentEnd,

    // Navigation with selection (Shift modifier)
    MoveCursorUpWithSelection,
    MoveCursorDownWithSelection,
    MoveCursorLeftWithSelection,
    MoveCursorRightWithSelection,
    MoveToLineStartWithSelection,
    MoveToLineEndWithSelection,
    PageUpWithSelection,
    PageDownWithSelection,
    MoveToDocumentStartWithSelection,
    MoveToDocumentEndWithSelection,

    // Text editing
    InsertChar(char),
    InsertTab,
    InsertNewline,
    Backspace,
    Delete,

    // Undo/Redo
    Undo,
    Redo,

    // Selection
    SelectAll,

    // Clipboard
    Copy,
    Cut,
    Paste,

    // No operation (for unhandled keys)
    None,
}

impl EditorCommand {
    /// Parse a KeyEvent into an EditorCommand.
    ///
    /// * `read_only` - editing keys map to `None`
    /// * `has_selection` - Shift+Delete cuts only when something is selected
    pub fn from_key_event(key: KeyEvent, read_only: bool, has_selection: bool) -> Self {
        match (key.code, key.modifiers) {
            // Navigation
            (KeyCode::Up, KeyModifiers::NONE) => Self::MoveCursorUp,
            (KeyCode::Down, KeyModifiers::NONE) => Self::MoveCursorDown,
            (KeyCode::Left, KeyModifiers::NONE) => Self::MoveCursorLeft,
            (KeyCode::Right, KeyModifiers::NONE) => Self::MoveCursorRight,
            (KeyCode::Home, KeyModifiers::NONE) => Self::MoveToLineStart,
            (KeyCode::End, KeyModifiers::NONE) => Self::MoveToLineEnd,
            (KeyCode::PageUp, KeyModifiers::NONE) => Self::PageUp,
            (KeyCode::PageDown, KeyModifiers::NONE) => Self::PageDown,
            (KeyCode::Home, KeyModifiers::CONTROL) => Self::MoveToDocumentStart,
            (KeyCode::End, KeyModifiers::CONTROL) => Self::MoveToDocumentEnd,

            // Navigation with selection (Shift)
            (KeyCode::Up, KeyModifiers::SHIFT) => Self::MoveCursorUpWithSelection,
            (KeyCode::Down, KeyModifiers::SHIFT) => Self::MoveCursorDownWithSelection,
            (KeyCode::Left, KeyModifiers::SHIFT) => Self::MoveCursorLeftWithSelection,
            (KeyCode::Right, KeyModifiers::SHIFT) => Self::MoveCursorRightWithSelection,
            (KeyCode::Home, KeyModifiers::SHIFT) => Self::MoveToLineStartWithSelection,
            (KeyCode::End, KeyModifiers::SHIFT) => Self::MoveToLineEndWithSelection,
            (KeyCode::PageUp, KeyModifiers::SHIFT) => Self::PageUpWithSelection,
            (KeyCode::PageDown, KeyModifiers::SHIFT) => Self::PageDownWithSelection,
            (KeyCode::Home, mods)
                if mods.contains(KeyModifiers::SHIFT) && mods.contains(KeyModifiers::CONTROL) =>
            {
                Self::MoveToDocumentStartWithSelection
            }
            (KeyCode::End, mods)
                if mods.contains(KeyModifiers::SHIFT) && mods.contains(KeyModifiers::CONTROL) =>
            {
                Self::MoveToDocumentEndWithSelection
            }

            // Editing (only if not read-only)
            (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT) if !read_only => {
                Self::InsertChar(ch)
            }
            (KeyCode::Enter, KeyModifiers::NONE) if !read_only => Self::InsertNewline,
            (KeyCode::Tab, KeyModifiers::NONE) if !read_only => Self::InsertTab,
            (KeyCode::Backspace, KeyModifiers::NONE) if !read_only => Self::Backspace,
            (KeyCode::Delete, KeyModifiers::NONE) if !read_only => Self::Delete,

            // Ctrl+Z / Ctrl+Y - undo/redo
            (KeyCode::Char('z'), KeyModifiers::CONTROL) if !read_only => Self::Undo,
            (KeyCode::Char('y'), KeyModifiers::CONTROL) if !read_only => Self::Redo,

            // Ctrl+Shift+Z - redo (terminal convention)
            (KeyCode::Char('z') | KeyCode::Char('Z'), mods)
                if !read_only
                    && mods.contains(KeyModifiers::CONTROL)
                    && mods.contains(KeyModifiers::SHIFT) =>
            {
                Self::Redo
            }

            // Ctrl+A - select all
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => Self::SelectAll,

            // Ctrl+C / Ctrl+Insert - copy
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Self::Copy,
            (KeyCode::Insert, KeyModifiers::CONTROL) => Self::Copy,

            // Ctrl+X / Shift+Delete - cut
            (KeyCode::Char('x'), KeyModifiers::CONTROL) if !read_only => Self::Cut,
            (KeyCode::Delete, KeyModifiers::SHIFT) if !read_only && has_selection => Self::Cut,

            // Ctrl+V / Shift+Insert - paste
            (KeyCode::Char('v'), KeyModifiers::CONTROL) if !read_only => Self::Paste,
            (KeyCode::Insert, KeyModifiers::SHIFT) if !read_only => Self::Paste,

            _ => Self::None,
        }
    }

    /// Whether the command changes the document
    pub fn is_edit(self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::InsertTab
                | Self::InsertNewline
                | Self::Backspace
                | Self::Delete
                | Self::Undo
                | Self::Redo
                | Self::Cut
                | Self::Paste
        )
    }

    /// Execute this command on the given editor.
    pub fn execute(self, editor: &mut Editor) -> Result<()> {
        match self {
            Self::MoveCursorUp => editor.navigate(Editor::move_cursor_up),
            Self::MoveCursorDown => editor.navigate(Editor::move_cursor_down),
            Self::MoveCursorLeft => editor.navigate(Editor::move_cursor_left),
            Self::MoveCursorRight => editor.navigate(Editor::move_cursor_right),
            Self::MoveToLineStart => editor.navigate(Editor::move_to_line_start),
            Self::MoveToLineEnd => editor.navigate(Editor::move_to_line_end),
            Self::PageUp => editor.navigate(Editor::page_up),
            Self::PageDown => editor.navigate(Editor::page_down),
            Self::MoveToDocumentStart => editor.navigate(Editor::move_to_document_start),
            Self::MoveToDocumentEnd => editor.navigate(Editor::move_to_document_end),

            Self::MoveCursorUpWithSelection => {
                editor.navigate_with_selection(Editor::move_cursor_up)
            }
            Self::MoveCursorDownWithSelection => {
                editor.navigate_with_selection(Editor::move_cursor_down)
            }
            Self::MoveCursorLeftWithSelection => {
                editor.navigate_with_selection(Editor::move_cursor_left)
            }
            Self::MoveCursorRightWithSelection => {
                editor.navigate_with_selection(Editor::move_cursor_right)
            }
            Self::MoveToLineStartWithSelection => {
                editor.navigate_with_selection(Editor::move_to_line_start)
            }
            Self::MoveToLineEndWithSelection => {
                editor.navigate_with_selection(Editor::move_to_line_end)
            }
            Self::PageUpWithSelection => editor.navigate_with_selection(Editor::page_up),
            Self::PageDownWithSelection => editor.navigate_with_selection(Editor::page_down),
            Self::MoveToDocumentStartWithSelection => {
                editor.navigate_with_selection(Editor::move_to_document_start)
            }
            Self::MoveToDocumentEndWithSelection => {
                editor.navigate_with_selection(Editor::move_to_document_end)
            }

            Self::InsertChar(ch) => editor.insert_char(ch),
            Self::InsertTab => editor.insert_tab(),
            Self::InsertNewline => editor.insert_newline(),
            Self::Backspace => editor.backspace(),
            Self::Delete => editor.delete(),

            Self::Undo => editor.undo(),
            Self::Redo => editor.redo(),

            Self::SelectAll => editor.select_all(),

            Self::Copy => editor.copy(),
            Self::Cut => editor.cut(),
            Self::Paste => editor.paste(),

            Self::None => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_chars_insert() {
        let cmd = EditorCommand::from_key_event(
            key(KeyCode::Char('x'), KeyModifiers::NONE),
            false,
            false,
        );
        assert_eq!(cmd, EditorCommand::InsertChar('x'));

        let cmd = EditorCommand::from_key_event(
            key(KeyCode::Char('X'), KeyModifiers::SHIFT),
            false,
            false,
        );
        assert_eq!(cmd, EditorCommand::InsertChar('X'));
    }

    #[test]
    fn test_read_only_blocks_edits() {
        for (code, mods) in [
            (KeyCode::Char('x'), KeyModifiers::NONE),
            (KeyCode::Enter, KeyModifiers::NONE),
            (KeyCode::Backspace, KeyModifiers::NONE),
            (KeyCode::Char('v'), KeyModifiers::CONTROL),
            (KeyCode::Char('z'), KeyModifiers::CONTROL),
        ] {
            let cmd = EditorCommand::from_key_event(key(code, mods), true, false);
            assert_eq!(cmd, EditorCommand::None, "{:?}", code);
        }

        // Navigation and copy still work
        let cmd = EditorCommand::from_key_event(key(KeyCode::Up, KeyModifiers::NONE), true, false);
        assert_eq!(cmd, EditorCommand::MoveCursorUp);
        let cmd = EditorCommand::from_key_event(
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            true,
            true,
        );
        assert_eq!(cmd, EditorCommand::Copy);
    }

    #[test]
    fn test_shift_selects() {
        let cmd = EditorCommand::from_key_event(key(KeyCode::End, KeyModifiers::SHIFT), false, false);
        assert_eq!(cmd, EditorCommand::MoveToLineEndWithSelection);

        let cmd = EditorCommand::from_key_event(
            key(KeyCode::Home, KeyModifiers::SHIFT | KeyModifiers::CONTROL),
            false,
            false,
        );
        assert_eq!(cmd, EditorCommand::MoveToDocumentStartWithSelection);
    }

    #[test]
    fn test_shift_delete_needs_selection() {
        let shift_delete = key(KeyCode::Delete, KeyModifiers::SHIFT);
        assert_eq!(
            EditorCommand::from_key_event(shift_delete, false, true),
            EditorCommand::Cut
        );
        assert_eq!(
            EditorCommand::from_key_event(shift_delete, false, false),
            EditorCommand::None
        );
    }

    #[test]
    fn test_control_chars_do_not_insert() {
        let cmd = EditorCommand::from_key_event(
            key(KeyCode::Char('q'), KeyModifiers::CONTROL),
            false,
            false,
        );
        assert_eq!(cmd, EditorCommand::None);
    }

    #[test]
    fn test_is_edit() {
        assert!(EditorCommand::Paste.is_edit());
        assert!(EditorCommand::InsertChar('a').is_edit());
        assert!(!EditorCommand::Copy.is_edit());
        assert!(!EditorCommand::PageDown.is_edit());
    }
}
