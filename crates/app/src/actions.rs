//! Action dispatch table.
//!
//! Every user-visible command has one row: label, shortcut, status tip and
//! handler. Menus, the toolbar and global hotkeys all dispatch through
//! [`action_table`], so a command behaves the same however it is invoked.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use mint_editor::EditorCommand;

use crate::App;

/// Identifier of a user-visible command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    FindReplace,
    About,
}

/// Key combination bound to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub label: &'static str,
}

impl Shortcut {
    const fn ctrl(ch: char, label: &'static str) -> Self {
        Self {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            label,
        }
    }

    const fn ctrl_shift(ch: char, label: &'static str) -> Self {
        Self {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL.union(KeyModifiers::SHIFT),
            label,
        }
    }

    const fn key(code: KeyCode, label: &'static str) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
            label,
        }
    }

    /// Letters compare case-insensitively; an uppercase letter implies Shift.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let mut modifiers =
            key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::SHIFT | KeyModifiers::ALT);

        match (self.code, key.code) {
            (KeyCode::Char(expected), KeyCode::Char(actual)) => {
                if actual.is_ascii_uppercase() {
                    modifiers |= KeyModifiers::SHIFT;
                }
                expected.eq_ignore_ascii_case(&actual) && modifiers == self.modifiers
            }
            (expected, actual) => expected == actual && modifiers == self.modifiers,
        }
    }
}

pub type ActionHandler = fn(&mut App) -> Result<()>;

/// One row of the dispatch table
pub struct Action {
    pub id: ActionId,
    pub label: &'static str,
    pub shortcut: Option<Shortcut>,
    /// Shown in the status bar while the item is highlighted
    pub tip: &'static str,
    pub handler: ActionHandler,
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish()
    }
}

/// Rows in `ActionId` declaration order
static ACTIONS: [Action; 13] = [
    Action {
        id: ActionId::New,
        label: "New",
        shortcut: Some(Shortcut::ctrl('n', "Ctrl+N")),
        tip: "Create a new file",
        handler: App::request_new,
    },
    Action {
        id: ActionId::Open,
        label: "Open",
        shortcut: Some(Shortcut::ctrl('o', "Ctrl+O")),
        tip: "Open an existing file",
        handler: App::request_open,
    },
    Action {
        id: ActionId::Save,
        label: "Save",
        shortcut: Some(Shortcut::ctrl('s', "Ctrl+S")),
        tip: "Save current file",
        handler: App::save_document,
    },
    Action {
        id: ActionId::SaveAs,
        label: "Save As",
        shortcut: Some(Shortcut::ctrl_shift('s', "Ctrl+Shift+S")),
        tip: "Save under new name/extension",
        handler: App::request_save_as,
    },
    Action {
        id: ActionId::Exit,
        label: "Exit",
        shortcut: Some(Shortcut::ctrl('q', "Ctrl+Q")),
        tip: "Exit application",
        handler: App::request_exit,
    },
    Action {
        id: ActionId::Undo,
        label: "Undo",
        shortcut: Some(Shortcut::ctrl('z', "Ctrl+Z")),
        tip: "Undo the last edit",
        handler: undo,
    },
    Action {
        id: ActionId::Redo,
        label: "Redo",
        shortcut: Some(Shortcut::ctrl('y', "Ctrl+Y")),
        tip: "Redo the last undone edit",
        handler: redo,
    },
    Action {
        id: ActionId::Cut,
        label: "Cut",
        shortcut: Some(Shortcut::ctrl('x', "Ctrl+X")),
        tip: "Cut the selection to the clipboard",
        handler: cut,
    },
    Action {
        id: ActionId::Copy,
        label: "Copy",
        shortcut: Some(Shortcut::ctrl('c', "Ctrl+C")),
        tip: "Copy the selection to the clipboard",
        handler: copy,
    },
    Action {
        id: ActionId::Paste,
        label: "Paste",
        shortcut: Some(Shortcut::ctrl('v', "Ctrl+V")),
        tip: "Paste from the clipboard",
        handler: paste,
    },
    Action {
        id: ActionId::SelectAll,
        label: "Select All",
        shortcut: Some(Shortcut::ctrl('a', "Ctrl+A")),
        tip: "Select the whole document",
        handler: select_all,
    },
    Action {
        id: ActionId::FindReplace,
        label: "Find/Replace",
        shortcut: Some(Shortcut::ctrl('f', "Ctrl+F")),
        tip: "Search and replace text",
        handler: App::open_find_replace,
    },
    Action {
        id: ActionId::About,
        label: "About",
        shortcut: Some(Shortcut::key(KeyCode::F(1), "F1")),
        tip: "Show information about Mint",
        handler: App::show_about,
    },
];

fn undo(app: &mut App) -> Result<()> {
    app.run_editor_command(EditorCommand::Undo)
}

fn redo(app: &mut App) -> Result<()> {
    app.run_editor_command(EditorCommand::Redo)
}

fn cut(app: &mut App) -> Result<()> {
    app.run_editor_command(EditorCommand::Cut)
}

fn copy(app: &mut App) -> Result<()> {
    app.run_editor_command(EditorCommand::Copy)
}

fn paste(app: &mut App) -> Result<()> {
    app.run_editor_command(EditorCommand::Paste)
}

fn select_all(app: &mut App) -> Result<()> {
    app.run_editor_command(EditorCommand::SelectAll)
}

pub fn action_table() -> &'static [Action] {
    &ACTIONS
}

pub fn action(id: ActionId) -> &'static Action {
    &ACTIONS[id as usize]
}

/// Action bound to `key`, if any
pub fn find_by_key(key: &KeyEvent) -> Option<&'static Action> {
    ACTIONS
        .iter()
        .find(|action| action.shortcut.is_some_and(|s| s.matches(key)))
}

/// Top-level menu with its items
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub title: &'static str,
    pub items: &'static [ActionId],
}

pub const MENUS: [Menu; 3] = [
    Menu {
        title: "File",
        items: &[
            ActionId::New,
            ActionId::Open,
            ActionId::Save,
            ActionId::SaveAs,
            ActionId::Exit,
        ],
    },
    Menu {
        title: "Edit",
        items: &[
            ActionId::Undo,
            ActionId::Redo,
            ActionId::Cut,
            ActionId::Copy,
            ActionId::Paste,
            ActionId::SelectAll,
            ActionId::FindReplace,
        ],
    },
    Menu {
        title: "Help",
        items: &[ActionId::About],
    },
];

pub const TOOLBAR: [ActionId; 3] = [ActionId::New, ActionId::Open, ActionId::SaveAs];

pub fn menu_titles() -> [&'static str; MENUS.len()] {
    MENUS.map(|menu| menu.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_table_is_in_declaration_order() {
        let ids = [
            ActionId::New,
            ActionId::Open,
            ActionId::Save,
            ActionId::SaveAs,
            ActionId::Exit,
            ActionId::Undo,
            ActionId::Redo,
            ActionId::Cut,
            ActionId::Copy,
            ActionId::Paste,
            ActionId::SelectAll,
            ActionId::FindReplace,
            ActionId::About,
        ];
        for id in ids {
            assert_eq!(action(id).id, id);
        }
        assert_eq!(action_table().len(), ids.len());
    }

    #[test]
    fn test_shortcuts_are_unique() {
        let labels: HashSet<_> = action_table()
            .iter()
            .filter_map(|a| a.shortcut.map(|s| s.label))
            .collect();
        assert_eq!(labels.len(), action_table().len());
    }

    #[test]
    fn test_file_tips() {
        assert_eq!(action(ActionId::New).tip, "Create a new file");
        assert_eq!(action(ActionId::SaveAs).tip, "Save under new name/extension");
        assert_eq!(action(ActionId::Exit).tip, "Exit application");
    }

    #[test]
    fn test_save_and_save_as_are_distinguished() {
        let save = key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let save_as = key(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        let save_as_upper = key(KeyCode::Char('S'), KeyModifiers::CONTROL);

        assert_eq!(find_by_key(&save).map(|a| a.id), Some(ActionId::Save));
        assert_eq!(find_by_key(&save_as).map(|a| a.id), Some(ActionId::SaveAs));
        assert_eq!(
            find_by_key(&save_as_upper).map(|a| a.id),
            Some(ActionId::SaveAs)
        );
    }

    #[test]
    fn test_plain_keys_are_not_actions() {
        assert!(find_by_key(&key(KeyCode::Char('n'), KeyModifiers::NONE)).is_none());
        assert!(find_by_key(&key(KeyCode::Char('q'), KeyModifiers::ALT)).is_none());
        assert_eq!(
            find_by_key(&key(KeyCode::F(1), KeyModifiers::NONE)).map(|a| a.id),
            Some(ActionId::About)
        );
    }

    #[test]
    fn test_menus_cover_every_action() {
        let in_menus: HashSet<_> = MENUS.iter().flat_map(|m| m.items.iter()).collect();
        for action in action_table() {
            assert!(in_menus.contains(&action.id), "{:?} missing", action.id);
        }
        assert_eq!(menu_titles(), ["File", "Edit", "Help"]);
    }
}
