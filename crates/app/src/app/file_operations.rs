//! New, open, save and exit, including the unsaved-changes prompt.

use std::path::{Path, PathBuf};

use anyhow::Result;

use mint_editor::Editor;
use mint_logger as logger;
use mint_modal::{InputModal, ModalResult, SaveChangesModal, SaveChoice};

use super::App;
use crate::state::{ActiveModal, InputPurpose, PendingAction};

/// Expand a leading `~` to the home directory
fn expand_path(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

impl App {
    pub(crate) fn request_new(&mut self) -> Result<()> {
        self.confirm_discard(PendingAction::New)
    }

    pub(crate) fn request_open(&mut self) -> Result<()> {
        self.confirm_discard(PendingAction::Open)
    }

    pub(crate) fn request_exit(&mut self) -> Result<()> {
        self.confirm_discard(PendingAction::Exit)
    }

    /// Save to the current path, or ask for one when untitled
    pub(crate) fn save_document(&mut self) -> Result<()> {
        if self.editor.file_path().is_none() {
            self.open_save_as_dialog();
        } else {
            self.save_current();
        }
        Ok(())
    }

    pub(crate) fn request_save_as(&mut self) -> Result<()> {
        self.open_save_as_dialog();
        Ok(())
    }

    /// Ask about unsaved changes before `action` throws the document away
    fn confirm_discard(&mut self, action: PendingAction) -> Result<()> {
        if self.editor.is_modified() {
            logger::debug(format!("{:?} waits for the unsaved changes prompt", action));
            self.state.set_pending_action(
                action,
                ActiveModal::SaveChanges(Box::new(SaveChangesModal::new())),
            );
            Ok(())
        } else {
            self.continue_action(action)
        }
    }

    fn continue_action(&mut self, action: PendingAction) -> Result<()> {
        match action {
            PendingAction::New => {
                self.editor = Editor::with_config(self.state.editor_config());
                self.state.set_info("New document");
                logger::info("New document");
            }
            PendingAction::Open => {
                let modal = InputModal::new("Open", "File path:");
                self.state
                    .open_modal(ActiveModal::Input(Box::new(modal), InputPurpose::Open));
            }
            PendingAction::Exit => {
                self.state.set_info("Closing ...");
                self.state.quit();
            }
        }
        Ok(())
    }

    /// Answer of the unsaved changes prompt
    pub(super) fn handle_save_changes(&mut self, result: ModalResult<SaveChoice>) -> Result<()> {
        let Some(action) = self.state.take_pending_action() else {
            return Ok(());
        };

        match result {
            ModalResult::Confirmed(SaveChoice::Save) => {
                if self.editor.file_path().is_none() {
                    // Continues once Save As has written the file
                    self.state.pending_action = Some(action);
                    self.open_save_as_dialog();
                } else if self.save_current() {
                    self.continue_action(action)?;
                }
            }
            ModalResult::Confirmed(SaveChoice::Discard) => {
                logger::info("Unsaved changes discarded");
                self.continue_action(action)?;
            }
            ModalResult::Cancelled => {
                logger::debug(format!("{:?} cancelled", action));
            }
        }
        Ok(())
    }

    /// Result of the Open or Save As path dialog
    pub(super) fn handle_path_input(
        &mut self,
        result: ModalResult<String>,
        purpose: InputPurpose,
    ) -> Result<()> {
        match (result, purpose) {
            (ModalResult::Confirmed(path), InputPurpose::Open) => {
                self.open_path(&expand_path(&path));
                Ok(())
            }
            (ModalResult::Confirmed(path), InputPurpose::SaveAs) => {
                self.save_to_path(expand_path(&path))
            }
            (ModalResult::Cancelled, InputPurpose::SaveAs) => {
                // Abandons an action waiting on Save As
                self.state.take_pending_action();
                Ok(())
            }
            (ModalResult::Cancelled, InputPurpose::Open) => Ok(()),
        }
    }

    fn open_save_as_dialog(&mut self) {
        let current = self
            .editor
            .file_path()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        let modal = InputModal::with_default("Save As", "File path:", current);
        self.state
            .open_modal(ActiveModal::Input(Box::new(modal), InputPurpose::SaveAs));
    }

    /// Replace the document with the file at `path`; on failure nothing changes
    fn open_path(&mut self, path: &Path) {
        match Editor::open_file(path, self.state.editor_config()) {
            Ok(editor) => {
                self.editor = editor;
                let name = self.editor_state().display_name();
                self.state.set_info(format!("Opened {}", name));
            }
            Err(e) => {
                logger::error(format!("Failed to open {}: {:#}", path.display(), e));
                self.show_warning("Open", format!("Cannot open file:\n{:#}", e));
            }
        }
    }

    /// Save to the current path. Returns false after reporting a failure.
    fn save_current(&mut self) -> bool {
        match self.editor.save() {
            Ok(()) => {
                let name = self.editor_state().display_name();
                self.state.set_info(format!("Saved {}", name));
                true
            }
            Err(e) => {
                logger::error(format!("Failed to save: {:#}", e));
                self.show_warning("Save", format!("Cannot save file:\n{:#}", e));
                false
            }
        }
    }

    fn save_to_path(&mut self, path: PathBuf) -> Result<()> {
        match self.editor.save_as(path) {
            Ok(()) => {
                let name = self.editor_state().display_name();
                self.state.set_info(format!("Saved {}", name));
                match self.state.take_pending_action() {
                    Some(action) => self.continue_action(action),
                    None => Ok(()),
                }
            }
            Err(e) => {
                logger::error(format!("Failed to save: {:#}", e));
                self.state.take_pending_action();
                self.show_warning("Save As", format!("Cannot save file:\n{:#}", e));
                Ok(())
            }
        }
    }
}
