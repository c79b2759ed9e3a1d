//! Modal window handling for the application.

use anyhow::Result;
use crossterm::event::KeyEvent;

use mint_modal::{FindReplaceRequest, Modal, ModalResult, SaveChoice};

use super::App;
use crate::state::{ActiveModal, InputPurpose};

/// Result of a modal, detached from the modal so the app can act on it
enum ModalOutcome {
    FindReplace(ModalResult<FindReplaceRequest>),
    SaveChanges(ModalResult<SaveChoice>),
    Input(ModalResult<String>, InputPurpose),
    Info,
}

impl App {
    /// Handle keyboard event in modal window
    pub(super) fn handle_modal_key(&mut self, key: KeyEvent) -> Result<()> {
        let outcome = match self.state.get_active_modal_mut() {
            Some(ActiveModal::FindReplace(m)) => m.handle_key(key)?.map(ModalOutcome::FindReplace),
            Some(ActiveModal::SaveChanges(m)) => m.handle_key(key)?.map(ModalOutcome::SaveChanges),
            Some(ActiveModal::Input(m, purpose)) => {
                let purpose = *purpose;
                m.handle_key(key)?
                    .map(|result| ModalOutcome::Input(result, purpose))
            }
            Some(ActiveModal::Info(m)) => m.handle_key(key)?.map(|_| ModalOutcome::Info),
            None => None,
        };

        let Some(outcome) = outcome else {
            return Ok(());
        };

        match outcome {
            // The search dialog stays open until cancelled
            ModalOutcome::FindReplace(ModalResult::Confirmed(request)) => {
                self.apply_find_replace(request);
            }
            ModalOutcome::FindReplace(ModalResult::Cancelled) => {
                self.state.close_modal();
            }
            ModalOutcome::SaveChanges(result) => {
                self.state.close_modal();
                self.handle_save_changes(result)?;
            }
            ModalOutcome::Input(result, purpose) => {
                self.state.close_modal();
                self.handle_path_input(result, purpose)?;
            }
            ModalOutcome::Info => {
                self.state.close_modal();
            }
        }
        Ok(())
    }
}
