//! Main keyboard event handling for the application.
//!
//! Dispatches key events to modals, the menu, the action table or the editor.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use mint_logger as logger;

use super::menu_actions::menu_by_accelerator;
use super::App;
use crate::actions::{self, ActionId};

impl App {
    /// Handle keyboard event
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        logger::debug(format!(
            "Key event: code={:?}, modifiers={:?}",
            key.code, key.modifiers
        ));

        // If modal window is open, handle it
        if self.state.has_modal() {
            return self.handle_modal_key(key);
        }

        // If menu is open, handle menu navigation
        if self.state.ui.menu_open {
            return self.handle_menu_key(key);
        }

        if key.code == KeyCode::F(10) {
            self.state.open_menu(Some(0));
            return Ok(());
        }

        // Alt+F, Alt+E, Alt+H open a menu directly
        if let (KeyCode::Char(ch), KeyModifiers::ALT) = (key.code, key.modifiers) {
            if let Some(index) = menu_by_accelerator(ch) {
                self.state.open_menu(Some(index));
                return Ok(());
            }
        }

        if let Some(action) = actions::find_by_key(&key) {
            return self.execute_action(action.id);
        }

        match self.editor.handle_key(key) {
            Ok(true) => self.collect_editor_status(),
            Ok(false) => {}
            Err(e) => {
                logger::error(format!("Editor command failed: {:#}", e));
                self.state.set_error(format!("Error: {:#}", e));
            }
        }
        Ok(())
    }

    /// Run an action from the dispatch table.
    ///
    /// Handler failures end up in a warning dialog, never in the main loop.
    pub fn execute_action(&mut self, id: ActionId) -> Result<()> {
        let action = actions::action(id);
        logger::debug(format!("Action: {}", action.label));

        if let Err(e) = (action.handler)(self) {
            self.show_warning(action.label, format!("{:#}", e));
        }
        Ok(())
    }
}
