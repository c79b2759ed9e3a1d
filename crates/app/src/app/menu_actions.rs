//! Menu bar navigation.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::App;
use crate::actions::MENUS;

/// Menu whose title starts with `ch`
pub(super) fn menu_by_accelerator(ch: char) -> Option<usize> {
    MENUS.iter().position(|menu| {
        menu.title
            .chars()
            .next()
            .is_some_and(|first| first.eq_ignore_ascii_case(&ch))
    })
}

impl App {
    /// Handle keyboard event in menu
    pub(super) fn handle_menu_key(&mut self, key: KeyEvent) -> Result<()> {
        let item_count = self
            .state
            .ui
            .selected_menu_item
            .and_then(|index| MENUS.get(index))
            .map_or(0, |menu| menu.items.len());

        match key.code {
            KeyCode::Esc | KeyCode::F(10) => {
                self.state.close_menu();
            }
            KeyCode::Left => {
                self.state.prev_menu_item(MENUS.len());
            }
            KeyCode::Right => {
                self.state.next_menu_item(MENUS.len());
            }
            KeyCode::Up => {
                self.state.prev_dropdown_item(item_count);
            }
            KeyCode::Down => {
                self.state.next_dropdown_item(item_count);
            }
            KeyCode::Enter => {
                self.execute_menu_action()?;
            }
            KeyCode::Char(ch) => {
                if let Some(index) = menu_by_accelerator(ch) {
                    self.state.open_menu(Some(index));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Execute action for selected menu item
    fn execute_menu_action(&mut self) -> Result<()> {
        let selected = self.state.selected_action();
        self.state.close_menu();
        match selected {
            Some(id) => self.execute_action(id),
            None => Ok(()),
        }
    }
}
