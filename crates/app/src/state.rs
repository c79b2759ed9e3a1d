//! Application state and types.

use mint_config::Config;
use mint_editor::{EditorConfig, SearchOptions};
use mint_modal::{FindReplaceModal, InfoModal, InputModal, SaveChangesModal};
use mint_theme::Theme;

use crate::actions::{ActionId, MENUS};

/// UI components state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Is the menu bar active
    pub menu_open: bool,
    /// Highlighted top-level menu
    pub selected_menu_item: Option<usize>,
    /// Highlighted item of the open drop-down
    pub selected_dropdown_item: usize,
    /// Status line message; the flag marks errors
    pub status_message: Option<(String, bool)>,
}

/// Terminal dimensions
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalState {
    pub width: u16,
    pub height: u16,
}

/// What a path dialog is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    Open,
    SaveAs,
}

/// Active modal window
#[derive(Debug)]
pub enum ActiveModal {
    FindReplace(Box<FindReplaceModal>),
    SaveChanges(Box<SaveChangesModal>),
    Input(Box<InputModal>, InputPurpose),
    Info(Box<InfoModal>),
}

/// Action waiting for the unsaved-changes prompt to be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    New,
    Open,
    Exit,
}

/// Search dialog fields remembered between openings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchMemory {
    pub find: String,
    pub replace: String,
    pub options: SearchOptions,
}

/// Global application state
#[derive(Debug)]
pub struct AppState {
    /// Should application quit
    pub should_quit: bool,
    /// UI components state
    pub ui: UiState,
    /// Terminal state
    pub terminal: TerminalState,
    /// Active modal window
    pub active_modal: Option<ActiveModal>,
    /// Action pending modal result
    pub pending_action: Option<PendingAction>,
    pub last_search: Option<SearchMemory>,
    /// Current theme
    pub theme: &'static Theme,
    /// Application configuration
    pub config: Config,
    /// Flag indicating UI needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new application state, loading config from file
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: Could not load config: {:#}. Using defaults.", e);
            Config::default()
        });
        let theme = Theme::get_by_name(&config.general.theme);
        Self::with_config_and_theme(config, theme)
    }

    /// Create new application state with given config and theme
    pub fn with_config_and_theme(config: Config, theme: &'static Theme) -> Self {
        Self {
            should_quit: false,
            ui: UiState::default(),
            terminal: TerminalState::default(),
            active_modal: None,
            pending_action: None,
            last_search: None,
            theme,
            config,
            needs_redraw: true,
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Open menu
    pub fn open_menu(&mut self, menu_index: Option<usize>) {
        self.ui.menu_open = true;
        self.ui.selected_menu_item = menu_index;
        self.ui.selected_dropdown_item = 0;
    }

    /// Close menu
    pub fn close_menu(&mut self) {
        self.ui.menu_open = false;
        self.ui.selected_menu_item = None;
        self.ui.selected_dropdown_item = 0;
    }

    /// Toggle menu
    pub fn toggle_menu(&mut self) {
        if self.ui.menu_open {
            self.close_menu();
        } else {
            self.open_menu(Some(0));
        }
    }

    /// Move to next menu item
    pub fn next_menu_item(&mut self, menu_count: usize) {
        if let Some(current) = self.ui.selected_menu_item {
            self.ui.selected_menu_item = Some((current + 1) % menu_count);
            self.ui.selected_dropdown_item = 0;
        }
    }

    /// Move to previous menu item
    pub fn prev_menu_item(&mut self, menu_count: usize) {
        if let Some(current) = self.ui.selected_menu_item {
            self.ui.selected_menu_item = Some(if current == 0 {
                menu_count - 1
            } else {
                current - 1
            });
            self.ui.selected_dropdown_item = 0;
        }
    }

    pub fn next_dropdown_item(&mut self, item_count: usize) {
        if item_count > 0 {
            self.ui.selected_dropdown_item = (self.ui.selected_dropdown_item + 1) % item_count;
        }
    }

    pub fn prev_dropdown_item(&mut self, item_count: usize) {
        if item_count > 0 {
            self.ui.selected_dropdown_item =
                (self.ui.selected_dropdown_item + item_count - 1) % item_count;
        }
    }

    /// Action under the menu highlight
    pub fn selected_action(&self) -> Option<ActionId> {
        if !self.ui.menu_open {
            return None;
        }
        let menu = MENUS.get(self.ui.selected_menu_item?)?;
        menu.items.get(self.ui.selected_dropdown_item).copied()
    }

    /// Update terminal dimensions
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal.width = width;
        self.terminal.height = height;
    }

    /// Open a modal window without a pending action
    pub fn open_modal(&mut self, modal: ActiveModal) {
        self.active_modal = Some(modal);
    }

    /// Close modal window
    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    /// Check if modal window is open
    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    /// Get mutable reference to active modal window
    pub fn get_active_modal_mut(&mut self) -> Option<&mut ActiveModal> {
        self.active_modal.as_mut()
    }

    /// Set pending action and open modal window
    pub fn set_pending_action(&mut self, action: PendingAction, modal: ActiveModal) {
        self.pending_action = Some(action);
        self.active_modal = Some(modal);
    }

    /// Take pending action (take ownership)
    pub fn take_pending_action(&mut self) -> Option<PendingAction> {
        self.pending_action.take()
    }

    /// Set error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.ui.status_message = Some((message.into(), true));
    }

    /// Set informational message
    pub fn set_info(&mut self, message: impl Into<String>) {
        self.ui.status_message = Some((message.into(), false));
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.ui.status_message = None;
    }

    /// Create EditorConfig with settings from global config
    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig::from_settings(&self.config.editor)
    }
}
