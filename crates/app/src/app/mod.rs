//! Main application module.
//!
//! Contains the App struct and all event handlers.

use std::io;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use crossterm::{execute, terminal::SetTitle};
use ratatui::{backend::Backend, Frame, Terminal};

use mint_config::constants::{EVENT_HANDLER_INTERVAL_MS, LOG_FILE_NAME};
use mint_editor::{Editor, EditorCommand};
use mint_logger as logger;
use mint_modal::InfoModal;

use crate::event::{Event, EventHandler};
use crate::state::{ActiveModal, AppState};
use crate::title::{render_title, EditorState};

mod file_operations;
mod find_replace;
mod key_handler;
mod menu_actions;
mod modal_handler;

/// Main application
pub struct App {
    state: AppState,
    editor: Editor,
    event_handler: EventHandler,
    /// Title last pushed to the terminal window
    terminal_title: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application, loading config and starting the logger
    pub fn new() -> Self {
        let state = AppState::new();

        let log_file_path = state
            .config
            .log_file_path()
            .unwrap_or_else(|_| std::env::temp_dir().join(LOG_FILE_NAME));
        let min_log_level = logger::LogLevel::from_str(&state.config.logging.min_level)
            .unwrap_or(logger::LogLevel::Info);
        logger::init(log_file_path, min_log_level);
        logger::info("Application started");

        Self::with_state(state)
    }

    /// Create application around existing state with an empty document
    pub fn with_state(mut state: AppState) -> Self {
        let editor = Editor::with_config(state.editor_config());
        state.set_info("Ready");

        Self {
            state,
            editor,
            event_handler: EventHandler::new(Duration::from_millis(EVENT_HANDLER_INTERVAL_MS)),
            terminal_title: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Title inputs for the current document
    pub fn editor_state(&self) -> EditorState {
        EditorState::new(self.editor.file_path(), self.editor.is_modified())
    }

    pub fn title(&self) -> String {
        render_title(&self.editor_state())
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        render_fn: impl Fn(&mut Frame<'_>, &mut AppState, &mut Editor),
    ) -> Result<()> {
        let size = terminal.size()?;
        self.state.update_terminal_size(size.width, size.height);

        while !self.state.should_quit {
            match self.event_handler.next()? {
                Event::Key(key) => {
                    self.handle_key_event(key)?;
                    self.state.needs_redraw = true;
                }
                Event::Resize(width, height) => {
                    self.state.update_terminal_size(width, height);
                    self.state.needs_redraw = true;
                }
                Event::Tick => {}
            }

            self.sync_terminal_title()?;

            // Render UI only when needed
            if self.state.needs_redraw {
                terminal.draw(|frame| {
                    render_fn(frame, &mut self.state, &mut self.editor);
                })?;
                self.state.needs_redraw = false;
            }
        }

        logger::info("Application stopped");
        Ok(())
    }

    /// Push the title to the terminal window when it changed
    fn sync_terminal_title(&mut self) -> Result<()> {
        let title = self.title();
        if self.terminal_title.as_deref() != Some(title.as_str()) {
            let mut stdout = io::stdout();
            execute!(stdout, SetTitle(&title))?;
            self.terminal_title = Some(title);
        }
        Ok(())
    }

    /// Run an editing command from the menu or a shortcut
    pub(crate) fn run_editor_command(&mut self, command: EditorCommand) -> Result<()> {
        if command.is_edit() && self.editor.config().read_only {
            return Ok(());
        }
        command.execute(&mut self.editor)?;
        self.collect_editor_status();
        Ok(())
    }

    /// Move editor feedback (clipboard messages) to the status bar
    fn collect_editor_status(&mut self) {
        if let Some(message) = self.editor.take_status_message() {
            self.state.set_info(message);
        }
    }

    pub(crate) fn show_about(&mut self) -> Result<()> {
        let message = format!(
            "Mint {}\nA minimal terminal text editor\nwith find and replace.",
            env!("CARGO_PKG_VERSION")
        );
        self.state
            .open_modal(ActiveModal::Info(Box::new(InfoModal::new("About Mint", message))));
        Ok(())
    }

    /// Report a failure in a warning dialog
    fn show_warning(&mut self, title: &str, message: String) {
        logger::warn(format!("{}: {}", title, message));
        self.state
            .open_modal(ActiveModal::Info(Box::new(InfoModal::warning(title, message))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionId;
    use crate::state::{InputPurpose, PendingAction};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use mint_config::Config;
    use mint_theme::Theme;
    use std::path::Path;

    fn app() -> App {
        let state =
            AppState::with_config_and_theme(Config::default(), Theme::get_by_name("default"));
        App::with_state(state)
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key_event(KeyEvent::new(code, modifiers)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    fn ctrl(app: &mut App, ch: char) {
        press(app, KeyCode::Char(ch), KeyModifiers::CONTROL);
    }

    fn status(app: &App) -> Option<&str> {
        app.state().ui.status_message.as_ref().map(|(m, _)| m.as_str())
    }

    /// Open `path` through the Open dialog
    fn open(app: &mut App, path: &Path) {
        ctrl(app, 'o');
        assert!(matches!(
            app.state().active_modal,
            Some(ActiveModal::Input(_, InputPurpose::Open))
        ));
        type_text(app, &path.display().to_string());
        press(app, KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn test_startup_state() {
        let app = app();
        assert_eq!(status(&app), Some("Ready"));
        assert_eq!(app.title(), "Mint - Untitled");
        assert!(!app.state().has_modal());
    }

    #[test]
    fn test_typing_marks_title_modified() {
        let mut app = app();
        type_text(&mut app, "hi");
        assert_eq!(app.editor().text(), "hi");
        assert_eq!(app.title(), "Mint - Untitled*");
    }

    #[test]
    fn test_new_on_clean_document_needs_no_prompt() {
        let mut app = app();
        ctrl(&mut app, 'n');
        assert!(!app.state().has_modal());
        assert_eq!(status(&app), Some("New document"));
    }

    #[test]
    fn test_new_while_modified_cancel_keeps_buffer_and_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "original").unwrap();

        let mut app = app();
        open(&mut app, &path);
        assert_eq!(app.editor().text(), "original");
        assert_eq!(app.title(), "Mint - notes.txt");

        type_text(&mut app, "x");
        assert!(app.editor().is_modified());

        ctrl(&mut app, 'n');
        assert!(matches!(
            app.state().active_modal,
            Some(ActiveModal::SaveChanges(_))
        ));
        assert_eq!(app.state().pending_action, Some(PendingAction::New));

        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);

        assert!(!app.state().has_modal());
        assert_eq!(app.state().pending_action, None);
        assert_eq!(app.editor().text(), "xoriginal");
        assert_eq!(app.editor().file_path(), Some(path.as_path()));
        assert_eq!(app.title(), "Mint - notes.txt*");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_new_while_modified_discard() {
        let mut app = app();
        type_text(&mut app, "draft");

        ctrl(&mut app, 'n');
        press(&mut app, KeyCode::Char('d'), KeyModifiers::NONE);

        assert!(!app.state().has_modal());
        assert_eq!(app.editor().text(), "");
        assert!(!app.editor().is_modified());
        assert_eq!(status(&app), Some("New document"));
    }

    #[test]
    fn test_save_choice_writes_file_then_continues() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "a").unwrap();

        let mut app = app();
        open(&mut app, &path);
        press(&mut app, KeyCode::End, KeyModifiers::NONE);
        type_text(&mut app, "b");

        ctrl(&mut app, 'q');
        press(&mut app, KeyCode::Char('s'), KeyModifiers::NONE);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ab");
        assert!(app.state().should_quit);
        assert_eq!(status(&app), Some("Closing ..."));
    }

    #[test]
    fn test_save_choice_on_untitled_goes_through_save_as() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.txt");

        let mut app = app();
        type_text(&mut app, "content");
        ctrl(&mut app, 'q');
        press(&mut app, KeyCode::Char('s'), KeyModifiers::NONE);

        assert!(matches!(
            app.state().active_modal,
            Some(ActiveModal::Input(_, InputPurpose::SaveAs))
        ));
        assert!(!app.state().should_quit);

        type_text(&mut app, &path.display().to_string());
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_cancelled_save_as_abandons_pending_action() {
        let mut app = app();
        type_text(&mut app, "content");
        ctrl(&mut app, 'q');
        press(&mut app, KeyCode::Char('s'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);

        assert!(!app.state().has_modal());
        assert_eq!(app.state().pending_action, None);
        assert!(!app.state().should_quit);
        assert_eq!(app.editor().text(), "content");
    }

    #[test]
    fn test_failed_save_aborts_pending_action() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("notes.txt");

        let mut app = app();
        type_text(&mut app, "content");
        ctrl(&mut app, 'n');
        press(&mut app, KeyCode::Char('s'), KeyModifiers::NONE);
        type_text(&mut app, &path.display().to_string());
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert!(matches!(app.state().active_modal, Some(ActiveModal::Info(_))));
        assert_eq!(app.state().pending_action, None);
        assert_eq!(app.editor().text(), "content");
        assert!(app.editor().file_path().is_none());
    }

    #[test]
    fn test_open_failure_leaves_document_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "keep").unwrap();

        let mut app = app();
        open(&mut app, &path);
        open(&mut app, &dir.path().join("nope.txt"));

        assert!(matches!(app.state().active_modal, Some(ActiveModal::Info(_))));
        assert_eq!(app.editor().text(), "keep");
        assert_eq!(app.editor().file_path(), Some(path.as_path()));

        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(!app.state().has_modal());
    }

    #[test]
    fn test_exit_on_clean_document() {
        let mut app = app();
        ctrl(&mut app, 'q');
        assert!(app.state().should_quit);
        assert_eq!(status(&app), Some("Closing ..."));
    }

    #[test]
    fn test_save_untitled_opens_save_as() {
        let mut app = app();
        ctrl(&mut app, 's');
        assert!(matches!(
            app.state().active_modal,
            Some(ActiveModal::Input(_, InputPurpose::SaveAs))
        ));
    }

    #[test]
    fn test_find_replace_dialog_replace_all() {
        let mut app = app();
        type_text(&mut app, "cat dog cat");
        ctrl(&mut app, 'f');
        assert!(matches!(
            app.state().active_modal,
            Some(ActiveModal::FindReplace(_))
        ));

        // Live search selects the first match
        type_text(&mut app, "cat");
        assert_eq!(app.editor().selected_text().as_deref(), Some("cat"));
        assert_eq!(app.editor().selection(), mint_editor::Range::new(0, 3));

        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut app, "fish");
        press(&mut app, KeyCode::Char('a'), KeyModifiers::ALT);

        assert_eq!(app.editor().text(), "fish dog fish");
        assert!(app.state().has_modal());

        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.state().has_modal());
        let search = app.state().last_search.clone().unwrap();
        assert_eq!(search.find, "cat");
        assert_eq!(search.replace, "fish");
    }

    #[test]
    fn test_find_next_from_dialog_wraps() {
        let mut app = app();
        type_text(&mut app, "ab ab");
        ctrl(&mut app, 'f');
        type_text(&mut app, "ab");
        assert_eq!(app.editor().selection(), mint_editor::Range::new(0, 2));

        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.editor().selection(), mint_editor::Range::new(3, 5));

        press(&mut app, KeyCode::F(3), KeyModifiers::NONE);
        assert_eq!(app.editor().selection(), mint_editor::Range::new(0, 2));
    }

    #[test]
    fn test_clearing_find_field_keeps_selection() {
        let mut app = app();
        type_text(&mut app, "cat dog cat");
        ctrl(&mut app, 'f');
        type_text(&mut app, "dog");
        assert_eq!(app.editor().selection(), mint_editor::Range::new(4, 7));

        // Each backspace narrows the match in place
        press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.editor().selection(), mint_editor::Range::new(4, 5));

        press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.editor().selection(), mint_editor::Range::new(4, 5));
        assert_eq!(app.editor().text(), "cat dog cat");
    }

    #[test]
    fn test_menu_dispatches_through_action_table() {
        let mut app = app();
        press(&mut app, KeyCode::F(10), KeyModifiers::NONE);
        assert_eq!(app.state().selected_action(), Some(ActionId::New));

        // Help > About
        press(&mut app, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.state().selected_action(), Some(ActionId::About));
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert!(!app.state().ui.menu_open);
        assert!(matches!(app.state().active_modal, Some(ActiveModal::Info(_))));
    }

    #[test]
    fn test_edit_actions_reach_the_editor() {
        let mut app = app();
        type_text(&mut app, "abc");
        app.execute_action(ActionId::SelectAll).unwrap();
        assert_eq!(app.editor().selected_text().as_deref(), Some("abc"));

        app.execute_action(ActionId::Undo).unwrap();
        assert_eq!(app.editor().text(), "");
        app.execute_action(ActionId::Redo).unwrap();
        assert_eq!(app.editor().text(), "abc");
    }
}
