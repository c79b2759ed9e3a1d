//! Application orchestrator for mint.
//!
//! Owns the editor and the application state, dispatches keys to dialogs,
//! the menu bar, the action table and finally the editor.

pub mod actions;
mod app;
pub mod event;
pub mod state;
pub mod title;

pub use actions::{action, action_table, Action, ActionId, Menu, Shortcut, MENUS, TOOLBAR};
pub use app::App;
pub use state::{ActiveModal, AppState, InputPurpose, PendingAction, UiState};
pub use title::{render_title, EditorState};
