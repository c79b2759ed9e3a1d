//! UI rendering components for mint.
//!
//! Menu bar, drop-down menus, toolbar and status bar. The widgets take
//! plain data so they stay independent of the application state.

pub mod dropdown;
pub mod menu;
pub mod status_bar;
pub mod toolbar;

pub use dropdown::{Dropdown, DropdownItem};
pub use menu::{get_menu_item_x, render_menu, MenuRenderParams};
pub use status_bar::{StatusBar, StatusBarParams};
pub use toolbar::{render_toolbar, ToolbarButton};
