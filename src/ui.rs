use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use mint_app::{action, actions::menu_titles, render_title, ActiveModal, AppState, EditorState};
use mint_app::{MENUS, TOOLBAR};
use mint_config::constants::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use mint_editor::Editor;
use mint_modal::Modal;
use mint_ui_render::{
    get_menu_item_x, render_menu, render_toolbar, Dropdown, DropdownItem, MenuRenderParams,
    StatusBar, StatusBarParams, ToolbarButton,
};

/// Render the open drop-down and the active modal window
fn render_dropdowns_and_modals(frame: &mut Frame, state: &mut AppState) {
    if state.ui.menu_open {
        if let Some(index) = state.ui.selected_menu_item {
            let items: Vec<DropdownItem> = MENUS[index]
                .items
                .iter()
                .map(|&id| {
                    let action = action(id);
                    DropdownItem::new(action.label, action.shortcut.map_or("", |s| s.label))
                })
                .collect();
            let x = get_menu_item_x(&menu_titles(), index);
            Dropdown::new(&items, state.ui.selected_dropdown_item, x, 1)
                .render(frame.buffer_mut(), state.theme);
        }
    }

    // Copy theme before getting mutable modal reference
    let theme = state.theme;

    if let Some(modal) = state.get_active_modal_mut() {
        let area = frame.area();
        match modal {
            ActiveModal::FindReplace(m) => m.render(area, frame.buffer_mut(), theme),
            ActiveModal::SaveChanges(m) => m.render(area, frame.buffer_mut(), theme),
            ActiveModal::Input(m, _) => m.render(area, frame.buffer_mut(), theme),
            ActiveModal::Info(m) => m.render(area, frame.buffer_mut(), theme),
        }
    }
}

/// Render the main window: menu bar, toolbar, editor and status bar
pub fn render_layout(frame: &mut Frame, state: &mut AppState, editor: &mut Editor) {
    let size = frame.area();

    // Set application background
    let background = Block::default().style(Style::default().bg(state.theme.bg));
    frame.render_widget(background, size);

    if size.width < MIN_TERMINAL_WIDTH || size.height < MIN_TERMINAL_HEIGHT {
        render_too_small(frame, size, state);
        return;
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Menu
            Constraint::Length(1), // Toolbar
            Constraint::Min(0),    // Editor
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    let title = render_title(&EditorState::new(editor.file_path(), editor.is_modified()));
    let menus = menu_titles();
    let menu_params = MenuRenderParams {
        theme: state.theme,
        menus: &menus,
        selected_menu: state.ui.selected_menu_item,
        menu_open: state.ui.menu_open,
        title: &title,
    };
    render_menu(frame, main_chunks[0], &menu_params);

    let buttons: Vec<ToolbarButton> = TOOLBAR
        .iter()
        .map(|&id| {
            let action = action(id);
            ToolbarButton {
                label: action.label,
                shortcut: action.shortcut.map_or("", |s| s.label),
            }
        })
        .collect();
    render_toolbar(frame.buffer_mut(), main_chunks[1], &buttons, state.theme);

    editor.render(main_chunks[2], frame.buffer_mut(), state.theme);

    let position = editor.position_label();
    let params = StatusBarParams {
        theme: state.theme,
        status_message: state.ui.status_message.as_ref(),
        tip: state.selected_action().map(|id| action(id).tip),
        position: &position,
    };
    StatusBar::render(frame.buffer_mut(), main_chunks[3], &params);

    render_dropdowns_and_modals(frame, state);
}

fn render_too_small(frame: &mut Frame, area: Rect, state: &AppState) {
    let message = format!(
        "Terminal too small\nneed at least {}x{}",
        MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
    );
    let y = area.y + area.height.saturating_sub(2) / 2;
    let text_area = Rect::new(area.x, y, area.width, area.height.min(2));
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(state.theme.warning).bg(state.theme.bg))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, text_area);
}
