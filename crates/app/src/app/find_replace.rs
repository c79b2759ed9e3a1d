//! Bridges the Search & Replace dialog to the find/replace controller.

use anyhow::Result;

use mint_editor::{FindReplace, Notice, Range};
use mint_logger as logger;
use mint_modal::{FindReplaceAction, FindReplaceModal, FindReplaceRequest};

use super::App;
use crate::state::{ActiveModal, SearchMemory};

impl App {
    /// Open the dialog with the last search, or the selected text as pattern
    pub(crate) fn open_find_replace(&mut self) -> Result<()> {
        let mut modal = match &self.state.last_search {
            Some(search) => {
                FindReplaceModal::new().with_state(&search.find, &search.replace, search.options)
            }
            None => FindReplaceModal::new(),
        };

        if let Some(selected) = self
            .editor
            .selected_text()
            .filter(|text| !text.contains('\n'))
        {
            modal = modal.with_find_text(selected);
        }

        self.state
            .open_modal(ActiveModal::FindReplace(Box::new(modal)));
        Ok(())
    }

    /// Run one dialog request against the editor; the dialog stays open
    pub(super) fn apply_find_replace(&mut self, request: FindReplaceRequest) {
        let controller = FindReplace::new(request.options);
        let find = request.find.as_str();
        let replace = request.replace.as_str();
        let mut notices: Vec<Notice> = Vec::new();

        match request.action {
            // An emptied Find field leaves the selection alone
            FindReplaceAction::Search if find.is_empty() => {}
            FindReplaceAction::Search => {
                // Live search: re-match from where the current match starts
                let start = self.editor.selection().start;
                self.editor.set_selection(Range::caret(start));
                controller.find_next(&mut self.editor, find, &mut notices);
            }
            FindReplaceAction::Next => {
                controller.find_next(&mut self.editor, find, &mut notices);
            }
            FindReplaceAction::Previous => {
                controller.find_previous(&mut self.editor, find, &mut notices);
            }
            FindReplaceAction::Replace => {
                controller.replace_one(&mut self.editor, find, replace, &mut notices);
            }
            FindReplaceAction::ReplaceAll => {
                let count = controller.replace_all(&mut self.editor, find, replace, &mut notices);
                logger::info(format!("Replaced {} occurrence(s) of {:?}", count, find));
            }
        }

        if let Some(ActiveModal::FindReplace(modal)) = self.state.get_active_modal_mut() {
            match notices.last() {
                Some(notice @ Notice::NotFound { .. }) => modal.set_warning(notice.message()),
                Some(notice) => modal.set_info(notice.message()),
                None => modal.clear_feedback(),
            }
        }

        self.state.last_search = Some(SearchMemory {
            find: request.find,
            replace: request.replace,
            options: request.options,
        });
    }
}
