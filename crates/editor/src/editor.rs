use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};
use std::path::{Path, PathBuf};

use mint_buffer::{Cursor, Range, Selection, TextBuffer, Viewport};
use mint_text_search::{SearchDirection, SearchOptions};
use mint_theme::Theme;

use crate::{config::EditorConfig, keyboard::EditorCommand, rendering, SearchTarget};

/// Editor widget: a document plus caret, selection and scroll state
#[derive(Debug)]
pub struct Editor {
    /// Editor mode configuration
    config: EditorConfig,
    /// Text buffer with Rope
    buffer: TextBuffer,
    /// Caret as a char offset
    caret: usize,
    /// Text selection (if any); its active end follows the caret
    selection: Option<Selection>,
    /// Column kept across vertical moves over shorter lines
    preferred_column: Option<usize>,
    /// Viewport for virtual scrolling
    viewport: Viewport,
    /// Status message to display to user
    status_message: Option<String>,
}

impl Editor {
    /// Create new empty editor with default configuration
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create new empty editor with specified configuration
    pub fn with_config(config: EditorConfig) -> Self {
        Self::with_buffer(TextBuffer::new(), config)
    }

    /// Untitled editor holding `text`
    pub fn from_text(text: &str, config: EditorConfig) -> Self {
        Self::with_buffer(TextBuffer::from_text(text), config)
    }

    /// Open file in editor
    pub fn open_file(path: &Path, config: EditorConfig) -> Result<Self> {
        let buffer = TextBuffer::from_file(path)?;
        mint_logger::info(format!(
            "Opened {} ({} lines)",
            path.display(),
            buffer.line_count()
        ));
        Ok(Self::with_buffer(buffer, config))
    }

    fn with_buffer(buffer: TextBuffer, config: EditorConfig) -> Self {
        Self {
            buffer: buffer.with_history_limit(config.history_size),
            config,
            caret: 0,
            selection: None,
            preferred_column: None,
            viewport: Viewport::default(),
            status_message: None,
        }
    }

    /// Save to the current path
    pub fn save(&mut self) -> Result<()> {
        self.buffer.save()?;
        if let Some(path) = self.buffer.file_path() {
            mint_logger::info(format!("Saved {}", path.display()));
        }
        Ok(())
    }

    /// Save under a new path; the editor keeps that path afterwards
    pub fn save_as(&mut self, path: PathBuf) -> Result<()> {
        self.buffer.save_to(&path)?;
        mint_logger::info(format!("Saved as {}", path.display()));
        Ok(())
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.buffer.file_path()
    }

    pub fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Caret as a char offset
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Selected range, or an empty range at the caret
    pub fn selection(&self) -> Range {
        match self.selection {
            Some(selection) => selection.range(),
            None => Range::caret(self.caret),
        }
    }

    pub fn has_selection(&self) -> bool {
        !self.selection().is_empty()
    }

    /// Select `range` with the caret at its end.
    /// An empty range just moves the caret.
    pub fn set_selection(&mut self, range: Range) {
        let len = self.buffer.len_chars();
        let range = Range::new(range.start.min(len), range.end.min(len));
        self.selection = (!range.is_empty()).then(|| Selection::from_range(range));
        self.caret = range.end;
        self.preferred_column = None;
        self.buffer.break_undo_merge();
    }

    /// Selected text, None when nothing is selected
    pub fn selected_text(&self) -> Option<String> {
        let range = self.selection();
        (!range.is_empty()).then(|| self.buffer.slice(range))
    }

    /// Caret line and column (0-based, column in chars)
    pub fn cursor_position(&self) -> Cursor {
        self.buffer.offset_to_cursor(self.caret)
    }

    /// Position indicator text, 1-based
    pub fn position_label(&self) -> String {
        let cursor = self.cursor_position();
        format!("Line: {}, Column: {}", cursor.line + 1, cursor.column + 1)
    }

    /// Take the pending status message (clipboard feedback)
    pub fn take_status_message(&mut self) -> Option<String> {
        self.status_message.take()
    }

    /// Handle a key press. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        let command =
            EditorCommand::from_key_event(key, self.config.read_only, self.has_selection());
        if command == EditorCommand::None {
            return Ok(false);
        }
        command.execute(self)?;
        Ok(true)
    }

    /// Render the document into `area`, scrolling so the caret stays visible
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.viewport
            .resize(area.width as usize, area.height as usize);

        let cursor = self.cursor_position();
        let line = self.buffer.line(cursor.line).unwrap_or_default();
        let display = Cursor::at(
            cursor.line,
            rendering::display_column(&line, cursor.column, self.config.tab_size),
        );
        self.viewport
            .ensure_cursor_visible(&display, self.buffer.line_count());

        rendering::render_editor_content(
            buf,
            area,
            &self.buffer,
            &self.viewport,
            display,
            self.selection(),
            self.config.tab_size,
            theme,
        );
    }

    // === Navigation ===

    /// Clear selection, then move
    pub(crate) fn navigate<F>(&mut self, movement_fn: F)
    where
        F: FnOnce(&mut Self),
    {
        self.selection = None;
        movement_fn(self);
        self.buffer.break_undo_merge();
    }

    /// Start or extend the selection, then move
    pub(crate) fn navigate_with_selection<F>(&mut self, movement_fn: F)
    where
        F: FnOnce(&mut Self),
    {
        let anchor = self.selection.map_or(self.caret, |s| s.anchor);
        movement_fn(self);
        let selection = Selection::new(anchor, self.caret);
        self.selection = (!selection.is_empty()).then_some(selection);
        self.buffer.break_undo_merge();
    }

    pub(crate) fn move_cursor_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
        self.preferred_column = None;
    }

    pub(crate) fn move_cursor_right(&mut self) {
        self.caret = (self.caret + 1).min(self.buffer.len_chars());
        self.preferred_column = None;
    }

    pub(crate) fn move_cursor_up(&mut self) {
        let cursor = self.cursor_position();
        if cursor.line == 0 {
            self.caret = 0;
            self.preferred_column = None;
            return;
        }
        self.move_to_line(cursor.line - 1, cursor.column);
    }

    pub(crate) fn move_cursor_down(&mut self) {
        let cursor = self.cursor_position();
        if cursor.line + 1 >= self.buffer.line_count() {
            self.caret = self.buffer.len_chars();
            self.preferred_column = None;
            return;
        }
        self.move_to_line(cursor.line + 1, cursor.column);
    }

    pub(crate) fn move_to_line_start(&mut self) {
        let line = self.cursor_position().line;
        self.caret = self.buffer.line_start(line);
        self.preferred_column = None;
    }

    pub(crate) fn move_to_line_end(&mut self) {
        let line = self.cursor_position().line;
        self.caret = self.buffer.line_start(line) + self.buffer.line_len(line);
        self.preferred_column = None;
    }

    pub(crate) fn page_up(&mut self) {
        let cursor = self.cursor_position();
        let page = self.viewport.height.max(1);
        self.move_to_line(cursor.line.saturating_sub(page), cursor.column);
    }

    pub(crate) fn page_down(&mut self) {
        let cursor = self.cursor_position();
        let page = self.viewport.height.max(1);
        let last_line = self.buffer.line_count().saturating_sub(1);
        self.move_to_line((cursor.line + page).min(last_line), cursor.column);
    }

    pub(crate) fn move_to_document_start(&mut self) {
        self.caret = 0;
        self.preferred_column = None;
        self.viewport.scroll_to_top();
    }

    pub(crate) fn move_to_document_end(&mut self) {
        self.caret = self.buffer.len_chars();
        self.preferred_column = None;
    }

    /// Vertical move keeping the preferred column
    fn move_to_line(&mut self, line: usize, current_column: usize) {
        let column = *self.preferred_column.get_or_insert(current_column);
        self.caret = self.buffer.cursor_to_offset(&Cursor::at(line, column));
    }

    // === Editing ===

    /// Replace the selection (or insert at the caret) with `text`.
    /// Replacing a selection is a single undo step.
    fn replace_selection(&mut self, text: &str) {
        let range = self.selection();
        self.caret = if range.is_empty() {
            self.buffer.insert(self.caret, text)
        } else {
            self.buffer.replace_range(range, text)
        };
        self.selection = None;
        self.preferred_column = None;
    }

    /// Delete the selection. Returns false if nothing was selected.
    fn delete_selection(&mut self) -> bool {
        let range = self.selection();
        if range.is_empty() {
            self.selection = None;
            return false;
        }
        self.buffer.remove(range);
        self.caret = range.start;
        self.selection = None;
        self.preferred_column = None;
        true
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut tmp = [0u8; 4];
        self.replace_selection(ch.encode_utf8(&mut tmp));
    }

    pub fn insert_newline(&mut self) {
        self.replace_selection("\n");
    }

    /// Insert spaces up to the next tab stop
    pub fn insert_tab(&mut self) {
        if self.has_selection() {
            self.delete_selection();
        }
        let tab_size = self.config.tab_size.max(1);
        let column = self.cursor_position().column;
        let spaces = " ".repeat(tab_size - column % tab_size);
        self.replace_selection(&spaces);
    }

    pub fn backspace(&mut self) {
        if self.delete_selection() || self.caret == 0 {
            return;
        }
        self.buffer.remove(Range::new(self.caret - 1, self.caret));
        self.caret -= 1;
        self.preferred_column = None;
    }

    pub fn delete(&mut self) {
        if self.delete_selection() || self.caret >= self.buffer.len_chars() {
            return;
        }
        self.buffer.remove(Range::new(self.caret, self.caret + 1));
        self.preferred_column = None;
    }

    pub fn select_all(&mut self) {
        self.set_selection(Range::new(0, self.buffer.len_chars()));
    }

    pub fn undo(&mut self) {
        if let Some(caret) = self.buffer.undo() {
            self.caret = caret.min(self.buffer.len_chars());
            self.selection = None;
            self.preferred_column = None;
        }
    }

    pub fn redo(&mut self) {
        if let Some(caret) = self.buffer.redo() {
            self.caret = caret.min(self.buffer.len_chars());
            self.selection = None;
            self.preferred_column = None;
        }
    }

    // === Clipboard ===

    pub fn copy(&mut self) {
        let Some(text) = self.selected_text() else {
            return;
        };
        match mint_clipboard::copy(&text) {
            Ok(()) => {
                self.status_message = Some(format!("Copied {} chars", text.chars().count()));
            }
            Err(e) => {
                mint_logger::warn(format!("Copy failed: {}", e));
                self.status_message = Some(format!("Copy failed: {}", e));
            }
        }
    }

    pub fn cut(&mut self) {
        let Some(text) = self.selected_text() else {
            return;
        };
        match mint_clipboard::cut(&text) {
            Ok(()) => {
                self.delete_selection();
                self.status_message = Some(format!("Cut {} chars", text.chars().count()));
            }
            Err(e) => {
                mint_logger::warn(format!("Cut failed: {}", e));
                self.status_message = Some(format!("Cut failed: {}", e));
            }
        }
    }

    pub fn paste(&mut self) {
        match mint_clipboard::paste() {
            Some(text) => self.insert_text(&text.replace("\r\n", "\n")),
            None => self.status_message = Some("Clipboard is empty".to_string()),
        }
    }

    /// Insert text at the caret, replacing the selection
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.buffer.break_undo_merge();
        self.replace_selection(text);
        self.buffer.break_undo_merge();
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchTarget for Editor {
    fn find(
        &self,
        pattern: &str,
        from: usize,
        direction: SearchDirection,
        options: &SearchOptions,
    ) -> Option<Range> {
        self.buffer.find(pattern, from, direction, options)
    }

    fn find_all(&self, pattern: &str, options: &SearchOptions) -> Vec<Range> {
        self.buffer.find_all(pattern, options)
    }

    fn replace_range(&mut self, range: Range, text: &str) -> usize {
        self.caret = self.buffer.replace_range(range, text);
        self.selection = None;
        self.preferred_column = None;
        self.caret
    }

    fn selection(&self) -> Range {
        Editor::selection(self)
    }

    fn set_selection(&mut self, range: Range) {
        Editor::set_selection(self, range);
    }

    fn selected_text(&self) -> String {
        Editor::selected_text(self).unwrap_or_default()
    }

    fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    fn begin_edit_group(&mut self) {
        self.buffer.begin_transaction();
    }

    fn end_edit_group(&mut self) {
        self.buffer.commit_transaction();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn editor(text: &str) -> Editor {
        Editor::from_text(text, EditorConfig::default())
    }

    fn press(editor: &mut Editor, code: KeyCode, modifiers: KeyModifiers) {
        let _ = editor.handle_key(KeyEvent::new(code, modifiers));
    }

    fn type_str(editor: &mut Editor, text: &str) {
        for ch in text.chars() {
            editor.insert_char(ch);
        }
    }

    #[test]
    fn test_typing_and_position() {
        let mut ed = editor("");
        type_str(&mut ed, "ab");
        ed.insert_newline();
        type_str(&mut ed, "c");

        assert_eq!(ed.text(), "ab\nc");
        assert_eq!(ed.cursor_position(), Cursor::at(1, 1));
        assert_eq!(ed.position_label(), "Line: 2, Column: 2");
        assert!(ed.is_modified());
    }

    #[test]
    fn test_new_editor_position_label() {
        assert_eq!(Editor::new().position_label(), "Line: 1, Column: 1");
    }

    #[test]
    fn test_typing_replaces_selection() {
        let mut ed = editor("hello world");
        ed.set_selection(Range::new(0, 5));
        ed.insert_char('J');

        assert_eq!(ed.text(), "J world");
        assert_eq!(ed.caret(), 1);
        assert!(!ed.has_selection());

        // Replacement undoes in one step
        ed.undo();
        assert_eq!(ed.text(), "hello world");
    }

    #[test]
    fn test_typing_merges_into_one_undo_step() {
        let mut ed = editor("");
        type_str(&mut ed, "abc");
        ed.undo();
        assert_eq!(ed.text(), "");
        ed.redo();
        assert_eq!(ed.text(), "abc");
        assert_eq!(ed.caret(), 3);
    }

    #[test]
    fn test_cursor_jump_breaks_merge() {
        let mut ed = editor("");
        type_str(&mut ed, "ab");
        press(&mut ed, KeyCode::Left, KeyModifiers::NONE);
        press(&mut ed, KeyCode::Right, KeyModifiers::NONE);
        type_str(&mut ed, "cd");

        ed.undo();
        assert_eq!(ed.text(), "ab");
    }

    #[test]
    fn test_undo_to_saved_state_clears_modified() {
        let mut ed = editor("x");
        ed.insert_char('y');
        assert!(ed.is_modified());
        ed.undo();
        assert!(!ed.is_modified());
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut ed = editor("abc");
        ed.set_selection(Range::caret(2));
        ed.backspace();
        assert_eq!(ed.text(), "ac");
        assert_eq!(ed.caret(), 1);

        ed.delete();
        assert_eq!(ed.text(), "a");

        // No-ops at the boundaries
        ed.delete();
        ed.set_selection(Range::caret(0));
        ed.backspace();
        assert_eq!(ed.text(), "a");
    }

    #[test]
    fn test_backspace_deletes_selection() {
        let mut ed = editor("one two");
        ed.set_selection(Range::new(3, 7));
        ed.backspace();
        assert_eq!(ed.text(), "one");
        assert_eq!(ed.caret(), 3);
    }

    #[test]
    fn test_tab_to_next_stop() {
        let mut ed = editor("ab");
        ed.set_selection(Range::caret(2));
        ed.insert_tab();
        assert_eq!(ed.text(), "ab  ");
        ed.insert_tab();
        assert_eq!(ed.text(), "ab      ");
    }

    #[test]
    fn test_vertical_motion_keeps_column() {
        let mut ed = editor("long line\nab\nanother line");
        ed.set_selection(Range::caret(7));
        press(&mut ed, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(ed.cursor_position(), Cursor::at(1, 2));
        press(&mut ed, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(ed.cursor_position(), Cursor::at(2, 7));
    }

    #[test]
    fn test_up_on_first_line_goes_to_start() {
        let mut ed = editor("abc\ndef");
        ed.set_selection(Range::caret(2));
        press(&mut ed, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(ed.caret(), 0);
    }

    #[test]
    fn test_shift_selection() {
        let mut ed = editor("hello\nworld");
        press(&mut ed, KeyCode::End, KeyModifiers::SHIFT);
        assert_eq!(ed.selected_text().as_deref(), Some("hello"));

        press(&mut ed, KeyCode::Down, KeyModifiers::SHIFT);
        assert_eq!(ed.selected_text().as_deref(), Some("hello\nworld"));

        // Plain motion clears the selection
        press(&mut ed, KeyCode::Left, KeyModifiers::NONE);
        assert!(!ed.has_selection());
    }

    #[test]
    fn test_select_all() {
        let mut ed = editor("a\nb");
        ed.select_all();
        assert_eq!(ed.selected_text().as_deref(), Some("a\nb"));
        assert_eq!(ed.caret(), 3);
    }

    #[test]
    fn test_insert_text_replaces_selection() {
        let mut ed = editor("cat dog");
        ed.set_selection(Range::new(4, 7));
        ed.insert_text("bird\nfish");
        assert_eq!(ed.text(), "cat bird\nfish");
        assert_eq!(ed.cursor_position(), Cursor::at(1, 4));
    }

    #[test]
    fn test_read_only_ignores_typing() {
        let config = EditorConfig {
            read_only: true,
            ..EditorConfig::default()
        };
        let mut ed = Editor::from_text("abc", config);
        let consumed = ed
            .handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE))
            .unwrap();
        assert!(!consumed);
        assert_eq!(ed.text(), "abc");
    }

    #[test]
    fn test_open_and_save_as() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "first line\nsecond").unwrap();

        let mut ed = Editor::open_file(file.path(), EditorConfig::default()).unwrap();
        assert_eq!(ed.text(), "first line\nsecond");
        assert_eq!(ed.file_path(), Some(file.path()));

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("copy.txt");
        ed.insert_char('!');
        ed.save_as(target.clone()).unwrap();

        assert!(!ed.is_modified());
        assert_eq!(ed.file_path(), Some(target.as_path()));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "!first line\nsecond");
    }

    #[test]
    fn test_save_untitled_fails() {
        let mut ed = editor("text");
        assert!(ed.save().is_err());
    }

    #[test]
    fn test_render_shows_text() {
        let mut ed = editor("hello\nworld");
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        ed.render(area, &mut buf, Theme::get_by_name("default"));

        let row: String = (0..5).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "world");
    }
}
