use anyhow::{Context, Result};
use ropey::Rope;
use std::path::{Path, PathBuf};

use mint_text_search::{Matcher, SearchDirection, SearchOptions};

use crate::{Action, Cursor, History, LineEnding, Range};

/// Text buffer based on Rope.
///
/// All positions are char offsets. Text is kept with `\n` line breaks in memory;
/// the line ending found on load is restored when saving.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Rope structure for storing text
    rope: Rope,
    /// File path (if exists)
    file_path: Option<PathBuf>,
    /// Modified flag
    modified: bool,
    /// Line ending type (for saving)
    line_ending: LineEnding,
    /// Edit history for undo/redo
    history: History,
    /// Content as of the last load or save
    saved: Rope,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create an untitled buffer holding `text`
    pub fn from_text(text: &str) -> Self {
        let (normalized, line_ending) = normalize_line_endings(text);
        let rope = Rope::from_str(&normalized);
        Self {
            saved: rope.clone(),
            rope,
            file_path: None,
            modified: false,
            line_ending,
            history: History::new(),
        }
    }

    /// Load file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let contents = String::from_utf8_lossy(&bytes);

        let mut buffer = Self::from_text(&contents);
        buffer.file_path = Some(path.to_path_buf());
        Ok(buffer)
    }

    /// Replace the undo history with one bounded to `limit` steps
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = History::with_capacity(limit);
        self
    }

    /// Save file
    pub fn save(&mut self) -> Result<()> {
        match self.file_path.clone() {
            Some(path) => self.save_to(path),
            None => anyhow::bail!("No file path set"),
        }
    }

    /// Save to specified file; the buffer takes that path afterwards
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = self.rope.to_string();
        let contents = match self.line_ending {
            LineEnding::LF => text,
            LineEnding::CRLF => text.replace('\n', "\r\n"),
        };

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        self.file_path = Some(path.to_path_buf());
        self.saved = self.rope.clone();
        self.modified = false;
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// File name without directories, if the buffer has a path
    pub fn file_name(&self) -> Option<String> {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Check if buffer is modified
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Get all text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Get line count (an empty buffer has one line)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get line by index, without its line break
    pub fn line(&self, index: usize) -> Option<String> {
        if index >= self.line_count() {
            return None;
        }
        let mut line = self.rope.line(index).to_string();
        if line.ends_with('\n') {
            line.pop();
        }
        Some(line)
    }

    /// Line length in chars, without the line break
    pub fn line_len(&self, index: usize) -> usize {
        if index >= self.line_count() {
            return 0;
        }
        let line = self.rope.line(index);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Char offset where the line starts
    pub fn line_start(&self, index: usize) -> usize {
        let index = index.min(self.line_count().saturating_sub(1));
        self.rope.line_to_char(index)
    }

    /// Text in the given range
    pub fn slice(&self, range: Range) -> String {
        let range = self.clamp_range(range);
        self.rope.slice(range.start..range.end).to_string()
    }

    /// Insert text at offset. Returns the offset just past the inserted text.
    pub fn insert(&mut self, offset: usize, text: &str) -> usize {
        let offset = offset.min(self.len_chars());
        if text.is_empty() {
            return offset;
        }

        self.rope.insert(offset, text);
        self.modified = true;

        // Record to history
        self.history.push(Action::Insert {
            offset,
            text: text.to_string(),
        });

        offset + text.chars().count()
    }

    /// Remove text in range. Returns the removed text.
    pub fn remove(&mut self, range: Range) -> String {
        let range = self.clamp_range(range);
        if range.is_empty() {
            return String::new();
        }

        let removed = self.rope.slice(range.start..range.end).to_string();
        self.rope.remove(range.start..range.end);
        self.modified = true;

        self.history.push(Action::Delete {
            offset: range.start,
            text: removed.clone(),
        });

        removed
    }

    /// Replace text in range as one undo step.
    /// Returns the offset just past the new text.
    pub fn replace_range(&mut self, range: Range, text: &str) -> usize {
        let range = self.clamp_range(range);
        self.history.begin_group();
        self.remove(range);
        let end = self.insert(range.start, text);
        self.history.end_group();
        end
    }

    /// Search the whole document.
    ///
    /// Forward returns the first match starting at or after `from`;
    /// backward returns the last match starting before `from`.
    pub fn find(
        &self,
        pattern: &str,
        from: usize,
        direction: SearchDirection,
        options: &SearchOptions,
    ) -> Option<Range> {
        let matcher = Matcher::new(pattern, options)?;
        let text = self.rope.to_string();
        let found = match direction {
            SearchDirection::Forward => matcher.find_forward(&text, from),
            SearchDirection::Backward => matcher.find_backward(&text, from),
        };
        found.map(|m| Range::new(m.start, m.end))
    }

    /// Every non-overlapping match, left to right, from one pass over the text
    pub fn find_all(&self, pattern: &str, options: &SearchOptions) -> Vec<Range> {
        let Some(matcher) = Matcher::new(pattern, options) else {
            return Vec::new();
        };
        let text = self.rope.to_string();
        matcher
            .find_all(&text)
            .into_iter()
            .map(|m| Range::new(m.start, m.end))
            .collect()
    }

    /// Start grouping edits into a single undo step
    pub fn begin_transaction(&mut self) {
        self.history.begin_group();
    }

    /// Close the group started with `begin_transaction`
    pub fn commit_transaction(&mut self) {
        self.history.end_group();
    }

    /// Stop merging typed characters into the current undo step (e.g. on cursor jump)
    pub fn break_undo_merge(&mut self) {
        self.history.commit_pending();
    }

    /// Undo last edit. Returns the caret offset after the change.
    pub fn undo(&mut self) -> Option<usize> {
        let action = self.history.undo()?;
        let caret = self.apply(&action);
        self.modified = self.rope != self.saved;
        Some(caret)
    }

    /// Redo undone edit. Returns the caret offset after the change.
    pub fn redo(&mut self) -> Option<usize> {
        let action = self.history.redo()?;
        let caret = self.apply(&action);
        self.modified = self.rope != self.saved;
        Some(caret)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Apply an action without recording it
    fn apply(&mut self, action: &Action) -> usize {
        match action {
            Action::Insert { offset, text } => {
                let offset = (*offset).min(self.len_chars());
                self.rope.insert(offset, text);
                offset + text.chars().count()
            }
            Action::Delete { offset, text } => {
                let start = (*offset).min(self.len_chars());
                let end = (start + text.chars().count()).min(self.len_chars());
                self.rope.remove(start..end);
                start
            }
            Action::Group { actions } => actions
                .iter()
                .fold(0, |_, action| self.apply(action)),
        }
    }

    /// Convert char offset to line/column, clamping to the document end
    pub fn offset_to_cursor(&self, offset: usize) -> Cursor {
        let offset = offset.min(self.len_chars());
        let line = self.rope.char_to_line(offset);
        Cursor::at(line, offset - self.rope.line_to_char(line))
    }

    /// Convert line/column to char offset, clamping both to the document
    pub fn cursor_to_offset(&self, cursor: &Cursor) -> usize {
        let line = cursor.line.min(self.line_count().saturating_sub(1));
        self.rope.line_to_char(line) + cursor.column.min(self.line_len(line))
    }

    fn clamp_range(&self, range: Range) -> Range {
        let len = self.len_chars();
        Range::new(range.start.min(len), range.end.min(len))
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert CRLF to LF and report which ending the text used
fn normalize_line_endings(text: &str) -> (String, LineEnding) {
    if text.contains("\r\n") {
        (text.replace("\r\n", "\n"), LineEnding::CRLF)
    } else {
        (text.to_string(), LineEnding::LF)
    }
}
