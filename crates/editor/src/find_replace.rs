//! Find/replace controller.
//!
//! Drives search and replacement against anything implementing
//! [`SearchTarget`]. The controller holds no state besides the search
//! options; every call is one atomic operation on the target.

use mint_buffer::Range;
use mint_text_search::{SearchDirection, SearchOptions};

/// Document the controller searches and edits.
pub trait SearchTarget {
    /// Forward: first match starting at or after `from`.
    /// Backward: last match starting before `from`.
    fn find(
        &self,
        pattern: &str,
        from: usize,
        direction: SearchDirection,
        options: &SearchOptions,
    ) -> Option<Range>;

    /// Every non-overlapping match, left to right.
    ///
    /// The default walks `find` forward; documents that can scan their text
    /// once should override it.
    fn find_all(&self, pattern: &str, options: &SearchOptions) -> Vec<Range> {
        let mut matches = Vec::new();
        let mut from = 0;
        while let Some(range) = self.find(pattern, from, SearchDirection::Forward, options) {
            from = range.end;
            matches.push(range);
        }
        matches
    }

    /// Replace `range` with `text`. Returns the offset just past the new text.
    fn replace_range(&mut self, range: Range, text: &str) -> usize;

    /// Current selection; empty at the caret when nothing is selected
    fn selection(&self) -> Range;

    /// Select `range` with the caret at its end
    fn set_selection(&mut self, range: Range);

    fn selected_text(&self) -> String;

    fn len_chars(&self) -> usize;

    /// Edits until `end_edit_group` undo as one step
    fn begin_edit_group(&mut self) {}

    fn end_edit_group(&mut self) {}
}

/// User-facing outcome of a find/replace operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NotFound { pattern: String },
    Replaced { count: usize },
}

impl Notice {
    /// Dialog title for the notice
    pub fn title(&self) -> &'static str {
        match self {
            Notice::NotFound { .. } => "Search",
            Notice::Replaced { .. } => "Search all",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::NotFound { .. } => "Text not found.".to_string(),
            Notice::Replaced { count } => format!("Did {} replacement(s).", count),
        }
    }
}

/// Receives notices meant for the user
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Find/replace controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindReplace {
    pub options: SearchOptions,
}

impl FindReplace {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Select the next match after the selection, wrapping to the start once.
    ///
    /// Returns false for an empty pattern (no side effects) or when the
    /// pattern does not occur at all (the notifier hears `NotFound`).
    pub fn find_next<T, N>(&self, target: &mut T, pattern: &str, notifier: &mut N) -> bool
    where
        T: SearchTarget + ?Sized,
        N: Notifier + ?Sized,
    {
        self.find(target, pattern, SearchDirection::Forward, notifier)
    }

    /// Select the previous match before the selection, wrapping to the end once.
    pub fn find_previous<T, N>(&self, target: &mut T, pattern: &str, notifier: &mut N) -> bool
    where
        T: SearchTarget + ?Sized,
        N: Notifier + ?Sized,
    {
        self.find(target, pattern, SearchDirection::Backward, notifier)
    }

    fn find<T, N>(
        &self,
        target: &mut T,
        pattern: &str,
        direction: SearchDirection,
        notifier: &mut N,
    ) -> bool
    where
        T: SearchTarget + ?Sized,
        N: Notifier + ?Sized,
    {
        if pattern.is_empty() {
            return false;
        }

        let selection = target.selection();
        let (from, wrap_from) = match direction {
            SearchDirection::Forward => (selection.end, 0),
            SearchDirection::Backward => (selection.start, target.len_chars()),
        };

        let found = target
            .find(pattern, from, direction, &self.options)
            .or_else(|| target.find(pattern, wrap_from, direction, &self.options));

        match found {
            Some(range) => {
                target.set_selection(range);
                true
            }
            None => {
                notifier.notify(Notice::NotFound {
                    pattern: pattern.to_string(),
                });
                false
            }
        }
    }

    /// Replace the selection if it is exactly `pattern`, then move to the next match.
    ///
    /// The comparison is case-sensitive regardless of the options. The search
    /// advances even when nothing was replaced. Returns the `find_next` result.
    pub fn replace_one<T, N>(
        &self,
        target: &mut T,
        pattern: &str,
        replacement: &str,
        notifier: &mut N,
    ) -> bool
    where
        T: SearchTarget + ?Sized,
        N: Notifier + ?Sized,
    {
        if !pattern.is_empty() && target.selected_text() == pattern {
            let selection = target.selection();
            let end = target.replace_range(selection, replacement);
            target.set_selection(Range::caret(end));
        }
        self.find_next(target, pattern, notifier)
    }

    /// Replace every match from the document start as one undo step.
    ///
    /// Matches are collected once from the original text, so text inserted
    /// by a replacement is never searched again. Returns the number of
    /// replacements and notifies `Replaced`.
    pub fn replace_all<T, N>(
        &self,
        target: &mut T,
        pattern: &str,
        replacement: &str,
        notifier: &mut N,
    ) -> usize
    where
        T: SearchTarget + ?Sized,
        N: Notifier + ?Sized,
    {
        if pattern.is_empty() {
            return 0;
        }

        let matches = target.find_all(pattern, &self.options);

        target.set_selection(Range::caret(0));
        target.begin_edit_group();

        // `end` is where the original text at `prev_end` sits after the edits so far
        let mut end = 0;
        let mut prev_end = 0;
        for found in &matches {
            let start = end + (found.start - prev_end);
            end = target.replace_range(Range::new(start, start + found.len()), replacement);
            prev_end = found.end;
        }

        target.end_edit_group();
        target.set_selection(Range::caret(end));

        let count = matches.len();
        notifier.notify(Notice::Replaced { count });
        count
    }
}
