use std::cmp::{max, min};

/// Cursor position in document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Line number (0-based)
    pub line: usize,
    /// Position in line in chars (0-based)
    pub column: usize,
}

impl Cursor {
    /// Create a new cursor at position (0, 0)
    pub fn new() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Create cursor at specified position
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.column.cmp(&other.column),
            other => other,
        }
    }
}

/// Half-open range of char offsets in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Create a range; the bounds are ordered automatically
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: min(a, b),
            end: max(a, b),
        }
    }

    /// Empty range at offset
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if offset lies inside the range (end exclusive)
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Text selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Start point of selection (anchor) - doesn't move
    pub anchor: usize,
    /// Active point (moves with cursor)
    pub active: usize,
}

impl Selection {
    /// Create a new selection
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Selection covering the range with the active end at `range.end`
    pub fn from_range(range: Range) -> Self {
        Self {
            anchor: range.start,
            active: range.end,
        }
    }

    /// Start of selection (minimum position)
    pub fn start(&self) -> usize {
        min(self.anchor, self.active)
    }

    /// End of selection (maximum position)
    pub fn end(&self) -> usize {
        max(self.anchor, self.active)
    }

    /// Selected range
    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.active)
    }

    /// Selection is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}
