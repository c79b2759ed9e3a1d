use crate::Cursor;

/// Viewport for virtual scrolling
/// Tracks which part of document is visible on screen
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    /// First visible line (0-based)
    pub top_line: usize,
    /// Number of visible lines
    pub height: usize,
    /// Horizontal scroll (left column)
    pub left_column: usize,
    /// Width of visible area
    pub width: usize,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            top_line: 0,
            height,
            left_column: 0,
            width,
        }
    }

    /// Update viewport dimensions
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Index of the line after the last visible one
    pub fn bottom_line(&self) -> usize {
        self.top_line + self.height
    }

    /// Index of the column after the last visible one
    pub fn right_column(&self) -> usize {
        self.left_column + self.width
    }

    pub fn is_line_visible(&self, line: usize) -> bool {
        line >= self.top_line && line < self.bottom_line()
    }

    /// Scroll so the cursor is on screen.
    /// Returns true if viewport was changed
    pub fn ensure_cursor_visible(&mut self, cursor: &Cursor, total_lines: usize) -> bool {
        let before = (self.top_line, self.left_column);

        if self.height > 0 {
            if cursor.line < self.top_line {
                self.top_line = cursor.line;
            } else if cursor.line >= self.bottom_line() {
                self.top_line = cursor.line + 1 - self.height;
            }

            // Don't leave empty space at the bottom
            let max_top = total_lines.saturating_sub(self.height);
            self.top_line = self.top_line.min(max_top);
        }

        if self.width > 0 {
            if cursor.column < self.left_column {
                self.left_column = cursor.column;
            } else if cursor.column >= self.right_column() {
                self.left_column = cursor.column + 1 - self.width;
            }
        }

        before != (self.top_line, self.left_column)
    }

    /// Scroll to document start
    pub fn scroll_to_top(&mut self) {
        self.top_line = 0;
        self.left_column = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolls_down_to_cursor() {
        let mut viewport = Viewport::new(10, 5);
        assert!(viewport.ensure_cursor_visible(&Cursor::at(7, 0), 20));
        assert_eq!(viewport.top_line, 3);
        assert!(viewport.is_line_visible(7));
        assert!(!viewport.is_line_visible(8));
    }

    #[test]
    fn test_scrolls_up_to_cursor() {
        let mut viewport = Viewport::new(10, 5);
        viewport.top_line = 10;
        assert!(viewport.ensure_cursor_visible(&Cursor::at(4, 0), 20));
        assert_eq!(viewport.top_line, 4);
    }

    #[test]
    fn test_horizontal_scroll() {
        let mut viewport = Viewport::new(10, 5);
        viewport.ensure_cursor_visible(&Cursor::at(0, 25), 1);
        assert_eq!(viewport.left_column, 16);

        viewport.ensure_cursor_visible(&Cursor::at(0, 3), 1);
        assert_eq!(viewport.left_column, 3);
    }

    #[test]
    fn test_visible_cursor_does_not_scroll() {
        let mut viewport = Viewport::new(10, 5);
        assert!(!viewport.ensure_cursor_visible(&Cursor::at(2, 2), 20));
        assert_eq!(viewport.top_line, 0);
    }

    #[test]
    fn test_short_document_keeps_top() {
        let mut viewport = Viewport::new(10, 5);
        viewport.top_line = 8;
        viewport.ensure_cursor_visible(&Cursor::at(1, 0), 3);
        assert_eq!(viewport.top_line, 0);
    }
}
