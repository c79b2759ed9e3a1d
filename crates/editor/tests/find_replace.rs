//! Find/replace behavior against a plain string document and the real editor.

use mint_editor::{
    Editor, EditorConfig, FindReplace, Notice, Range, SearchDirection, SearchOptions,
    SearchTarget,
};

/// Minimal document backed by a String, offsets in chars
struct StringDoc {
    text: String,
    selection: Range,
}

impl StringDoc {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            selection: Range::caret(0),
        }
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

impl SearchTarget for StringDoc {
    fn find(
        &self,
        pattern: &str,
        from: usize,
        direction: SearchDirection,
        options: &SearchOptions,
    ) -> Option<Range> {
        mint_text_search::find(&self.text, pattern, from, direction, options)
            .map(|m| Range::new(m.start, m.end))
    }

    fn replace_range(&mut self, range: Range, text: &str) -> usize {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        self.text.replace_range(start..end, text);
        range.start + text.chars().count()
    }

    fn selection(&self) -> Range {
        self.selection
    }

    fn set_selection(&mut self, range: Range) {
        self.selection = range;
    }

    fn selected_text(&self) -> String {
        self.text
            .chars()
            .skip(self.selection.start)
            .take(self.selection.len())
            .collect()
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}

fn controller() -> FindReplace {
    FindReplace::default()
}

#[test]
fn find_next_moves_to_strictly_later_match_and_wraps() {
    let mut doc = StringDoc::new("one two one two one");
    let mut notices = Vec::new();
    let fr = controller();

    assert!(fr.find_next(&mut doc, "one", &mut notices));
    assert_eq!(doc.selection, Range::new(0, 3));

    assert!(fr.find_next(&mut doc, "one", &mut notices));
    assert_eq!(doc.selection, Range::new(8, 11));

    assert!(fr.find_next(&mut doc, "one", &mut notices));
    assert_eq!(doc.selection, Range::new(16, 19));

    // Past the last match: wraps to the first
    assert!(fr.find_next(&mut doc, "one", &mut notices));
    assert_eq!(doc.selection, Range::new(0, 3));
    assert!(notices.is_empty());
}

#[test]
fn find_previous_moves_backward_and_wraps_to_end() {
    let mut doc = StringDoc::new("ab ab ab");
    doc.selection = Range::caret(4);
    let mut notices = Vec::new();
    let fr = controller();

    assert!(fr.find_previous(&mut doc, "ab", &mut notices));
    assert_eq!(doc.selection, Range::new(3, 5));

    assert!(fr.find_previous(&mut doc, "ab", &mut notices));
    assert_eq!(doc.selection, Range::new(0, 2));

    assert!(fr.find_previous(&mut doc, "ab", &mut notices));
    assert_eq!(doc.selection, Range::new(6, 8));
}

#[test]
fn single_occurrence_is_found_again_after_wrap() {
    let mut doc = StringDoc::new("only one here");
    let mut notices = Vec::new();
    let fr = controller();

    assert!(fr.find_next(&mut doc, "one", &mut notices));
    assert!(fr.find_next(&mut doc, "one", &mut notices));
    assert_eq!(doc.selection, Range::new(5, 8));
    assert!(notices.is_empty());
}

#[test]
fn empty_pattern_is_a_no_op() {
    let mut doc = StringDoc::new("abc");
    doc.selection = Range::new(1, 2);
    let mut notices = Vec::new();
    let fr = controller();

    assert!(!fr.find_next(&mut doc, "", &mut notices));
    assert!(!fr.find_previous(&mut doc, "", &mut notices));
    assert_eq!(fr.replace_all(&mut doc, "", "x", &mut notices), 0);

    assert_eq!(doc.text, "abc");
    assert_eq!(doc.selection, Range::new(1, 2));
    assert!(notices.is_empty());
}

#[test]
fn missing_pattern_reports_not_found() {
    let mut doc = StringDoc::new("abc");
    let mut notices = Vec::new();

    assert!(!controller().find_next(&mut doc, "xyz", &mut notices));
    assert_eq!(doc.text, "abc");
    assert_eq!(doc.selection, Range::caret(0));
    assert_eq!(
        notices,
        vec![Notice::NotFound {
            pattern: "xyz".to_string()
        }]
    );
    assert_eq!(notices[0].message(), "Text not found.");
}

#[test]
fn replace_all_cat_dog_cat() {
    let mut doc = StringDoc::new("cat dog cat");
    let mut notices = Vec::new();

    let count = controller().replace_all(&mut doc, "cat", "fish", &mut notices);

    assert_eq!(count, 2);
    assert_eq!(doc.text, "fish dog fish");
    assert_eq!(notices, vec![Notice::Replaced { count: 2 }]);
}

#[test]
fn replace_all_removes_every_occurrence() {
    let text = "a-b a-b\na-b xa-b";
    let occurrences = text.matches("a-b").count();
    let mut doc = StringDoc::new(text);
    let mut notices = Vec::new();

    let count = controller().replace_all(&mut doc, "a-b", "c", &mut notices);

    assert_eq!(count, occurrences);
    assert!(!doc.text.contains("a-b"));
}

#[test]
fn replace_all_terminates_when_replacement_contains_pattern() {
    let mut doc = StringDoc::new("a a a");
    let mut notices = Vec::new();

    let count = controller().replace_all(&mut doc, "a", "aa", &mut notices);

    assert_eq!(count, 3);
    assert_eq!(doc.text, "aa aa aa");
}

#[test]
fn replace_all_keeps_the_gaps_between_matches() {
    let mut doc = StringDoc::new("xx-x--xx");
    let mut notices = Vec::new();

    let count = controller().replace_all(&mut doc, "x", "yyy", &mut notices);

    assert_eq!(count, 5);
    assert_eq!(doc.text, "yyyyyy-yyy--yyyyyy");
    assert_eq!(doc.selection, Range::caret(18));
}

#[test]
fn default_find_all_skips_overlaps() {
    let doc = StringDoc::new("aaaaa");
    let options = SearchOptions {
        case_sensitive: true,
        whole_word: false,
    };
    assert_eq!(
        doc.find_all("aa", &options),
        vec![Range::new(0, 2), Range::new(2, 4)]
    );
}

#[test]
fn replace_all_without_matches_reports_zero() {
    let mut doc = StringDoc::new("abc");
    let mut notices = Vec::new();

    assert_eq!(controller().replace_all(&mut doc, "q", "z", &mut notices), 0);
    assert_eq!(doc.text, "abc");
    assert_eq!(notices, vec![Notice::Replaced { count: 0 }]);
}

#[test]
fn replace_one_replaces_selection_then_advances() {
    let mut doc = StringDoc::new("cat dog cat");
    let mut notices = Vec::new();
    let fr = controller();

    assert!(fr.find_next(&mut doc, "cat", &mut notices));
    assert!(fr.replace_one(&mut doc, "cat", "fish", &mut notices));

    assert_eq!(doc.text, "fish dog cat");
    assert_eq!(doc.selection, Range::new(9, 12));
}

#[test]
fn replace_one_without_matching_selection_only_advances() {
    let mut doc = StringDoc::new("cat dog cat");
    let mut notices = Vec::new();

    assert!(controller().replace_one(&mut doc, "cat", "fish", &mut notices));

    assert_eq!(doc.text, "cat dog cat");
    assert_eq!(doc.selection, Range::new(0, 3));
}

#[test]
fn replace_one_compares_case_sensitively() {
    let mut doc = StringDoc::new("Cat cat");
    doc.selection = Range::new(0, 3);
    let mut notices = Vec::new();

    // Case-insensitive search still finds "cat", but "Cat" is not replaced
    controller().replace_one(&mut doc, "cat", "dog", &mut notices);

    assert_eq!(doc.text, "Cat cat");
    assert_eq!(doc.selection, Range::new(4, 7));
}

#[test]
fn options_are_honored() {
    let mut doc = StringDoc::new("Cat category cat");
    let mut notices = Vec::new();
    let fr = FindReplace::new(SearchOptions {
        case_sensitive: true,
        whole_word: true,
    });

    assert!(fr.find_next(&mut doc, "cat", &mut notices));
    assert_eq!(doc.selection, Range::new(13, 16));

    let fr = FindReplace::new(SearchOptions {
        case_sensitive: false,
        whole_word: true,
    });
    assert_eq!(fr.replace_all(&mut doc, "cat", "dog", &mut notices), 2);
    assert_eq!(doc.text, "dog category dog");
}

#[test]
fn editor_find_selects_match_with_caret_at_end() {
    let mut editor = Editor::from_text("alpha\nbeta\nalpha", EditorConfig::default());
    let mut notices = Vec::new();
    let fr = controller();

    assert!(fr.find_next(&mut editor, "alpha", &mut notices));
    assert!(fr.find_next(&mut editor, "alpha", &mut notices));

    assert_eq!(editor.selected_text().as_deref(), Some("alpha"));
    assert_eq!(editor.selection(), Range::new(11, 16));
    assert_eq!(editor.caret(), 16);
    assert_eq!(editor.position_label(), "Line: 3, Column: 6");
}

#[test]
fn editor_replace_all_is_one_undo_step() {
    let mut editor = Editor::from_text("cat dog cat", EditorConfig::default());
    let mut notices = Vec::new();

    assert_eq!(
        controller().replace_all(&mut editor, "cat", "fish", &mut notices),
        2
    );
    assert_eq!(editor.text(), "fish dog fish");
    assert!(editor.is_modified());

    editor.undo();
    assert_eq!(editor.text(), "cat dog cat");
    assert!(!editor.is_modified());

    editor.redo();
    assert_eq!(editor.text(), "fish dog fish");
}

#[test]
fn editor_replace_all_on_large_document() {
    let repeats = 40_000;
    let mut editor = Editor::from_text(&"cat dog ".repeat(repeats), EditorConfig::default());
    let mut notices = Vec::new();

    let count = controller().replace_all(&mut editor, "cat", "fish", &mut notices);

    assert_eq!(count, repeats);
    assert_eq!(editor.text(), "fish dog ".repeat(repeats));
    assert_eq!(editor.caret(), "fish dog ".len() * (repeats - 1) + "fish".len());
    assert_eq!(notices, vec![Notice::Replaced { count: repeats }]);

    editor.undo();
    assert_eq!(editor.text(), "cat dog ".repeat(repeats));
}

#[test]
fn editor_replace_one_places_caret_after_replacement() {
    let mut editor = Editor::from_text("cat cat", EditorConfig::default());
    let mut notices = Vec::new();
    let fr = controller();

    editor.set_selection(Range::new(0, 3));
    assert!(fr.replace_one(&mut editor, "cat", "lion", &mut notices));

    assert_eq!(editor.text(), "lion cat");
    assert_eq!(editor.selection(), Range::new(5, 8));
}

#[test]
fn save_then_load_reproduces_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let text = "first line\n\tsecond line with ünïcödé\n\nlast";

    let mut editor = Editor::from_text(text, EditorConfig::default());
    editor.save_as(path.clone()).unwrap();

    let loaded = Editor::open_file(&path, EditorConfig::default()).unwrap();
    assert_eq!(loaded.text(), text);
    assert!(!loaded.is_modified());
}
