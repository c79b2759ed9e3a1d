//! Text search for mint.
//!
//! Literal (non-regex) search over a string with case and whole-word options.
//! All offsets in the public API are char offsets, not bytes.

use regex::Regex;

/// Search direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// A match location in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// First char of the match.
    pub start: usize,
    /// One past the last char of the match.
    pub end: usize,
}

impl Match {
    /// Match length in chars.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Matches are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Search options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Case-sensitive search.
    pub case_sensitive: bool,
    /// Whole word only.
    pub whole_word: bool,
}

/// Compiled literal pattern.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    whole_word: bool,
}

impl Matcher {
    /// Compile a pattern. Returns `None` for an empty pattern.
    pub fn new(pattern: &str, options: &SearchOptions) -> Option<Self> {
        if pattern.is_empty() {
            return None;
        }

        let escaped = regex::escape(pattern);
        let source = if options.case_sensitive {
            escaped
        } else {
            format!("(?i){}", escaped)
        };

        let regex = Regex::new(&source).ok()?;
        Some(Self {
            regex,
            whole_word: options.whole_word,
        })
    }

    /// First match starting at or after char offset `from`.
    pub fn find_forward(&self, text: &str, from: usize) -> Option<Match> {
        self.candidates(text, from).next()
    }

    /// Last match starting strictly before char offset `before`.
    pub fn find_backward(&self, text: &str, before: usize) -> Option<Match> {
        self.candidates(text, 0)
            .take_while(|m| m.start < before)
            .last()
    }

    /// All non-overlapping matches, left to right.
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        let mut matches: Vec<Match> = Vec::new();
        for m in self.candidates(text, 0) {
            if matches.last().map_or(true, |last| m.start >= last.end) {
                matches.push(m);
            }
        }
        matches
    }

    fn candidates<'a>(&'a self, text: &'a str, from: usize) -> Candidates<'a> {
        let byte = char_to_byte(text, from);
        Candidates {
            matcher: self,
            text,
            byte,
            chars: text[..byte].chars().count(),
        }
    }

    fn accepts(&self, text: &str, start: usize, end: usize) -> bool {
        !self.whole_word || at_word_boundaries(text, start, end)
    }
}

/// Every match position, overlapping ones included, in ascending order.
struct Candidates<'a> {
    matcher: &'a Matcher,
    text: &'a str,
    /// Byte position to resume from
    byte: usize,
    /// Char offset of `byte`
    chars: usize,
}

impl Iterator for Candidates<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if self.byte > self.text.len() {
                return None;
            }

            let found = self.matcher.regex.find_at(self.text, self.byte)?;
            let start = self.chars + self.text[self.byte..found.start()].chars().count();
            let end = start + found.as_str().chars().count();

            // Resume one char after this match start so overlapping matches are seen
            let step = self.text[found.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.byte = found.start() + step;
            self.chars = start + 1;

            if self.matcher.accepts(self.text, found.start(), found.end()) {
                return Some(Match { start, end });
            }
        }
    }
}

/// Search `text` for `pattern` starting at char offset `from`.
///
/// Forward finds the first match starting at or after `from`;
/// backward finds the last match starting before `from`.
pub fn find(
    text: &str,
    pattern: &str,
    from: usize,
    direction: SearchDirection,
    options: &SearchOptions,
) -> Option<Match> {
    let matcher = Matcher::new(pattern, options)?;
    match direction {
        SearchDirection::Forward => matcher.find_forward(text, from),
        SearchDirection::Backward => matcher.find_backward(text, from),
    }
}

/// Word characters for whole-word matching.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn at_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(case_sensitive: bool, whole_word: bool) -> SearchOptions {
        SearchOptions {
            case_sensitive,
            whole_word,
        }
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        assert!(Matcher::new("", &SearchOptions::default()).is_none());
        assert_eq!(
            find("abc", "", 0, SearchDirection::Forward, &SearchOptions::default()),
            None
        );
    }

    #[test]
    fn test_find_forward_from_offset() {
        let text = "cat dog cat";
        let m = find(text, "cat", 0, SearchDirection::Forward, &opts(true, false));
        assert_eq!(m, Some(Match { start: 0, end: 3 }));

        let m = find(text, "cat", 1, SearchDirection::Forward, &opts(true, false));
        assert_eq!(m, Some(Match { start: 8, end: 11 }));

        let m = find(text, "cat", 9, SearchDirection::Forward, &opts(true, false));
        assert_eq!(m, None);
    }

    #[test]
    fn test_find_backward_before_offset() {
        let text = "cat dog cat";
        let m = find(text, "cat", 11, SearchDirection::Backward, &opts(true, false));
        assert_eq!(m, Some(Match { start: 8, end: 11 }));

        // A match starting exactly at `before` is not included
        let m = find(text, "cat", 8, SearchDirection::Backward, &opts(true, false));
        assert_eq!(m, Some(Match { start: 0, end: 3 }));

        let m = find(text, "cat", 0, SearchDirection::Backward, &opts(true, false));
        assert_eq!(m, None);
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let matcher = Matcher::new("hello", &SearchOptions::default()).unwrap();
        assert_eq!(matcher.find_all("Hello HELLO hello").len(), 3);
    }

    #[test]
    fn test_case_sensitive() {
        let matcher = Matcher::new("hello", &opts(true, false)).unwrap();
        let matches = matcher.find_all("Hello HELLO hello");
        assert_eq!(matches, vec![Match { start: 12, end: 17 }]);
    }

    #[test]
    fn test_whole_word() {
        let matcher = Matcher::new("cat", &opts(false, true)).unwrap();
        let matches = matcher.find_all("cat concat cat_1 (cat)");
        assert_eq!(
            matches,
            vec![Match { start: 0, end: 3 }, Match { start: 18, end: 21 }]
        );
    }

    #[test]
    fn test_pattern_is_literal() {
        let matcher = Matcher::new("a.c", &opts(true, false)).unwrap();
        assert_eq!(matcher.find_all("abc a.c"), vec![Match { start: 4, end: 7 }]);
    }

    #[test]
    fn test_overlapping_forward_search() {
        let matcher = Matcher::new("aa", &opts(true, false)).unwrap();
        assert_eq!(matcher.find_forward("aaa", 1), Some(Match { start: 1, end: 3 }));
        // find_all stays non-overlapping
        assert_eq!(matcher.find_all("aaaa").len(), 2);
    }

    #[test]
    fn test_char_offsets_with_multibyte_text() {
        let text = "привет мир, мир";
        let m = find(text, "мир", 0, SearchDirection::Forward, &opts(true, false));
        assert_eq!(m, Some(Match { start: 7, end: 10 }));

        let m = find(text, "МИР", 10, SearchDirection::Forward, &opts(false, false));
        assert_eq!(m, Some(Match { start: 12, end: 15 }));
    }

    #[test]
    fn test_from_past_end_is_clamped() {
        let m = find("abc", "a", 100, SearchDirection::Forward, &opts(true, false));
        assert_eq!(m, None);
        let m = find("abc", "c", 100, SearchDirection::Backward, &opts(true, false));
        assert_eq!(m, Some(Match { start: 2, end: 3 }));
    }
}
