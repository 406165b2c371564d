#![forbid(unsafe_code)]

//! Lightweight styled text: spans, lines, and word wrapping.

use folio_render::style::Style;
use unicode_width::UnicodeWidthStr;

/// A run of text with an optional style override.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub content: String,
    pub style: Option<Style>,
}

impl Span {
    /// Unstyled span.
    #[must_use]
    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: None,
        }
    }

    /// Styled span.
    #[must_use]
    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style: Some(style),
        }
    }

    /// Display width in columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.content.width()
    }
}

/// One visual line of spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// Line from spans.
    #[must_use]
    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Total display width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Concatenated plain text.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.spans.iter().map(|s| s.content.as_str()).collect()
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self {
            spans: vec![Span::raw(s)],
        }
    }
}

/// Multi-line text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub lines: Vec<Line>,
}

impl Text {
    /// Unstyled text; `\n` separates lines.
    #[must_use]
    pub fn raw(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(Line::from).collect(),
        }
    }

    /// Text from prepared lines.
    #[must_use]
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::raw(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::raw(&s)
    }
}

/// Word-wrap plain text to `width` columns.
///
/// Words longer than a full line are hard-broken. Blank input lines are
/// preserved. The result is deterministic; section height measurement and
/// rendering both rely on this same function, so they cannot drift apart.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;
        let mut any_word = false;

        for word in raw.split_whitespace() {
            any_word = true;
            let word_width = word.width();
            if current_width == 0 {
                place_word(&mut lines, &mut current, &mut current_width, word, width);
            } else if current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
                place_word(&mut lines, &mut current, &mut current_width, word, width);
            }
        }

        if !current.is_empty() || !any_word {
            lines.push(current);
        }
    }
    lines
}

/// Place a word on an empty current line, hard-breaking if it exceeds
/// the full width.
fn place_word(
    lines: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
    word: &str,
    width: usize,
) {
    if word.width() <= width {
        current.push_str(word);
        *current_width = word.width();
        return;
    }
    for ch in word.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if *current_width + w > width {
            lines.push(std::mem::take(current));
            *current_width = 0;
        }
        current.push(ch);
        *current_width += w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wrap_simple_words() {
        assert_eq!(wrap_text("hello world", 6), vec!["hello", "world"]);
    }

    #[test]
    fn wrap_fits_on_one_line() {
        assert_eq!(wrap_text("hello world", 11), vec!["hello world"]);
    }

    #[test]
    fn wrap_preserves_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_zero_width_is_empty() {
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn wrap_collapses_internal_whitespace() {
        assert_eq!(wrap_text("a   b", 10), vec!["a b"]);
    }

    #[test]
    fn line_plain_text_and_width() {
        let line = Line::from_spans(vec![Span::raw("ab"), Span::raw("cd")]);
        assert_eq!(line.to_plain_text(), "abcd");
        assert_eq!(line.width(), 4);
    }

    #[test]
    fn text_raw_splits_lines() {
        let text = Text::raw("one\ntwo");
        assert_eq!(text.lines.len(), 2);
        assert_eq!(text.lines[1].to_plain_text(), "two");
    }

    proptest! {
        #[test]
        fn wrapped_lines_never_exceed_width(
            words in proptest::collection::vec("[a-zA-Z]{1,12}", 0..20),
            width in 1usize..40,
        ) {
            use unicode_width::UnicodeWidthStr;
            let text = words.join(" ");
            for line in wrap_text(&text, width) {
                prop_assert!(line.width() <= width, "line {line:?} wider than {width}");
            }
        }

        #[test]
        fn wrapping_loses_no_characters(
            words in proptest::collection::vec("[a-z]{1,10}", 1..15),
            width in 1usize..30,
        ) {
            let text = words.join(" ");
            let rejoined: String = wrap_text(&text, width).join(" ");
            let original: String = text.split_whitespace().collect();
            let wrapped: String = rejoined.split_whitespace().collect();
            prop_assert_eq!(original, wrapped);
        }
    }
}
