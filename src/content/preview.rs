//! Single-line body previews.
//!
//! The results list renders one line of body text under each note title. The
//! preview is the leading slice of the body with newlines collapsed, and it
//! doubles as the fallback excerpt when no search match is available.

use crate::content::NoteContentStructure;
use once_cell::sync::Lazy;
use regex::Regex;

/// Unicode line terminators, matched as runs so blank lines collapse to a
/// single space.
static NEWLINE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\r\n\x0B\x0C\u{0085}\u{2028}\u{2029}]+").expect("Failed to compile newline regex")
});

/// Replace every run of newline characters with a single space.
pub fn collapse_newlines(text: &str) -> String {
    NEWLINE_RUN_REGEX.replace_all(text, " ").into_owned()
}

/// Build a single-line preview of the note body, at most `max_chars`
/// characters long.
///
/// Returns `None` when the text has no body region (empty or whitespace-only
/// notes).
pub fn preview(text: &str, max_chars: usize) -> Option<String> {
    let structure = NoteContentStructure::parse(text);
    let body = structure.body_in(text)?;

    let collapsed = collapse_newlines(body);
    let truncated: String = collapsed.chars().take(max_chars).collect();
    Some(truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_newlines_single() {
        assert_eq!(collapse_newlines("one\ntwo"), "one two");
    }

    #[test]
    fn test_collapse_newlines_run() {
        assert_eq!(collapse_newlines("one\r\n\n\ntwo"), "one two");
    }

    #[test]
    fn test_collapse_newlines_unicode_separators() {
        assert_eq!(collapse_newlines("one\u{2028}two\u{2029}three"), "one two three");
    }

    #[test]
    fn test_preview_of_multiline_body() {
        let text = "Title\nFirst body line\nSecond body line";
        assert_eq!(
            preview(text, 160).as_deref(),
            Some("First body line Second body line")
        );
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let text = "Title\ncafé au lait";
        assert_eq!(preview(text, 4).as_deref(), Some("café"));
    }

    #[test]
    fn test_preview_of_empty_text_is_absent() {
        assert_eq!(preview("", 160), None);
        assert_eq!(preview("   \n ", 160), None);
    }

    #[test]
    fn test_preview_of_single_line_note_is_the_line() {
        assert_eq!(preview("Only a title", 160).as_deref(), Some("Only a title"));
    }
}
