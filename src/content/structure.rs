//! Structural analysis of note text.
//!
//! A note's first non-blank line is its title; everything after that line is
//! the body. Both regions are located in a single linear pass and exposed as
//! byte ranges into the analyzed text, so callers can slice either the
//! analyzed string or a parallel representation of it.

use std::ops::Range;

/// Byte ranges of the structural regions of a note's text.
///
/// A note whose text is a single line has no content after its title; the
/// body range then falls back to the title range itself so the note stays
/// previewable and excerptable. `has_separate_body` distinguishes the two
/// cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteContentStructure {
    title: Option<Range<usize>>,
    body: Option<Range<usize>>,
    separate_body: bool,
}

impl NoteContentStructure {
    /// Analyze `text` and locate its title and body regions.
    ///
    /// Whitespace-only or empty text has neither region. Ranges are trimmed
    /// of surrounding whitespace on both ends.
    pub fn parse(text: &str) -> Self {
        let title = first_line_range(text);

        let title = match title {
            Some(range) => range,
            None => {
                return Self {
                    title: None,
                    body: None,
                    separate_body: false,
                }
            }
        };

        // The body starts at the first non-whitespace character after the
        // title line's terminator.
        let after_title = line_end(text, title.end);
        let body = trimmed_range(text, after_title, text.len());

        match body {
            Some(range) => Self {
                title: Some(title),
                body: Some(range),
                separate_body: true,
            },
            None => Self {
                // Single-line note: the title doubles as the body.
                title: Some(title.clone()),
                body: Some(title),
                separate_body: false,
            },
        }
    }

    /// Byte range of the title line, trimmed of surrounding whitespace.
    pub fn title(&self) -> Option<Range<usize>> {
        self.title.clone()
    }

    /// Byte range of the body region, trimmed of surrounding whitespace.
    pub fn body(&self) -> Option<Range<usize>> {
        self.body.clone()
    }

    /// Whether the body is a region distinct from the title line.
    pub fn has_separate_body(&self) -> bool {
        self.separate_body
    }

    /// Slice the title out of the text this structure was parsed from.
    pub fn title_in<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.title.as_ref().map(|r| &text[r.clone()])
    }

    /// Slice the body out of the text this structure was parsed from.
    pub fn body_in<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.body.as_ref().map(|r| &text[r.clone()])
    }
}

/// Range of the first non-blank line, trimmed of surrounding whitespace.
fn first_line_range(text: &str) -> Option<Range<usize>> {
    let start = text
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)?;

    let end = text[start..]
        .char_indices()
        .find(|(_, c)| matches!(c, '\n' | '\r'))
        .map(|(i, _)| start + i)
        .unwrap_or(text.len());

    trimmed_range(text, start, end)
}

/// Byte offset just past the end of the line containing `from`.
fn line_end(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|(_, c)| *c == '\n')
        .map(|(i, _)| from + i + 1)
        .unwrap_or(text.len())
}

/// Trim whitespace off both ends of `text[start..end]`, returning the
/// resulting range or `None` if nothing remains.
fn trimmed_range(text: &str, start: usize, end: usize) -> Option<Range<usize>> {
    let slice = &text[start..end];

    let lead = slice
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)?;

    let trail = slice
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(slice.len());

    Some(start + lead..start + trail)
}
