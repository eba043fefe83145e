//! Excerpt match pattern construction.
//!
//! The excerpt pattern is a case-insensitive alternation of the search
//! keywords. A match starts at a keyword and greedily extends up to a bounded
//! amount of trailing context, so the matched range is already the displayable
//! excerpt around the keyword.

use crate::error::{PatternError, PatternResult};
use crate::matching::fold_diacritics;
use regex::Regex;

/// Build the excerpt match pattern for a keyword set.
///
/// Keywords are diacritic-folded (the text being searched is folded the same
/// way) and regex-escaped before assembly. Empty or whitespace-only keywords
/// are discarded; if none remain the set has no valid keywords and no pattern
/// is built.
///
/// The resulting regex is case-insensitive and lets `.` cross newlines, so
/// trailing context can span line breaks (the excerpt maker collapses them
/// for display).
pub fn build_excerpt_pattern(keywords: &[String], trailing_context: usize) -> PatternResult<Regex> {
    let escaped: Vec<String> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(|k| regex::escape(&fold_diacritics(k)))
        .collect();

    if escaped.is_empty() {
        return Err(PatternError::NoValidKeywords);
    }

    let pattern = format!(
        "(?is)(?:{}).{{0,{}}}",
        escaped.join("|"),
        trailing_context
    );

    Ok(Regex::new(&pattern)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAILING: usize = 300;

    #[test]
    fn test_pattern_matches_keyword_with_trailing_context() {
        let pattern = build_excerpt_pattern(&["fox".to_string()], TRAILING).unwrap();
        let m = pattern.find("the quick brown fox jumps").unwrap();
        assert_eq!(m.as_str(), "fox jumps");
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let pattern = build_excerpt_pattern(&["BROWN".to_string()], TRAILING).unwrap();
        assert!(pattern.is_match("the quick brown fox"));
    }

    #[test]
    fn test_pattern_alternates_over_keywords() {
        let keywords = vec!["apple".to_string(), "pear".to_string()];
        let pattern = build_excerpt_pattern(&keywords, TRAILING).unwrap();
        assert_eq!(pattern.find("a ripe pear").unwrap().as_str(), "pear");
        assert_eq!(pattern.find("an apple too").unwrap().as_str(), "apple too");
    }

    #[test]
    fn test_pattern_crosses_newlines_in_trailing_context() {
        let pattern = build_excerpt_pattern(&["brown".to_string()], TRAILING).unwrap();
        let m = pattern.find("brown fox\njumps over").unwrap();
        assert_eq!(m.as_str(), "brown fox\njumps over");
    }

    #[test]
    fn test_trailing_context_is_bounded() {
        let pattern = build_excerpt_pattern(&["x".to_string()], 5).unwrap();
        let m = pattern.find("x0123456789").unwrap();
        assert_eq!(m.as_str(), "x01234");
    }

    #[test]
    fn test_keywords_are_escaped() {
        let pattern = build_excerpt_pattern(&["c++ (notes)".to_string()], TRAILING).unwrap();
        let m = pattern.find("learning c++ (notes) today").unwrap();
        assert!(m.as_str().starts_with("c++ (notes)"));
    }

    #[test]
    fn test_keywords_are_folded() {
        let pattern = build_excerpt_pattern(&["café".to_string()], TRAILING).unwrap();
        // The searched text is folded before matching, so the pattern must
        // carry the folded form of the keyword.
        assert!(pattern.is_match("cafe nearby"));
    }

    #[test]
    fn test_blank_keywords_are_rejected() {
        let keywords = vec!["".to_string(), "   ".to_string()];
        let result = build_excerpt_pattern(&keywords, TRAILING);
        assert!(matches!(result, Err(PatternError::NoValidKeywords)));
    }

    #[test]
    fn test_blank_keywords_are_filtered_from_valid_sets() {
        let keywords = vec!["".to_string(), "fox".to_string()];
        let pattern = build_excerpt_pattern(&keywords, TRAILING).unwrap();
        // An empty alternation branch would match at offset zero of any text.
        assert!(pattern.find("no match here for sure").is_none());
        assert!(pattern.is_match("a fox appears"));
    }

    #[test]
    fn test_empty_keyword_slice_is_rejected() {
        let result = build_excerpt_pattern(&[], TRAILING);
        assert!(matches!(result, Err(PatternError::NoValidKeywords)));
    }
}
