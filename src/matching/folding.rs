//! Diacritic folding for accent-insensitive matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Remove diacritics from `text` by decomposing to NFD and dropping
/// combining marks ("café" becomes "cafe").
///
/// For precomposed Latin input the folded string has the same number of
/// chars as the original, which is what lets the excerpt maker map match
/// offsets back onto the original text. Folding can change the char count
/// for inputs whose decomposition is not a base char plus marks; callers
/// must check the counts before mapping offsets.
pub fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
