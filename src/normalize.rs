//! Canonical text form shared by every field parser.
//!
//! Catalog fields carry direction marks, joiners and several code points for
//! the same punctuation role. [`normalize`] removes the invisible noise and
//! tidies spacing; delimiter folding is left to the parsers that split on a
//! delimiter class, since fields disagree on which role a character plays.

use crate::regex::{Captures, Regex};
use std::sync::LazyLock;

/// Zero-width non-joiner. Kept inside Persian words, dropped before spaces.
pub const ZWNJ: char = '\u{200C}';

/// Canonical member of the comma delimiter class (Arabic comma).
pub const COMMA: char = '،';

/// Arabic semicolon, used both as a separator and before series numbers.
pub const SEMICOLON: char = '؛';

/// Members of the comma class that fold to [`COMMA`].
const COMMA_VARIANTS: [char; 2] = ['٬', SEMICOLON];

/// ZWJ, RLM, RLE, PDF and RLO. Never part of the content.
const STRIPPED_CONTROLS: [char; 5] = ['\u{200D}', '\u{200F}', '\u{202B}', '\u{202C}', '\u{202E}'];

/// A spaced ellipsis, optionally directly after a colon.
static ELLIPSIS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(:?) \.\.\.").unwrap());

/// Normalizes a raw catalog field.
///
/// Rules are applied until the text stops changing, so
/// `normalize(&normalize(s)) == normalize(s)` for every input.
///
/// # Examples
///
/// ```
/// use nlaimeta::normalize::normalize;
///
/// assert_eq!(normalize("\u{200f}تهران : ققنوس "), "تهران: ققنوس");
/// assert_eq!(normalize("بخش اول ..."), "بخش اول...");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut current = apply_rules(raw);
    loop {
        let next = apply_rules(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One pass of the normalization rules. Every rule either leaves the text
/// unchanged or shortens it.
fn apply_rules(text: &str) -> String {
    let text: String = text
        .chars()
        .filter(|c| !STRIPPED_CONTROLS.contains(c))
        .collect();
    let text = text.replace("\u{200C} ", " ").replace(" : ", ": ");
    let text = ELLIPSIS_REGEX.replace_all(&text, |caps: &Captures| {
        // ": ..." is already canonical
        if caps[1].is_empty() { "..." } else { ": ..." }
    });

    text.trim_end_matches(ZWNJ).trim().to_string()
}

/// Folds every member of the comma delimiter class to [`COMMA`].
pub fn fold_comma_class(text: &str) -> String {
    text.replace(COMMA_VARIANTS, &COMMA.to_string())
}

/// Returns the ASCII digit for a Latin, Persian or Arabic-Indic digit.
pub fn ascii_digit(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        '۰'..='۹' => char::from_digit(c as u32 - '۰' as u32, 10),
        '٠'..='٩' => char::from_digit(c as u32 - '٠' as u32, 10),
        _ => None,
    }
}

/// Whether the text contains a digit from any of the supported digit sets.
pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| ascii_digit(c).is_some())
}
