use crate::normalize::{ascii_digit, normalize};
use crate::regex::Regex;
use std::sync::LazyLock;

/// An ISBN-shaped run: a digit, then digits, hyphens or a check `X`.
static ISBN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9۰-۹٠-٩][0-9۰-۹٠-٩\-xX]{8,}").unwrap());

/// Extract a compact ISBN from the ISBN field.
///
/// Hyphens are removed and digits folded to ASCII. The checksum is not
/// verified. The field often carries a price after the number, which is
/// ignored.
///
/// # Examples
///
/// ```
/// use nlaimeta::fields::parse_isbn;
///
/// assert_eq!(parse_isbn("978-964-311-344-5"), "9789643113445");
/// assert_eq!(parse_isbn("۹۷۸-۹۶۴-۳۱۱-۳۴۴-۵ ؛ ۵۰۰۰۰ ریال"), "9789643113445");
/// ```
pub fn parse_isbn(field: &str) -> String {
    let text = normalize(field);
    let Some(found) = ISBN_REGEX.find(&text) else {
        return String::new();
    };

    found
        .as_str()
        .chars()
        .filter_map(|c| match c {
            'x' | 'X' => Some('X'),
            '-' => None,
            c => ascii_digit(c),
        })
        .collect()
}
