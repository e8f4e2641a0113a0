use crate::normalize::normalize;

/// Material-type tag the catalog inserts into book titles.
pub const BOOK_MARKER: &str = "[کتاب]";

/// Split a title field into the clean title and the responsibility tail.
///
/// The field reads `<title and subtitle> / <responsibility statement>`. The
/// tail is returned untouched for [`parse_translators`](super::parse_translators).
///
/// # Examples
///
/// ```
/// use nlaimeta::fields::parse_title;
///
/// let (title, tail) = parse_title("سمفونی مردگان [کتاب] / عباس معروفی");
/// assert_eq!(title, "سمفونی مردگان");
/// assert_eq!(tail, " عباس معروفی");
/// ```
pub fn parse_title(field: &str) -> (String, String) {
    let (title, tail) = field.split_once('/').unwrap_or((field, ""));
    let title = normalize(&title.replacen(BOOK_MARKER, "", 1));

    (title, tail.to_string())
}
