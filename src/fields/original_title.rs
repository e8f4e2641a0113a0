use crate::normalize::normalize;
use crate::regex::Regex;
use std::sync::LazyLock;

/// Marker introducing the original-language title in the notes field.
pub const ORIGINAL_TITLE_MARKER: &str = "عنوان اصلی:";

/// Bracketed annotation, or a trailing printing/copyright year such as `", c2013."`.
static PUB_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\[.*\]|[,.]\s?c?\[?[0-9۰-۹]{4}\]?.?$)").unwrap()
});

/// Extract the original-language title from the notes field.
///
/// Only the text following [`ORIGINAL_TITLE_MARKER`] on its own line is
/// read; other notes in the field are ignored.
///
/// # Examples
///
/// ```
/// use nlaimeta::fields::parse_original_title;
///
/// assert_eq!(
///     parse_original_title("یادداشت: عنوان اصلی: Fahrenheit 451 [۲۰۱۳]."),
///     "Fahrenheit 451"
/// );
/// assert_eq!(parse_original_title("کتاب حاضر ترجمه ای است از..."), "");
/// ```
pub fn parse_original_title(note: &str) -> String {
    let Some((_, rest)) = note.split_once(ORIGINAL_TITLE_MARKER) else {
        return String::new();
    };
    let line = rest.split('\n').next().unwrap_or_default();

    let text: String = normalize(line)
        .chars()
        .filter(|&c| c != '\u{202D}' && c != '\u{200E}')
        .collect();
    let text = PUB_DATE_REGEX.replace_all(&text, "").replace(',', "");

    text.trim_matches(['.', '[', ']', ' ']).to_string()
}
