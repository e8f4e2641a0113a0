use crate::normalize::{COMMA, fold_comma_class, normalize};
use crate::regex::Regex;
use std::sync::LazyLock;

/// Generic legal-entity prefixes that are not part of a publisher's name.
pub const PUBLISHER_PREFIXES: [&str; 2] = ["نشر ", "انتشارات "];

/// Two colons separated only by spacing or direction marks.
static DOUBLE_COLON_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":[\s\x{200f}\x{202b}]+:").unwrap());

/// Extract the publisher from a publication statement.
///
/// The statement reads `<place> : <publisher>، <year>`.
///
/// # Examples
///
/// ```
/// use nlaimeta::fields::parse_publisher;
///
/// assert_eq!(parse_publisher("تهران : نشر ققنوس، ۱۳۹۰."), "ققنوس");
/// assert_eq!(parse_publisher("۱۳۹۰."), "");
/// ```
pub fn parse_publisher(field: &str) -> String {
    let text = fold_comma_class(field);
    let text = DOUBLE_COLON_REGEX.replace_all(&text, ":");

    let Some(statement) = text.split(':').nth(1) else {
        return String::new();
    };
    let name = normalize(statement.split(COMMA).next().unwrap_or_default());

    PUBLISHER_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(*prefix))
        .unwrap_or(name.as_str())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("", "")]
    #[case("تهران", "")]
    #[case("تهران : نشر ققنوس، ۱۳۹۰.", "ققنوس")]
    #[case("تهران : انتشارات نیلوفر، ۱۳۸۵.", "نیلوفر")]
    #[case("تهران : چشمه، ۱۳۸۹.", "چشمه")]
    #[case("تهران : چشمه٬ ۱۳۸۹.", "چشمه")]
    #[case("تهران : چشمه؛ ۱۳۸۹.", "چشمه")]
    #[case("تهران : \u{200f}: ققنوس، ۱۳۹۰.", "ققنوس")]
    #[case("تهران :  : ققنوس، ۱۳۹۰.", "ققنوس")]
    #[case("\u{200f}تهران\u{200f} : \u{200f}نشر مرکز\u{200f}، ۱۳۹۵.", "مرکز")]
    #[case("تهران : ققنوس", "ققنوس")]
    fn test_parse_publisher(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_publisher(input), expected);
    }

    #[test]
    fn test_only_one_prefix_stripped() {
        assert_eq!(parse_publisher("تهران : نشر نشر نو، ۱۳۹۰."), "نشر نو");
    }
}
