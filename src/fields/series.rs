use crate::normalize::{SEMICOLON, normalize};
use crate::regex::Regex;
use std::sync::LazyLock;

/// One series statement: a name, `؛`, then its volume number.
static SERIES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.؛]+؛[\s0-9۰-۹]+").unwrap());

/// Split a series field into series names.
///
/// # Examples
///
/// ```
/// use nlaimeta::fields::parse_series;
///
/// assert_eq!(
///     parse_series("پرسی جکسون؛۱. قهرمانان المپ؛۲."),
///     vec!["پرسی جکسون", "قهرمانان المپ"]
/// );
/// assert_eq!(parse_series("ادبیات جهان."), vec!["ادبیات جهان"]);
/// ```
pub fn parse_series(field: &str) -> Vec<String> {
    let statements: Vec<&str> = SERIES_REGEX.find_iter(field).map(|m| m.as_str()).collect();
    let statements = if statements.is_empty() {
        vec![field]
    } else {
        statements
    };

    statements
        .into_iter()
        .map(series_name)
        .filter(|name| !name.is_empty())
        .collect()
}

fn series_name(statement: &str) -> String {
    let name = statement.split(SEMICOLON).next().unwrap_or_default();
    let name = normalize(&name.replace('\n', " "));
    match name.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
