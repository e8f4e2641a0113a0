//! Translator extraction from the responsibility statement.
//!
//! The statement names roles in prose, e.g. `"آلن دوباتن؛ ترجمه عرفان ثابتی"`.
//! The rule table below recognizes a translator marker, optionally followed by
//! `"و <co-role>"` when the translator also held another role, and captures
//! the names that follow up to the next `؛`, `.` or `]`.

use crate::normalize::{COMMA, fold_comma_class, normalize};
use crate::regex::{Regex, escape};
use itertools::Itertools;
use std::cmp::Reverse;
use std::sync::LazyLock;

/// Word forms that mark the translator role.
pub const TRANSLATOR_MARKERS: [&str; 4] = ["ترجمه", "مترجم", "مترجمان", "مترجمین"];

/// Secondary roles that may follow a translator marker after "و" (and).
/// They describe the translator and never start the list of names.
pub const CO_ROLES: [&str; 20] = [
    "تنظیم",
    "گردآوری",
    "گردآورنده",
    "سرپرستی",
    "تدوین",
    "تالیف",
    "تألیف",
    "انطباق فرهنگی",
    "ویرایش",
    "بومی\u{200c}سازی",
    "ترانه\u{200c}سرا",
    "ترانه سرا",
    "شعرهای",
    "انتخاب",
    "نگارش",
    "ویراستار",
    "بازآفرینی",
    "بررسی",
    "تحقیق",
    "شرح",
];

/// The conjunction joining names in a list.
const AND: &str = " و ";

static TRANSLATORS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"[\[(]?\s?(?:{markers})(?:\x{{200c}}+ی)?(?: \[?و [\[(]?(?:{roles})[\])]?)?\s?[\])]?(.+?)(?:؛|\.|\]|$)",
        markers = alternation(&TRANSLATOR_MARKERS),
        roles = alternation(&CO_ROLES),
    );
    Regex::new(&pattern).unwrap()
});

/// Regex alternation of literal words, longest first.
fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .sorted_by_key(|word| Reverse(word.chars().count()))
        .map(|word| escape(word))
        .join("|")
}

/// Extract the translators named in a responsibility statement.
///
/// Only the last `/`-delimited segment is read. Names keep their source
/// order and are not deduplicated; a candidate still carrying a bracket is
/// annotation residue and is dropped.
///
/// # Examples
///
/// ```
/// use nlaimeta::fields::parse_translators;
///
/// assert_eq!(
///     parse_translators(" آلن دوباتن؛ ترجمه عرفان ثابتی"),
///     vec!["عرفان ثابتی"]
/// );
/// assert!(parse_translators(" نوشته عباس معروفی").is_empty());
/// ```
pub fn parse_translators(tail: &str) -> Vec<String> {
    let segment = normalize(tail.rsplit('/').next().unwrap_or_default());

    let Some(names) = TRANSLATORS_REGEX
        .captures(&segment)
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };

    let names = fold_comma_class(&names.as_str().replace(AND, &COMMA.to_string()));
    names
        .split(COMMA)
        .map(normalize)
        .filter(|name| !name.is_empty() && !name.contains(['[', ']']))
        .collect()
}
