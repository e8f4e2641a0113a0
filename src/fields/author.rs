use crate::normalize::{COMMA, fold_comma_class, has_digit, normalize};

/// Parse a heading field into the Persian and Latin full names.
///
/// The heading holds a surname-first Persian entry and, on a second line, an
/// optional Latin entry. Each is reassembled as `"<given> <surname>"`.
/// A line with fewer than two parts yields an empty name, and a part
/// carrying digits (birth or death years) is dropped.
///
/// # Examples
///
/// ```
/// use nlaimeta::fields::parse_author;
///
/// let (fa, en) = parse_author("نورثفیلد، گری.\nNorthfield, Gary.");
/// assert_eq!(fa, "گری نورثفیلد");
/// assert_eq!(en, "Gary Northfield");
/// ```
pub fn parse_author(heading: &str) -> (String, String) {
    let mut lines = heading.split('\n');

    let name_fa = lines
        .next()
        .map(|line| {
            let line = fold_comma_class(line);
            full_name(line.split(COMMA))
        })
        .unwrap_or_default();
    let name_en = lines
        .next()
        .map(|line| full_name(line.split(',')))
        .unwrap_or_default();

    (name_fa, name_en)
}

/// Assemble `"<given> <surname>"` from the parts of a surname-first entry.
fn full_name<'a>(mut parts: impl Iterator<Item = &'a str>) -> String {
    let (Some(surname), Some(given)) = (parts.next(), parts.next()) else {
        return String::new();
    };

    let name = format!("{} {}", name_part(given), name_part(surname));
    name.trim().to_string()
}

/// Clean one part of a heading, dropping it when it carries digits.
fn name_part(part: &str) -> String {
    let part = normalize(part);
    if has_digit(&part) {
        return String::new();
    }
    strip_closing_period(&part).to_string()
}

/// Remove the period that closes a heading entry, keeping initials intact.
fn strip_closing_period(part: &str) -> &str {
    let Some(stripped) = part.strip_suffix('.') else {
        return part;
    };
    let last_word = stripped.rsplit(' ').next().unwrap_or_default();
    if last_word.chars().count() == 1 {
        // "J. K." ends with an initial
        return part;
    }
    stripped.trim_end()
}
