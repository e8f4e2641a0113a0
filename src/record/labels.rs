//! Catalog field labels and their definitions.
//!
//! The catalog renders every field as a Persian label cell followed by its
//! value. Labels arrive with a leading right-to-left mark and, depending on
//! the page, Arabic rather than Persian forms of yeh and kaf.

use crate::normalize::normalize;

/// Field labels the extractor reads.
#[non_exhaustive]
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub enum FieldLabel {
    /// عنوان و نام پدیدآور - title and statement of responsibility
    TitleAndResponsibility,
    /// سرشناسه - main entry heading (author)
    Heading,
    /// مشخصات نشر - publication statement
    Publication,
    /// یادداشت - notes
    Note,
    /// فروست - series statement
    Series,
    /// شابک - ISBN
    Isbn,
    /// Any other label, in canonical form
    Other(String),
}

impl FieldLabel {
    /// Convert a label as rendered on a catalog page to a [`FieldLabel`].
    pub fn from_label(label: &str) -> Self {
        let canonical = canonical_label(label);
        match canonical.as_str() {
            "عنوان و نام پدیدآور" => FieldLabel::TitleAndResponsibility,
            "سرشناسه" => FieldLabel::Heading,
            "مشخصات نشر" => FieldLabel::Publication,
            "یادداشت" => FieldLabel::Note,
            "فروست" => FieldLabel::Series,
            "شابک" => FieldLabel::Isbn,
            _ => FieldLabel::Other(canonical),
        }
    }

    /// Convert a [`FieldLabel`] back to its canonical label text.
    pub fn as_label(&self) -> &str {
        match self {
            FieldLabel::TitleAndResponsibility => "عنوان و نام پدیدآور",
            FieldLabel::Heading => "سرشناسه",
            FieldLabel::Publication => "مشخصات نشر",
            FieldLabel::Note => "یادداشت",
            FieldLabel::Series => "فروست",
            FieldLabel::Isbn => "شابک",
            FieldLabel::Other(label) => label,
        }
    }
}

/// Strip marks and a trailing colon, and fold Arabic letter forms to Persian.
fn canonical_label(label: &str) -> String {
    let folded: String = normalize(label)
        .chars()
        .filter(|&c| c != '\u{200E}')
        .map(|c| match c {
            'ي' => 'ی',
            'ك' => 'ک',
            c => c,
        })
        .collect();
    folded.trim_end_matches(':').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("\u{200f}عنوان و نام پديدآور", FieldLabel::TitleAndResponsibility)]
    #[case("عنوان و نام پدیدآور", FieldLabel::TitleAndResponsibility)]
    #[case("\u{200f}سرشناسه", FieldLabel::Heading)]
    #[case("\u{200f}مشخصات نشر", FieldLabel::Publication)]
    #[case("\u{200f}يادداشت", FieldLabel::Note)]
    #[case("\u{200f}فروست", FieldLabel::Series)]
    #[case("\u{200f}\u{200f}شابک", FieldLabel::Isbn)]
    #[case("شابک:", FieldLabel::Isbn)]
    #[case("\u{200f}موضوع", FieldLabel::Other("موضوع".to_string()))]
    fn test_from_label(#[case] input: &str, #[case] expected: FieldLabel) {
        assert_eq!(FieldLabel::from_label(input), expected);
    }

    #[rstest]
    #[case(FieldLabel::Heading, "سرشناسه")]
    #[case(FieldLabel::Isbn, "شابک")]
    #[case(FieldLabel::Other("موضوع".to_string()), "موضوع")]
    fn test_as_label(#[case] input: FieldLabel, #[case] expected: &str) {
        assert_eq!(input.as_label(), expected);
    }

    #[test]
    fn test_label_round_trip_is_stable() {
        for label in [
            FieldLabel::TitleAndResponsibility,
            FieldLabel::Heading,
            FieldLabel::Publication,
            FieldLabel::Note,
            FieldLabel::Series,
            FieldLabel::Isbn,
        ] {
            assert_eq!(FieldLabel::from_label(label.as_label()), label);
        }
    }
}
