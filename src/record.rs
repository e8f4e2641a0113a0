//! Catalog record input.
//!
//! A [`BibliographicRecord`] is the label to raw text mapping a record source
//! builds from one catalog page. The extractor only ever reads it.

mod labels;

pub use labels::FieldLabel;

use crate::lookup::RecordLocation;
use std::collections::HashMap;

/// Raw labeled fields of a single catalog record.
///
/// # Examples
///
/// ```
/// use nlaimeta::record::{BibliographicRecord, FieldLabel};
///
/// let record = BibliographicRecord::from_fields([
///     ("\u{200f}عنوان و نام پديدآور", "سمفونی مردگان / عباس معروفی"),
///     ("\u{200f}شابک", "978-964-311-344-5"),
/// ]);
/// assert_eq!(record.field(&FieldLabel::Isbn), "978-964-311-344-5");
/// assert_eq!(record.field(&FieldLabel::Series), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BibliographicRecord {
    fields: HashMap<FieldLabel, String>,
    location: Option<RecordLocation>,
}

impl BibliographicRecord {
    /// Build a record from `(label, value)` pairs as they appear on the page.
    ///
    /// Labels are canonicalized with [`FieldLabel::from_label`]. When a label
    /// appears more than once the first value wins.
    pub fn from_fields<I, L, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: AsRef<str>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (label, value) in fields {
            map.entry(FieldLabel::from_label(label.as_ref()))
                .or_insert_with(|| value.into());
        }
        Self {
            fields: map,
            location: None,
        }
    }

    /// Attach the location the record was retrieved from.
    #[must_use]
    pub fn with_location(mut self, location: RecordLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Raw value of a field, if the label is present.
    pub fn get(&self, label: &FieldLabel) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    /// Raw value of a field, or an empty string when absent.
    pub fn field(&self, label: &FieldLabel) -> &str {
        self.get(label).unwrap_or_default()
    }

    pub fn location(&self) -> Option<&RecordLocation> {
        self.location.as_ref()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<L: AsRef<str>, V: Into<String>> FromIterator<(L, V)> for BibliographicRecord {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        Self::from_fields(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_value_wins() {
        let record = BibliographicRecord::from_fields([
            ("\u{200f}يادداشت", "first"),
            ("یادداشت", "second"),
        ]);
        assert_eq!(record.len(), 1);
        assert_eq!(record.get(&FieldLabel::Note), Some("first"));
    }

    #[test]
    fn test_absent_field_is_empty() {
        let record = BibliographicRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.get(&FieldLabel::Heading), None);
        assert_eq!(record.field(&FieldLabel::Heading), "");
        assert!(record.location().is_none());
    }

    #[test]
    fn test_collect_from_pairs() {
        let record: BibliographicRecord = vec![
            ("\u{200f}فروست".to_string(), "پرسی جکسون؛۱."),
            ("\u{200f}موضوع".to_string(), "داستان"),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.field(&FieldLabel::Series), "پرسی جکسون؛۱.");
        assert_eq!(
            record.field(&FieldLabel::Other("موضوع".to_string())),
            "داستان"
        );
    }

    #[test]
    fn test_with_location() {
        let location = RecordLocation::new("http://opac.nlai.ir/opac-prod/bibliographic/5800683");
        let record = BibliographicRecord::default().with_location(location.clone());
        assert_eq!(record.location(), Some(&location));
    }
}
