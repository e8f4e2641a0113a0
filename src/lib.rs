//! Extract normalized book metadata from National Library of Iran catalog records.
//!
//! The catalog publishes each record as a set of loosely structured Persian
//! text fields: a title field that also carries the responsibility statement,
//! a surname-first heading, a publication statement, free-text notes and a
//! series statement. `nlaimeta` turns those fields into clean values.
//!
//! # Key Features
//!
//! - **Text normalization**: strips direction marks and joiners, tidies
//!   spacing, and folds the several Persian comma and semicolon code points
//!   where a field splits on them
//! - **Field parsers**: title, author (Persian and Latin), translators,
//!   publisher, original title, series and ISBN, each a pure function
//! - **Lookup contracts**: traits for the catalog search and page retrieval
//!   collaborators, plus fuzzy selection of a search result by title
//!
//! # Basic Usage
//!
//! ```rust
//! use nlaimeta::{BibliographicRecord, MetadataExtractor};
//!
//! let record = BibliographicRecord::from_fields([
//!     ("\u{200f}عنوان و نام پديدآور", "سمفونی مردگان / عباس معروفی"),
//!     ("\u{200f}سرشناسه", "معروفی، عباس، ۱۳۳۶-"),
//!     ("\u{200f}فروست", "پرسی جکسون؛۱. قهرمانان المپ؛۲."),
//! ]);
//!
//! let metadata = MetadataExtractor::new().parse(&record);
//! assert_eq!(metadata.title, "سمفونی مردگان");
//! assert_eq!(metadata.author_name, "عباس معروفی");
//! assert_eq!(metadata.series, vec!["پرسی جکسون", "قهرمانان المپ"]);
//! assert!(metadata.translators.is_empty());
//! ```
//!
//! # Individual Fields
//!
//! Every parser can be used on its own:
//!
//! ```rust
//! use nlaimeta::fields::{parse_author, parse_publisher};
//!
//! assert_eq!(parse_publisher("تهران : نشر ققنوس، ۱۳۹۰."), "ققنوس");
//! assert_eq!(
//!     parse_author("نورثفیلد، گری.\nNorthfield, Gary."),
//!     ("گری نورثفیلد".to_string(), "Gary Northfield".to_string())
//! );
//! ```
//!
//! # Error Handling
//!
//! A missing field or a field that does not follow the catalog convention is
//! not an error: the corresponding value is simply empty. [`MetadataError`]
//! only reports failures of the lookup and retrieval collaborators, see
//! [`MetadataExtractor::fetch_by_isbn`].
//!
//! # Thread Safety
//!
//! Parsers keep no state; compiled patterns are built once and shared
//! read-only. With the `parallel` feature, [`MetadataExtractor::parse_all`]
//! can extract many records on the rayon thread pool.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod extract;
pub mod fields;
pub mod lookup;
pub mod normalize;
pub mod record;
mod regex;

// Reexports
pub use extract::{ExtractorConfig, MetadataExtractor};
pub use lookup::{CatalogLookup, RecordLocation, RecordSource};
pub use record::{BibliographicRecord, FieldLabel};

/// A specialized Result type for lookup and retrieval operations.
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Errors raised by the catalog collaborators.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("No book with ISBN {isbn}")]
    NotFound { isbn: String },

    #[error("Invalid result link: {link} - {message}")]
    InvalidLink { link: String, message: String },

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

/// Metadata extracted from one catalog record.
///
/// Every field is empty when the record does not provide it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookMetadata {
    /// Title and subtitle
    pub title: String,
    /// Publisher name without legal-entity prefixes
    pub publisher: String,
    /// Author's name in Persian, given name first
    pub author_name: String,
    /// Author's name in Latin script, given name first
    pub author_name_latin: String,
    /// Original-language title of a translated work
    pub original_title: String,
    /// Translators in source order
    pub translators: Vec<String>,
    /// Series names in source order
    pub series: Vec<String>,
    /// ISBN without hyphens
    pub isbn: String,
    /// Location of the catalog record, when known
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_error_display() {
        let error = MetadataError::NotFound {
            isbn: "9789643113445".to_string(),
        };
        assert_eq!(error.to_string(), "No book with ISBN 9789643113445");

        let error = MetadataError::InvalidLink {
            link: "/search?x=1".to_string(),
            message: "missing record id".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid result link: /search?x=1 - missing record id"
        );
    }

    #[test]
    fn test_metadata_serialization() {
        let metadata = BookMetadata {
            title: "سمفونی مردگان".to_string(),
            translators: vec!["الف".to_string(), "الف".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_string(&metadata).unwrap();
        let back: BookMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metadata);
        assert_eq!(back.translators.len(), 2);
    }
}
