//! Record to metadata extraction.
//!
//! [`MetadataExtractor`] runs every field parser over a
//! [`BibliographicRecord`] and assembles a [`BookMetadata`].
//!
//! # Example
//!
//! ```
//! use nlaimeta::{BibliographicRecord, MetadataExtractor};
//!
//! let record = BibliographicRecord::from_fields([
//!     ("\u{200f}عنوان و نام پديدآور", "شغل مناسب شما: ... / ترجمه فلانی"),
//!     ("\u{200f}مشخصات نشر", "تهران : نشر ققنوس، ۱۳۹۰."),
//! ]);
//!
//! let metadata = MetadataExtractor::new().parse(&record);
//! assert_eq!(metadata.title, "شغل مناسب شما: ...");
//! assert_eq!(metadata.publisher, "ققنوس");
//! assert_eq!(metadata.translators, vec!["فلانی"]);
//! ```

use crate::fields::{
    parse_author, parse_isbn, parse_original_title, parse_publisher, parse_series, parse_title,
    parse_translators,
};
use crate::lookup::{CatalogLookup, RecordSource};
use crate::record::{BibliographicRecord, FieldLabel};
use crate::{BookMetadata, MetadataError, Result};

/// Configuration options for [`MetadataExtractor`].
#[derive(Debug, Default, Clone)]
pub struct ExtractorConfig {
    /// Whether [`MetadataExtractor::parse_all`] spreads records over the rayon
    /// thread pool. Has no effect without the `parallel` feature.
    pub run_in_parallel: bool,
}

/// Extracts [`BookMetadata`] from catalog records.
///
/// The extractor holds no state besides its configuration and can be shared
/// between threads.
#[derive(Debug, Default, Clone)]
pub struct MetadataExtractor {
    config: ExtractorConfig,
}

impl MetadataExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Extract the metadata of a single record.
    ///
    /// Absent fields produce empty values.
    pub fn parse(&self, record: &BibliographicRecord) -> BookMetadata {
        let (title, responsibility) =
            parse_title(record.field(&FieldLabel::TitleAndResponsibility));
        let (author_name, author_name_latin) = parse_author(record.field(&FieldLabel::Heading));

        let metadata = BookMetadata {
            title,
            publisher: parse_publisher(record.field(&FieldLabel::Publication)),
            author_name,
            author_name_latin,
            original_title: parse_original_title(record.field(&FieldLabel::Note)),
            translators: parse_translators(&responsibility),
            series: parse_series(record.field(&FieldLabel::Series)),
            isbn: parse_isbn(record.field(&FieldLabel::Isbn)),
            link: record.location().map(ToString::to_string),
        };

        tracing::debug!(
            title = %metadata.title,
            isbn = %metadata.isbn,
            translators = metadata.translators.len(),
            series = metadata.series.len(),
            "extracted record metadata"
        );
        metadata
    }

    /// Extract the metadata of many records, preserving input order.
    pub fn parse_all(&self, records: &[BibliographicRecord]) -> Vec<BookMetadata> {
        #[cfg(feature = "parallel")]
        if self.config.run_in_parallel {
            use rayon::prelude::*;

            return records.par_iter().map(|record| self.parse(record)).collect();
        }

        records.iter().map(|record| self.parse(record)).collect()
    }

    /// Look up a book by ISBN, fetch its record and extract its metadata.
    ///
    /// `reference_title` helps the lookup choose between several records
    /// sharing an ISBN.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::NotFound`] when the lookup finds no record,
    /// and passes lookup or retrieval errors through unchanged.
    pub fn fetch_by_isbn<L, S>(
        &self,
        lookup: &L,
        source: &S,
        isbn: &str,
        reference_title: Option<&str>,
    ) -> Result<BookMetadata>
    where
        L: CatalogLookup + ?Sized,
        S: RecordSource + ?Sized,
    {
        let Some(location) = lookup.locate(isbn, reference_title)? else {
            tracing::warn!(isbn, "no catalog record for isbn");
            return Err(MetadataError::NotFound {
                isbn: isbn.to_string(),
            });
        };

        tracing::debug!(isbn, location = %location, "fetching catalog record");
        let mut record = source.fetch(&location)?;
        if record.location().is_none() {
            record = record.with_location(location);
        }

        Ok(self.parse(&record))
    }
}
