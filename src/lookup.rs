//! Catalog lookup and record source contracts.
//!
//! Fetching pages and searching the catalog belong to the caller. This module
//! defines the two collaborator traits the extractor consumes, plus the
//! deterministic half of a lookup: choosing the best entry of an
//! already-fetched search result listing and turning its link into a record
//! location.
//!
//! # Example
//!
//! ```
//! use nlaimeta::lookup::{ResultMatcher, SearchResult};
//!
//! let results = vec![
//!     SearchResult::new("سمفونی مردگان", "/opac-prod/search/briefListSearch.do?id=2055747"),
//!     SearchResult::new("تسلی بخشی\u{200c}های فلسفه", "/opac-prod/search/briefListSearch.do?id=5800683"),
//! ];
//!
//! let matcher = ResultMatcher::new();
//! let best = matcher.select(Some("تسلی بخشی\u{200c}های فلسفه"), &results).unwrap();
//! let location = matcher.location_for(&best.link).unwrap();
//! assert_eq!(location.as_str(), "http://opac.nlai.ir/opac-prod/bibliographic/5800683");
//! ```

use crate::normalize::normalize;
use crate::record::BibliographicRecord;
use crate::{MetadataError, Result};
use serde::{Deserialize, Serialize};
use strsim::sorensen_dice;
use url::Url;

/// Default acceptance threshold for title similarity.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.2;

/// Root of the national library's public catalog.
pub const DEFAULT_CATALOG_BASE: &str = "http://opac.nlai.ir/opac-prod/";

/// Address of a single catalog record page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordLocation(String);

impl RecordLocation {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves an ISBN, optionally disambiguated by a title, to a record.
///
/// `Ok(None)` means the catalog has no matching record.
pub trait CatalogLookup {
    fn locate(&self, isbn: &str, reference_title: Option<&str>) -> Result<Option<RecordLocation>>;
}

/// Retrieves the labeled fields of the record at a location.
///
/// Retrieval failures are returned as errors and reach the caller unchanged.
pub trait RecordSource {
    fn fetch(&self, location: &RecordLocation) -> Result<BibliographicRecord>;
}

/// One entry of a catalog search result listing.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Displayed title of the entry
    pub title: String,
    /// Link to the entry, usually relative to the catalog base
    pub link: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Configuration for [`ResultMatcher`].
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Minimum similarity (exclusive) for a result to be accepted on score alone.
    pub similarity_threshold: f64,
    /// Base URL that result links and record locations are resolved against.
    pub catalog_base: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            catalog_base: DEFAULT_CATALOG_BASE.to_string(),
        }
    }
}

/// Picks the search result that corresponds to a reference title.
#[derive(Debug, Default, Clone)]
pub struct ResultMatcher {
    config: LookupConfig,
}

impl ResultMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: LookupConfig) -> Self {
        self.config = config;
        self
    }

    /// Select the result matching `reference_title`.
    ///
    /// Without a reference title the first result wins. Otherwise titles are
    /// normalized and scored against the reference; the best result is kept
    /// if its score exceeds the threshold or its title is contained in the
    /// reference.
    pub fn select<'a>(
        &self,
        reference_title: Option<&str>,
        results: &'a [SearchResult],
    ) -> Option<&'a SearchResult> {
        let Some(reference) = reference_title else {
            return results.first();
        };
        let reference = normalize(reference);

        let mut best = None;
        let mut best_score = 0.0;
        for result in results {
            let title = normalize(&result.title);
            let score = sorensen_dice(&reference, &title);
            tracing::trace!(score, title = %title, "scored search result");

            if score > best_score
                && (score > self.config.similarity_threshold || reference.contains(&title))
            {
                best = Some(result);
                best_score = score;
            }
        }

        if best.is_none() {
            tracing::debug!(reference = %reference, candidates = results.len(), "no search result accepted");
        }
        best
    }

    /// Build the record location for a search result link.
    ///
    /// The record id is read from the link's `id` query parameter.
    pub fn location_for(&self, link: &str) -> Result<RecordLocation> {
        let base = Url::parse(&self.config.catalog_base)?;
        let url = base.join(link)?;

        let id = url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| MetadataError::InvalidLink {
                link: link.to_string(),
                message: "missing record id".to_string(),
            })?;

        let location = base.join(&format!("bibliographic/{id}"))?;
        Ok(RecordLocation::new(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn results() -> Vec<SearchResult> {
        vec![
            SearchResult::new(
                "ویتامین\u{200c}های موفقیت",
                "/opac-prod/search/briefListSearch.do?command=FULL_VIEW&id=2055747",
            ),
            SearchResult::new(
                "\u{200f}کودک باهوش: مهارت نوشتن\u{200f}",
                "/opac-prod/search/briefListSearch.do?command=FULL_VIEW&id=4634555",
            ),
        ]
    }

    #[test]
    fn test_select_without_reference_takes_first() {
        let results = results();
        let selected = ResultMatcher::new().select(None, &results).unwrap();
        assert_eq!(selected, &results[0]);
    }

    #[test]
    fn test_select_empty_results() {
        assert!(ResultMatcher::new().select(None, &[]).is_none());
        assert!(ResultMatcher::new().select(Some("عنوان"), &[]).is_none());
    }

    #[test]
    fn test_select_best_scoring() {
        let results = results();
        let selected = ResultMatcher::new()
            .select(Some("کودک باهوش(4سالگی)مهارت نوشتن"), &results)
            .unwrap();
        assert_eq!(selected, &results[1]);
    }

    #[test]
    fn test_select_rejects_unrelated() {
        let results = results();
        let selected = ResultMatcher::new().select(Some("شازده کوچولو"), &results);
        assert!(selected.is_none());
    }

    #[test]
    fn test_containment_overrides_threshold() {
        let results = vec![SearchResult::new("ماه", "/x?id=1")];
        let config = LookupConfig {
            similarity_threshold: 0.99,
            ..Default::default()
        };
        let matcher = ResultMatcher::new().with_config(config);
        let selected = matcher.select(Some("ماه و خورشید"), &results);
        assert_eq!(selected, Some(&results[0]));
    }

    #[rstest]
    #[case(
        "/opac-prod/search/briefListSearch.do?command=FULL_VIEW&id=5800683&pageStatus=1",
        "http://opac.nlai.ir/opac-prod/bibliographic/5800683"
    )]
    #[case(
        "http://opac.nlai.ir/opac-prod/search/briefListSearch.do?id=5134460",
        "http://opac.nlai.ir/opac-prod/bibliographic/5134460"
    )]
    #[case(
        "search/briefListSearch.do?id=42",
        "http://opac.nlai.ir/opac-prod/bibliographic/42"
    )]
    fn test_location_for(#[case] link: &str, #[case] expected: &str) {
        let location = ResultMatcher::new().location_for(link).unwrap();
        assert_eq!(location.as_str(), expected);
    }

    #[rstest]
    #[case("/opac-prod/search/briefListSearch.do?command=FULL_VIEW")]
    #[case("/opac-prod/search/briefListSearch.do?id=")]
    fn test_location_for_missing_id(#[case] link: &str) {
        let err = ResultMatcher::new().location_for(link).unwrap_err();
        assert!(matches!(err, MetadataError::InvalidLink { .. }));
    }

    #[test]
    fn test_location_for_invalid_base() {
        let config = LookupConfig {
            catalog_base: "not a url".to_string(),
            ..Default::default()
        };
        let err = ResultMatcher::new()
            .with_config(config)
            .location_for("/x?id=1")
            .unwrap_err();
        assert!(matches!(err, MetadataError::Url(_)));
    }

    #[test]
    fn test_record_location_display() {
        let location = RecordLocation::new("http://opac.nlai.ir/opac-prod/bibliographic/1");
        assert_eq!(location.to_string(), location.as_str());
    }
}
