//! Per-field extraction rules.
//!
//! Every parser here is a pure function from one raw catalog field to a
//! structured value. A field that does not follow the expected convention
//! yields an empty value, never an error.

mod author;
mod isbn;
mod original_title;
mod publisher;
mod series;
mod title;
mod translator;

pub use author::parse_author;
pub use isbn::parse_isbn;
pub use original_title::{ORIGINAL_TITLE_MARKER, parse_original_title};
pub use publisher::{PUBLISHER_PREFIXES, parse_publisher};
pub use series::parse_series;
pub use title::{BOOK_MARKER, parse_title};
pub use translator::{CO_ROLES, TRANSLATOR_MARKERS, parse_translators};
