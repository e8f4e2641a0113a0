//! Re-exports from either `regex` or `regex_lite`, depending on features.

#[cfg(feature = "lite")]
pub(crate) use regex_lite::{Captures, Regex, escape};
#[cfg(all(feature = "regex", not(feature = "lite")))]
pub(crate) use regex::{Captures, Regex, escape};

#[cfg(not(any(feature = "regex", feature = "lite")))]
compile_error!("nlaimeta requires the \"regex\" or \"lite\" feature to be enabled");
