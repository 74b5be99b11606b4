//! Player identity resolution
//!
//! Names arrive from independently operated platforms with inconsistent
//! formatting (suffixes, casing, shortened first names, reordered tokens).
//! Resolution is a two-step process: canonicalize with [`normalize_name`],
//! then pick the best candidate with [`FuzzyMatcher`].

mod fuzzy;
mod normalize;

pub use fuzzy::{partial_ratio, ratio, token_sort_ratio, FuzzyMatcher, DEFAULT_MATCH_THRESHOLD};
pub use normalize::{normalize_name, normalize_stat, NAME_SUFFIXES};
