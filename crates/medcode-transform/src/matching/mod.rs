//! Code matching and back-matching.

pub mod back;
pub mod codes;

pub use back::match_back;
pub use codes::{LIST_SEPARATOR, MatchOptions, join_codes, long_format, split_codes, wide_format};
