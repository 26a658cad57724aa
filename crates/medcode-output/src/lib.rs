//! Output files of the coding pipeline.
//!
//! Tables go through polars' CSV writer with the delimiter and quoting each
//! downstream consumer expects; the ontology export is written as Turtle.

pub mod error;
pub mod frame;
pub mod paths;
pub mod turtle;
pub mod writers;

pub use error::{OutputError, Result};
pub use frame::{CsvFormat, ensure_parent_dir, format_flag, format_score};
pub use paths::{anonymized_path, identified_path, long_format_path, wide_format_path};
pub use turtle::{render_turtle, write_turtle};
pub use writers::{
    ExtractionFiles, write_anonymized, write_choice_selections, write_extraction,
    write_identified, write_long_format, write_rainbow_table, write_table, write_wide_format,
};
