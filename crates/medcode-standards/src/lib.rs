//! Reference data for the coding pipeline.
//!
//! Vocabularies are built in and can be overridden per list from a directory
//! (`--vocabulary-dir` or `MEDCODE_VOCABULARY_DIR`). Tables such as the
//! rainbow table and the hardcoded multiple-choice codes are always read from
//! files.

pub mod choice;
pub mod error;
pub mod ontology_source;
pub mod rainbow;
pub mod vocabulary;

pub use choice::load_choice_codes;
pub use error::{Result, StandardsError};
pub use ontology_source::load_ontology_records;
pub use rainbow::{RainbowTable, load_rainbow_table};
pub use vocabulary::{
    SplitGuards, VOCABULARY_ENV_VAR, Vocabularies, Vocabulary, load_vocabularies,
    vocabulary_dir_from_env,
};
