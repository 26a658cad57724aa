//! Transformation stages of the coding pipeline.
//!
//! - **normalization**: answer normalization, tokenization, splitting and
//!   term filtering
//! - **pipeline**: per-question candidate extraction and anonymization
//! - **matching**: rainbow table join (long/wide) and back-matching
//! - **multiple_choice**: codes of ticked multiple-choice answers
//! - **ontology**: rainbow table and RDF statements from curated records

pub mod error;
pub mod matching;
pub mod multiple_choice;
pub mod normalization;
pub mod ontology;
pub mod pipeline;

pub use error::{Result, TransformError};
pub use matching::{MatchOptions, join_codes, long_format, match_back, split_codes, wide_format};
pub use multiple_choice::extract_choices;
pub use normalization::{TermFilter, WordSplitter, normalize_answer, tokenize_words};
pub use ontology::{RdfsPredicate, TermObject, Triple, ontology_triples, rainbow_entries};
pub use pipeline::{
    ExtractOptions, QuestionExtraction, TermExtractor, anonymize_terms, extract_questionnaire,
};
