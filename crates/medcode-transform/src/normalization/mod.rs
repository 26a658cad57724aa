//! Text cleaning stages for free-text medication answers.
//!
//! - **normalizer**: lowercasing, dosage removal and punctuation cleanup
//! - **tokenizer**: Treebank-style word tokens
//! - **splitter**: stopword/manufacturer removal and guarded splitting
//! - **filter**: per-word cleanup and rejection

pub mod filter;
pub mod normalizer;
pub mod splitter;
pub mod tokenizer;

pub use filter::TermFilter;
pub use normalizer::{collapse_whitespace, normalize_answer, strip_dosages};
pub use splitter::{GuardedSplit, WordSplitter, drop_tokens, split_guarded};
pub use tokenizer::tokenize_words;
