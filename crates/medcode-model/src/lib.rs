//! Data model for the questionnaire medication coding pipeline.
//!
//! Every stage of the pipeline exchanges plain records defined here:
//! raw questionnaire rows, the candidate terms cut out of free-text answers,
//! scored matches coming back from manual curation and the coded results
//! that are finally joined back onto participants.

pub mod choice;
pub mod coding;
pub mod columns;
pub mod error;
pub mod ontology;
pub mod options;
pub mod questionnaire;
pub mod terms;

pub use choice::{ChoiceCode, ChoiceSelection};
pub use coding::{CodedMatch, RainbowEntry, ScoredMatch, deserialize_flag, parse_flag};
pub use error::{ModelError, Result};
pub use ontology::OntologyRecord;
pub use options::{CodeLayout, QuestionnaireSchema, TextEncoding, parse_question_list};
pub use questionnaire::QuestionnaireRow;
pub use terms::{AnonymizedTerm, CandidateTerm, is_irrelevant_answer};
