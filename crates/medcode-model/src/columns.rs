//! Column names shared by the files exchanged between stages.
//!
//! `Name` and `Synonym` are the keywords the external term matcher expects,
//! so they must stay stable across releases.

/// Participant identifier column in the questionnaire export.
pub const PARTICIPANT_ID: &str = "PSEUDOIDEXT";
/// Lightly normalized answer the candidate term was cut from.
pub const ORIGINAL: &str = "Original";
/// Candidate term column of the anonymized file.
pub const NAME: &str = "Name";
/// Original answer column of the anonymized file.
pub const SYNONYM: &str = "Synonym";
pub const ONTOLOGY_TERM_NAME: &str = "ontologyTermName";
pub const ONTOLOGY_TERM_IRI: &str = "ontologyTermIRI";
pub const SCORE: &str = "score";
pub const VALIDATED: &str = "validated";
pub const REVIEW: &str = "review";
pub const ATC_CODE: &str = "Atccode";
/// Code column of the multiple-choice output.
pub const ATC: &str = "ATC";
