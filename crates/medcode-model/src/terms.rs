use serde::{Deserialize, Serialize};

/// Answer values that mean "not answered" in the questionnaire export.
pub const IRRELEVANT_ANSWERS: &[&str] = &["9999", "8888"];

/// Returns true for answers that carry no information (sentinels or blank).
pub fn is_irrelevant_answer(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || IRRELEVANT_ANSWERS.contains(&trimmed)
}

/// A possible drug name cut out of one free-text answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateTerm {
    pub participant_id: String,
    pub term: String,
    /// The normalized answer the term was taken from; the join key used when
    /// coded results are matched back to participants.
    pub original: String,
}

impl CandidateTerm {
    pub fn new(
        participant_id: impl Into<String>,
        term: impl Into<String>,
        original: impl Into<String>,
    ) -> Self {
        Self {
            participant_id: participant_id.into(),
            term: term.into(),
            original: original.into(),
        }
    }

    /// Drops the participant identifier. There is no way back from the result.
    pub fn anonymize(&self) -> AnonymizedTerm {
        AnonymizedTerm {
            name: self.term.clone(),
            synonym: self.original.clone(),
        }
    }
}

/// A candidate term without its participant, as sent to the term matcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnonymizedTerm {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Synonym")]
    pub synonym: String,
}
