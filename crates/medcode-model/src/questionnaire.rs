use std::collections::BTreeMap;

/// One participant's raw answers.
///
/// Missing answers are stored as empty strings. Rows are never mutated after
/// loading; every later stage derives new records from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionnaireRow {
    pub participant_id: String,
    pub answers: BTreeMap<String, String>,
}

impl QuestionnaireRow {
    pub fn new(participant_id: impl Into<String>) -> Self {
        Self {
            participant_id: participant_id.into(),
            answers: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_answer(mut self, column: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.insert(column.into(), answer.into());
        self
    }

    /// Raw answer for a column, `None` when the column was not loaded.
    pub fn answer(&self, column: &str) -> Option<&str> {
        self.answers.get(column).map(String::as_str)
    }
}
