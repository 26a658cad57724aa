use serde::{Deserialize, Serialize};

/// A multiple-choice questionnaire column whose selection implies a drug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceCode {
    pub column: String,
    pub code: String,
}

impl ChoiceCode {
    pub fn new(column: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            code: code.into(),
        }
    }
}

/// A participant who ticked a multiple-choice medication answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSelection {
    pub participant_id: String,
    pub code: String,
}
