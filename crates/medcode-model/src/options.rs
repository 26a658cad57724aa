//! Configuration shared across stages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::columns::PARTICIPANT_ID;
use crate::error::{ModelError, Result};

/// Character encoding of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextEncoding {
    /// Single-byte Western European text, as written by the questionnaire export.
    #[default]
    Latin1,
    Utf8,
}

impl FromStr for TextEncoding {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" | "cp1252" | "windows-1252" => {
                Ok(Self::Latin1)
            }
            "utf8" | "utf-8" => Ok(Self::Utf8),
            _ => Err(ModelError::UnknownEncoding(value.to_string())),
        }
    }
}

/// Output layout of the code matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CodeLayout {
    /// One code per row.
    #[default]
    Long,
    /// All codes of a match in one cell, grouped for manual review.
    Wide,
    Both,
}

impl CodeLayout {
    pub fn wants_long(self) -> bool {
        matches!(self, Self::Long | Self::Both)
    }

    pub fn wants_wide(self) -> bool {
        matches!(self, Self::Wide | Self::Both)
    }
}

/// Naming scheme of the free-text columns in a questionnaire export.
///
/// Column names follow `{prefix}{question}TXT[{line}]`, e.g. `COVID24A2TXT`
/// and `COVID24A10TXT7`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireSchema {
    pub id_column: String,
    pub prefix: String,
    pub questions: Vec<u32>,
}

impl Default for QuestionnaireSchema {
    fn default() -> Self {
        Self {
            id_column: PARTICIPANT_ID.to_string(),
            prefix: "COVID24A".to_string(),
            questions: (2..=10).collect(),
        }
    }
}

impl QuestionnaireSchema {
    #[must_use]
    pub fn with_id_column(mut self, id_column: impl Into<String>) -> Self {
        self.id_column = id_column.into();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_questions(mut self, questions: Vec<u32>) -> Self {
        self.questions = questions;
        self
    }

    /// Base column name for a question; also the name of the term column in
    /// the identified output file.
    pub fn text_column(&self, question: u32) -> String {
        format!("{}{question}TXT", self.prefix)
    }
}

/// Parses question lists such as `2-10`, `2,3,7` or `2-4,9`.
pub fn parse_question_list(raw: &str) -> Result<Vec<u32>> {
    let invalid = || ModelError::InvalidQuestionList(raw.to_string());
    let mut questions = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        if let Some((start, end)) = part.split_once('-') {
            let start: u32 = start.trim().parse().map_err(|_| invalid())?;
            let end: u32 = end.trim().parse().map_err(|_| invalid())?;
            if start > end {
                return Err(invalid());
            }
            questions.extend(start..=end);
        } else {
            questions.push(part.parse().map_err(|_| invalid())?);
        }
    }
    if questions.is_empty() {
        return Err(invalid());
    }
    questions.dedup();
    Ok(questions)
}
