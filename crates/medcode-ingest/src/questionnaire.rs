//! Questionnaire export loading and free-text column discovery.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, info};

use medcode_model::{QuestionnaireRow, QuestionnaireSchema, TextEncoding};

use crate::error::Result;
use crate::table::{DelimitedTable, ReadOptions, read_delimited};

/// A raw free-text answer with the participant who gave it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnswer {
    pub participant_id: String,
    pub text: String,
}

/// All answers for one free-text question, gathered over its text columns.
#[derive(Debug, Clone)]
pub struct QuestionAnswers {
    pub question: u32,
    /// Base column name (`{prefix}{question}TXT`).
    pub column: String,
    /// Source columns that contributed, in file order.
    pub source_columns: Vec<String>,
    pub answers: Vec<RawAnswer>,
}

/// A loaded questionnaire export.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    pub path: PathBuf,
    pub table: DelimitedTable,
    id_index: usize,
}

/// Returns the free-text columns of a question, in file order.
///
/// Matches `{prefix}{question}TXT` optionally followed by a line number, so
/// question 1 never picks up the columns of question 10.
pub fn select_question_columns(headers: &[String], prefix: &str, question: u32) -> Vec<String> {
    let pattern = format!(r"^{}{question}TXT\d*$", regex::escape(prefix));
    let Ok(matcher) = Regex::new(&pattern) else {
        return Vec::new();
    };
    headers
        .iter()
        .filter(|header| matcher.is_match(header))
        .cloned()
        .collect()
}

/// Reads a questionnaire export. The identifier column must exist.
pub fn load_questionnaire(
    path: &Path,
    schema: &QuestionnaireSchema,
    encoding: TextEncoding,
) -> Result<Questionnaire> {
    let options = ReadOptions::tab().with_encoding(encoding);
    let table = read_delimited(path, &options)?;
    let id_index = table.require_column(&schema.id_column, path)?;
    info!(
        path = %path.display(),
        participants = table.height(),
        columns = table.headers.len(),
        "loaded questionnaire"
    );
    Ok(Questionnaire {
        path: path.to_path_buf(),
        table,
        id_index,
    })
}

impl Questionnaire {
    pub fn participant_count(&self) -> usize {
        self.table.height()
    }

    pub fn participant_id(&self, row: usize) -> &str {
        self.table.value(row, self.id_index)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.table.column_index(name).is_some()
    }

    /// Answers of one question, column by column: every participant's answer
    /// in the first matching column, then every answer in the next one.
    ///
    /// Returns `None` when the export has no column for the question.
    pub fn question_answers(
        &self,
        schema: &QuestionnaireSchema,
        question: u32,
    ) -> Option<QuestionAnswers> {
        let source_columns = select_question_columns(&self.table.headers, &schema.prefix, question);
        if source_columns.is_empty() {
            return None;
        }
        let mut answers = Vec::with_capacity(source_columns.len() * self.table.height());
        for column in &source_columns {
            let Some(idx) = self.table.column_index(column) else {
                continue;
            };
            for row in 0..self.table.height() {
                answers.push(RawAnswer {
                    participant_id: self.participant_id(row).to_string(),
                    text: self.table.value(row, idx).to_string(),
                });
            }
        }
        debug!(
            question,
            columns = source_columns.len(),
            answers = answers.len(),
            "collected question answers"
        );
        Some(QuestionAnswers {
            question,
            column: schema.text_column(question),
            source_columns,
            answers,
        })
    }

    /// Rows restricted to the given columns (missing columns are skipped).
    pub fn rows(&self, columns: &[String]) -> Vec<QuestionnaireRow> {
        let indices: Vec<(String, usize)> = columns
            .iter()
            .filter_map(|name| {
                self.table
                    .column_index(name)
                    .map(|idx| (name.clone(), idx))
            })
            .collect();
        (0..self.table.height())
            .map(|row| {
                indices.iter().fold(
                    QuestionnaireRow::new(self.participant_id(row)),
                    |acc, (name, idx)| acc.with_answer(name.clone(), self.table.value(row, *idx)),
                )
            })
            .collect()
    }
}
