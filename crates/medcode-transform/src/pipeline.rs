//! Candidate term extraction for whole questions.

use std::collections::HashSet;

use medcode_ingest::{Questionnaire, RawAnswer};
use medcode_model::{AnonymizedTerm, CandidateTerm, QuestionnaireSchema, is_irrelevant_answer};
use medcode_standards::Vocabularies;
use tracing::{debug, info, info_span};

use crate::error::Result;
use crate::normalization::{TermFilter, WordSplitter, normalize_answer};

/// Settings of the extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub schema: QuestionnaireSchema,
    /// Report questions whose answers are all blank or sentinels; by default
    /// they are skipped like questions without columns.
    pub keep_empty_questions: bool,
}

impl ExtractOptions {
    #[must_use]
    pub fn with_schema(mut self, schema: QuestionnaireSchema) -> Self {
        self.schema = schema;
        self
    }

    #[must_use]
    pub fn with_keep_empty_questions(mut self, keep: bool) -> Self {
        self.keep_empty_questions = keep;
        self
    }
}

/// Turns raw answers into candidate terms.
#[derive(Debug, Clone)]
pub struct TermExtractor<'a> {
    splitter: WordSplitter<'a>,
    filter: TermFilter<'a>,
}

impl<'a> TermExtractor<'a> {
    pub fn new(vocabularies: &'a Vocabularies) -> Result<Self> {
        Ok(Self {
            splitter: WordSplitter::new(vocabularies),
            filter: TermFilter::new(vocabularies)?,
        })
    }

    /// Candidate terms of one answer, in split order.
    ///
    /// Sentinel and blank answers yield nothing. Every term carries the
    /// normalized answer as its `original`.
    pub fn candidates<'s>(
        &'s self,
        participant_id: &'s str,
        raw: &str,
    ) -> impl Iterator<Item = CandidateTerm> + 's {
        let pieces = if is_irrelevant_answer(raw) {
            Vec::new()
        } else {
            let normalized = normalize_answer(raw);
            if is_irrelevant_answer(&normalized) {
                Vec::new()
            } else {
                self.splitter
                    .split(&normalized)
                    .into_iter()
                    .map(|piece| (piece, normalized.clone()))
                    .collect()
            }
        };
        pieces.into_iter().filter_map(move |(piece, original)| {
            self.filter
                .apply(&piece)
                .map(|term| CandidateTerm::new(participant_id, term, original))
        })
    }

    /// Candidate terms for a list of answers, in answer order.
    pub fn extract(&self, answers: &[RawAnswer]) -> Vec<CandidateTerm> {
        answers
            .iter()
            .flat_map(|answer| self.candidates(&answer.participant_id, &answer.text))
            .collect()
    }
}

/// Candidate terms found for one question.
#[derive(Debug, Clone)]
pub struct QuestionExtraction {
    pub question: u32,
    /// Term column name in the identified output (`COVID24A2TXT`).
    pub column: String,
    pub source_columns: Vec<String>,
    /// Answers that were neither blank nor a sentinel.
    pub answered: usize,
    pub candidates: Vec<CandidateTerm>,
}

impl QuestionExtraction {
    pub fn anonymized(&self) -> Vec<AnonymizedTerm> {
        anonymize_terms(&self.candidates)
    }
}

/// Drops participant identifiers and repeated `(term, original)` pairs,
/// keeping the first occurrence.
pub fn anonymize_terms(candidates: &[CandidateTerm]) -> Vec<AnonymizedTerm> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .map(CandidateTerm::anonymize)
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

/// Extracts candidate terms for every configured question.
///
/// Questions without a matching column are skipped; so are questions without
/// a single usable answer unless `keep_empty_questions` is set.
pub fn extract_questionnaire(
    questionnaire: &Questionnaire,
    options: &ExtractOptions,
    vocabularies: &Vocabularies,
) -> Result<Vec<QuestionExtraction>> {
    let extractor = TermExtractor::new(vocabularies)?;
    let mut extractions = Vec::new();
    for &question in &options.schema.questions {
        let span = info_span!("question", question);
        let _guard = span.enter();
        let Some(answers) = questionnaire.question_answers(&options.schema, question) else {
            info!(
                column = %options.schema.text_column(question),
                "no free-text columns for question, skipping"
            );
            continue;
        };
        let answered = answers
            .answers
            .iter()
            .filter(|answer| !is_irrelevant_answer(&answer.text))
            .count();
        if answered == 0 && !options.keep_empty_questions {
            info!(column = %answers.column, "no usable answers, skipping");
            continue;
        }
        let candidates = extractor.extract(&answers.answers);
        debug!(
            column = %answers.column,
            answered,
            candidates = candidates.len(),
            "extracted candidate terms"
        );
        extractions.push(QuestionExtraction {
            question,
            column: answers.column,
            source_columns: answers.source_columns,
            answered,
            candidates,
        });
    }
    Ok(extractions)
}
