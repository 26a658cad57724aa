//! One writer per stage output file.

use std::path::{Path, PathBuf};

use medcode_ingest::DelimitedTable;
use medcode_model::{AnonymizedTerm, CandidateTerm, ChoiceSelection, CodedMatch, RainbowEntry, columns};
use medcode_transform::QuestionExtraction;

use crate::error::Result;
use crate::frame::{CsvFormat, format_flag, format_score, write_columns};
use crate::paths::{anonymized_path, identified_path};

/// Identified candidates: `PSEUDOIDEXT`, the question column and `Original`,
/// tab separated.
pub fn write_identified(path: &Path, column: &str, candidates: &[CandidateTerm]) -> Result<usize> {
    write_columns(
        path,
        vec![
            (
                columns::PARTICIPANT_ID,
                candidates.iter().map(|c| c.participant_id.clone()).collect(),
            ),
            (column, candidates.iter().map(|c| c.term.clone()).collect()),
            (
                columns::ORIGINAL,
                candidates.iter().map(|c| c.original.clone()).collect(),
            ),
        ],
        CsvFormat::tab(),
    )
}

/// Anonymized terms: `Name;Synonym`.
pub fn write_anonymized(path: &Path, terms: &[AnonymizedTerm]) -> Result<usize> {
    write_columns(
        path,
        vec![
            (columns::NAME, terms.iter().map(|t| t.name.clone()).collect()),
            (columns::SYNONYM, terms.iter().map(|t| t.synonym.clone()).collect()),
        ],
        CsvFormat::semicolon(),
    )
}

/// Files written for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFiles {
    pub identified: PathBuf,
    pub identified_rows: usize,
    pub anonymized: PathBuf,
    pub anonymized_rows: usize,
}

/// Writes the identified and the anonymized file of a question.
pub fn write_extraction(out_dir: &Path, extraction: &QuestionExtraction) -> Result<ExtractionFiles> {
    let identified = identified_path(out_dir, &extraction.column);
    let identified_rows = write_identified(&identified, &extraction.column, &extraction.candidates)?;
    let anonymized = anonymized_path(out_dir, &extraction.column);
    let anonymized_rows = write_anonymized(&anonymized, &extraction.anonymized())?;
    tracing::info!(
        column = %extraction.column,
        identified_rows,
        anonymized_rows,
        "wrote extraction files"
    );
    Ok(ExtractionFiles {
        identified,
        identified_rows,
        anonymized,
        anonymized_rows,
    })
}

/// Long layout: `Name, Synonym, ontologyTermName, score, validated, Atccode,
/// review`, tab separated, every field quoted.
pub fn write_long_format(path: &Path, rows: &[CodedMatch]) -> Result<usize> {
    write_columns(
        path,
        vec![
            (columns::NAME, rows.iter().map(|r| r.name.clone()).collect()),
            (columns::SYNONYM, rows.iter().map(|r| r.synonym.clone()).collect()),
            (
                columns::ONTOLOGY_TERM_NAME,
                rows.iter().map(|r| r.ontology_term_name.clone()).collect(),
            ),
            (columns::SCORE, rows.iter().map(|r| format_score(r.score)).collect()),
            (columns::VALIDATED, rows.iter().map(|r| format_flag(r.validated)).collect()),
            (columns::ATC_CODE, rows.iter().map(|r| r.codes.clone()).collect()),
            (columns::REVIEW, rows.iter().map(|r| format_flag(r.review)).collect()),
        ],
        CsvFormat::tab_quoted(),
    )
}

/// Wide layout: `Name, Synonym, ontologyTermName, ontologyTermIRI, score,
/// validated, review, Atccode`, tab separated, every field quoted.
pub fn write_wide_format(path: &Path, rows: &[CodedMatch]) -> Result<usize> {
    write_columns(
        path,
        vec![
            (columns::NAME, rows.iter().map(|r| r.name.clone()).collect()),
            (columns::SYNONYM, rows.iter().map(|r| r.synonym.clone()).collect()),
            (
                columns::ONTOLOGY_TERM_NAME,
                rows.iter().map(|r| r.ontology_term_name.clone()).collect(),
            ),
            (
                columns::ONTOLOGY_TERM_IRI,
                rows.iter().map(|r| r.ontology_term_iri.clone()).collect(),
            ),
            (columns::SCORE, rows.iter().map(|r| format_score(r.score)).collect()),
            (columns::VALIDATED, rows.iter().map(|r| format_flag(r.validated)).collect()),
            (columns::REVIEW, rows.iter().map(|r| format_flag(r.review)).collect()),
            (columns::ATC_CODE, rows.iter().map(|r| r.codes.clone()).collect()),
        ],
        CsvFormat::tab_quoted(),
    )
}

/// Any string table, tab separated with its header.
pub fn write_table(path: &Path, table: &DelimitedTable) -> Result<usize> {
    let columns: Vec<(&str, Vec<String>)> = table
        .headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            (
                header.as_str(),
                (0..table.height())
                    .map(|row| table.value(row, idx).to_string())
                    .collect(),
            )
        })
        .collect();
    write_columns(path, columns, CsvFormat::tab())
}

/// Multiple-choice selections: `PSEUDOIDEXT<TAB>ATC`.
pub fn write_choice_selections(path: &Path, selections: &[ChoiceSelection]) -> Result<usize> {
    write_columns(
        path,
        vec![
            (
                columns::PARTICIPANT_ID,
                selections.iter().map(|s| s.participant_id.clone()).collect(),
            ),
            (columns::ATC, selections.iter().map(|s| s.code.clone()).collect()),
        ],
        CsvFormat::tab(),
    )
}

/// Rainbow table: `IRI<TAB>code` without header.
pub fn write_rainbow_table(path: &Path, entries: &[RainbowEntry]) -> Result<usize> {
    write_columns(
        path,
        vec![
            ("resource", entries.iter().map(|e| e.term_iri.clone()).collect()),
            ("code", entries.iter().map(|e| e.code.clone()).collect()),
        ],
        CsvFormat::tab().without_header(),
    )
}
