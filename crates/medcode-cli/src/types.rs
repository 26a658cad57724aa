use std::path::PathBuf;

use medcode_model::{QuestionnaireSchema, TextEncoding};
use medcode_transform::{ExtractOptions, MatchOptions};

/// Inputs of the extraction stage.
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    pub datasource: PathBuf,
    pub output_dir: PathBuf,
    pub encoding: TextEncoding,
    pub options: ExtractOptions,
    pub vocabulary_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ExtractResult {
    pub datasource: PathBuf,
    pub output_dir: PathBuf,
    pub participants: usize,
    pub questions: Vec<QuestionSummary>,
}

#[derive(Debug)]
pub struct QuestionSummary {
    pub column: String,
    pub source_columns: usize,
    pub answered: usize,
    pub identified_rows: usize,
    pub anonymized_rows: usize,
    pub identified: PathBuf,
    pub anonymized: PathBuf,
}

/// Inputs of the code matching stage.
#[derive(Debug, Clone)]
pub struct MatchCodesRequest {
    pub scored: PathBuf,
    pub rainbow: PathBuf,
    pub options: MatchOptions,
    pub long_output: Option<PathBuf>,
    pub wide_output: Option<PathBuf>,
    pub encoding: TextEncoding,
}

#[derive(Debug)]
pub struct MatchCodesResult {
    pub scored_rows: usize,
    pub rainbow_entries: usize,
    /// Scored rows whose ontology term has no code.
    pub uncoded: usize,
    pub long: Option<WrittenFile>,
    pub wide: Option<WrittenFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub rows: usize,
}

/// Inputs of the back-matching stage.
#[derive(Debug, Clone)]
pub struct MatchBackRequest {
    pub answers: PathBuf,
    pub codes: PathBuf,
    pub output: PathBuf,
    pub encoding: TextEncoding,
}

#[derive(Debug)]
pub struct MatchBackResult {
    pub identified_rows: usize,
    pub coded_rows: usize,
    pub output: WrittenFile,
}

/// Inputs of the multiple-choice stage.
#[derive(Debug, Clone)]
pub struct MultipleChoiceRequest {
    pub datasource: PathBuf,
    pub codes: PathBuf,
    pub output: PathBuf,
    pub schema: QuestionnaireSchema,
    pub encoding: TextEncoding,
}

#[derive(Debug)]
pub struct MultipleChoiceResult {
    pub entries: usize,
    pub missing_columns: Vec<String>,
    pub output: WrittenFile,
}

/// Inputs of the ontology export.
#[derive(Debug, Clone)]
pub struct OntologyRequest {
    pub source: PathBuf,
    pub rainbow_output: PathBuf,
    pub turtle_output: PathBuf,
    pub encoding: TextEncoding,
}

#[derive(Debug)]
pub struct OntologyResult {
    pub records: usize,
    pub statements: usize,
    pub rainbow: WrittenFile,
    pub turtle: PathBuf,
}
