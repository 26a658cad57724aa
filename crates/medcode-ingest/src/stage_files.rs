//! Readers for files produced between pipeline stages.

use std::path::Path;

use csv::ReaderBuilder;
use medcode_model::{ScoredMatch, TextEncoding, columns};

use crate::encoding::read_text;
use crate::error::{IngestError, Result};
use crate::table::{DelimitedTable, ReadOptions, read_delimited};

const SCORED_MATCH_COLUMNS: &[&str] = &[
    columns::NAME,
    columns::SYNONYM,
    columns::ONTOLOGY_TERM_NAME,
    columns::ONTOLOGY_TERM_IRI,
    columns::SCORE,
    columns::VALIDATED,
    columns::REVIEW,
];

/// Reads the `;` separated scored matching file returned by the term matcher.
///
/// Extra columns are ignored; a missing required column aborts.
pub fn read_scored_matches(path: &Path, encoding: TextEncoding) -> Result<Vec<ScoredMatch>> {
    let text = read_text(path, encoding)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();
    for required in SCORED_MATCH_COLUMNS {
        if !headers.iter().any(|header| header.trim() == *required) {
            return Err(IngestError::MissingColumn {
                column: (*required).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    let mut matches = Vec::new();
    for (line, record) in reader.deserialize::<ScoredMatch>().enumerate() {
        let record = record.map_err(|e| IngestError::InvalidRecord {
            path: path.to_path_buf(),
            message: format!("record {}: {e}", line + 1),
        })?;
        matches.push(record);
    }
    tracing::debug!(path = %path.display(), rows = matches.len(), "read scored matches");
    Ok(matches)
}

/// Reads a tab separated file with a header whose key column must exist.
pub fn read_keyed_table(
    path: &Path,
    key: &str,
    encoding: TextEncoding,
    trim: bool,
) -> Result<DelimitedTable> {
    let options = ReadOptions::tab().with_encoding(encoding).with_trim(trim);
    let table = read_delimited(path, &options)?;
    table.require_column(key, path)?;
    Ok(table)
}
