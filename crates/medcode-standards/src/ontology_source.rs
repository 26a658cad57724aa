//! Curated ontology source table.

use std::path::Path;

use medcode_ingest::{ReadOptions, read_delimited};
use medcode_model::{OntologyRecord, TextEncoding};

use crate::error::{Result, StandardsError};

const SOURCE_COLUMNS: usize = 4;

/// Strips one pair of surrounding double quotes and any stray ones at the ends.
fn unquote(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_string()
}

/// Reads the tab separated source table.
///
/// Columns are positional: resource, substance, ATC code, parent URI and an
/// optional label. The header row is skipped.
pub fn load_ontology_records(path: &Path, encoding: TextEncoding) -> Result<Vec<OntologyRecord>> {
    let options = ReadOptions::tab().with_encoding(encoding);
    let table = read_delimited(path, &options)?;
    let mut records = Vec::with_capacity(table.height());
    for (idx, row) in table.rows.iter().enumerate() {
        if row.len() < SOURCE_COLUMNS {
            return Err(StandardsError::InvalidRow {
                path: path.to_path_buf(),
                line: idx + 2,
                message: format!("expected at least {SOURCE_COLUMNS} columns, found {}", row.len()),
            });
        }
        let resource = unquote(&row[0]);
        if resource.is_empty() {
            return Err(StandardsError::InvalidRow {
                path: path.to_path_buf(),
                line: idx + 2,
                message: "blank resource".to_string(),
            });
        }
        let label = row.get(4).map(|value| unquote(value)).filter(|value| !value.is_empty());
        records.push(OntologyRecord {
            resource,
            substance: unquote(&row[1]),
            code: unquote(&row[2]),
            parent_uri: unquote(&row[3]),
            label,
        });
    }
    tracing::info!(path = %path.display(), records = records.len(), "loaded ontology source");
    Ok(records)
}
