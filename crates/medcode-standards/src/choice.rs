//! Hardcoded multiple-choice answer codes.

use std::path::Path;

use medcode_ingest::{ReadOptions, read_delimited};
use medcode_model::{ChoiceCode, TextEncoding};

use crate::error::{Result, StandardsError};

/// Reads the headerless `column<TAB>code` table, keeping file order.
pub fn load_choice_codes(path: &Path, encoding: TextEncoding) -> Result<Vec<ChoiceCode>> {
    let options = ReadOptions::tab()
        .with_encoding(encoding)
        .with_headers(false)
        .with_trim(true);
    let table = read_delimited(path, &options)?;
    let mut codes = Vec::with_capacity(table.height());
    for (idx, row) in table.rows.iter().enumerate() {
        match (row.first(), row.get(1)) {
            (Some(column), Some(code)) if !column.is_empty() => {
                codes.push(ChoiceCode::new(column.as_str(), code.as_str()));
            }
            _ => {
                return Err(StandardsError::InvalidRow {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    message: "expected a column name and a code".to_string(),
                });
            }
        }
    }
    tracing::info!(path = %path.display(), entries = codes.len(), "loaded choice codes");
    Ok(codes)
}
