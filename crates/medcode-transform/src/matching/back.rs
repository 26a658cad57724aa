//! Re-linking coded results to participants.

use std::collections::HashMap;

use medcode_ingest::DelimitedTable;
use medcode_model::columns;

use crate::error::{Result, TransformError};

fn require(table: &DelimitedTable, column: &str, name: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| TransformError::MissingColumn {
            column: column.to_string(),
            table: name.to_string(),
        })
}

/// Left-joins coded rows onto identified candidate rows by their original
/// answer text.
///
/// The coded table's `Synonym` column is the key and is dropped from the
/// output. Every identified row yields one row per matching coded row, or a
/// single row with empty coded cells. Blank keys never match. Column names
/// present on both sides get `_x` and `_y` suffixes.
pub fn match_back(identified: &DelimitedTable, coded: &DelimitedTable) -> Result<DelimitedTable> {
    let left_key = require(identified, columns::ORIGINAL, "identified file")?;
    let right_key = require(coded, columns::SYNONYM, "coded file")?;

    let right_columns: Vec<usize> = (0..coded.headers.len())
        .filter(|&idx| idx != right_key)
        .collect();

    let mut headers: Vec<String> = identified
        .headers
        .iter()
        .map(|header| {
            let clashes = right_columns
                .iter()
                .any(|&idx| &coded.headers[idx] == header);
            if clashes && header != columns::ORIGINAL {
                format!("{header}_x")
            } else {
                header.clone()
            }
        })
        .collect();
    headers.extend(right_columns.iter().map(|&idx| {
        let header = &coded.headers[idx];
        if identified.headers.contains(header) {
            format!("{header}_y")
        } else {
            header.clone()
        }
    }));

    let mut index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (row, cells) in coded.rows.iter().enumerate() {
        let key = cells.get(right_key).map_or("", String::as_str);
        if !key.trim().is_empty() {
            index.entry(key).or_default().push(row);
        }
    }

    let mut rows = Vec::with_capacity(identified.height());
    let mut unmatched = 0usize;
    for (row, cells) in identified.rows.iter().enumerate() {
        let key = identified.value(row, left_key);
        let matches = if key.trim().is_empty() {
            None
        } else {
            index.get(key)
        };
        match matches {
            Some(coded_rows) => {
                for &coded_row in coded_rows {
                    let mut out = cells.clone();
                    out.extend(
                        right_columns
                            .iter()
                            .map(|&idx| coded.value(coded_row, idx).to_string()),
                    );
                    rows.push(out);
                }
            }
            None => {
                unmatched += 1;
                let mut out = cells.clone();
                out.resize(cells.len() + right_columns.len(), String::new());
                rows.push(out);
            }
        }
    }
    tracing::info!(
        identified = identified.height(),
        output = rows.len(),
        unmatched,
        "matched coded results back to participants"
    );
    Ok(DelimitedTable { headers, rows })
}
