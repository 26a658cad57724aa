//! Delimited text tables.
//!
//! Every stage file is a small delimited table of strings. Cells are kept as
//! text; typed views are built on top by the callers that need them.

use std::path::Path;

use csv::ReaderBuilder;
use medcode_model::TextEncoding;

use crate::encoding::read_text;
use crate::error::{IngestError, Result};

/// How to read a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    pub delimiter: u8,
    pub encoding: TextEncoding,
    pub has_headers: bool,
    /// Trim leading/trailing whitespace of every cell.
    pub trim: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            encoding: TextEncoding::Latin1,
            has_headers: true,
            trim: false,
        }
    }
}

impl ReadOptions {
    pub fn tab() -> Self {
        Self::default()
    }

    pub fn semicolon() -> Self {
        Self {
            delimiter: b';',
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// A table of string cells. With headers, every row has exactly
/// `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimitedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DelimitedTable {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, matched exactly.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Position of a column that must exist.
    pub fn require_column(&self, name: &str, path: &Path) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })
    }

    /// Cell value, empty for cells past the end of a short row.
    pub fn value(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    /// All values of a named column in row order.
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map_or("", String::as_str))
                .collect(),
        )
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parses already decoded text.
pub fn parse_delimited(text: &str, options: &ReadOptions, path: &Path) -> Result<DelimitedTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let headers: Vec<String> = if options.has_headers {
        match records.next() {
            Some(record) => {
                let record = record.map_err(|e| IngestError::CsvParse {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                record.iter().map(normalize_header).collect()
            }
            None => {
                return Err(IngestError::EmptyFile {
                    path: path.to_path_buf(),
                });
            }
        }
    } else {
        Vec::new()
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row: Vec<String> = record
            .iter()
            .map(|value| {
                if options.trim {
                    value.trim().to_string()
                } else {
                    value.to_string()
                }
            })
            .collect();
        if options.has_headers {
            row.resize(headers.len(), String::new());
        }
        rows.push(row);
    }
    Ok(DelimitedTable { headers, rows })
}

/// Reads and parses a delimited file.
pub fn read_delimited(path: &Path, options: &ReadOptions) -> Result<DelimitedTable> {
    let text = read_text(path, options.encoding)?;
    let table = parse_delimited(&text, options, path)?;
    tracing::debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.height(),
        "read delimited table"
    );
    Ok(table)
}
