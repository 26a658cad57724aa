//! String tables written through polars' CSV writer.

use std::fs::{self, File};
use std::path::Path;

use polars::prelude::{
    Column, CsvWriter, DataFrame, IntoColumn, NamedFrom, QuoteStyle, SerWriter, Series,
};

use crate::error::{OutputError, Result};

/// Delimiter, quoting and header settings of an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvFormat {
    pub separator: u8,
    pub quote_style: QuoteStyle,
    pub include_header: bool,
}

impl CsvFormat {
    /// Tab separated, quoting only where needed.
    pub fn tab() -> Self {
        Self {
            separator: b'\t',
            quote_style: QuoteStyle::Necessary,
            include_header: true,
        }
    }

    /// `;` separated, quoting only where needed.
    pub fn semicolon() -> Self {
        Self {
            separator: b';',
            ..Self::tab()
        }
    }

    /// Tab separated with every field quoted.
    pub fn tab_quoted() -> Self {
        Self {
            quote_style: QuoteStyle::Always,
            ..Self::tab()
        }
    }

    #[must_use]
    pub fn without_header(mut self) -> Self {
        self.include_header = false;
        self
    }
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Builds a frame of string columns. All columns must have the same length.
pub fn string_frame(columns: Vec<(&str, Vec<String>)>, path: &Path) -> Result<DataFrame> {
    let columns: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(columns).map_err(|source| OutputError::Frame {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a frame, creating parent directories.
pub fn write_frame(df: &mut DataFrame, path: &Path, format: CsvFormat) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(format.include_header)
        .with_separator(format.separator)
        .with_quote_style(format.quote_style)
        .finish(df)
        .map_err(|source| OutputError::Frame {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote table"
    );
    Ok(())
}

/// Builds and writes a string table in one step.
pub fn write_columns(path: &Path, columns: Vec<(&str, Vec<String>)>, format: CsvFormat) -> Result<usize> {
    let mut df = string_frame(columns, path)?;
    write_frame(&mut df, path, format)?;
    Ok(df.height())
}

/// Score text: integral values without a fraction, others as printed.
pub fn format_score(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Boolean text as written by the curation tool.
pub fn format_flag(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}
