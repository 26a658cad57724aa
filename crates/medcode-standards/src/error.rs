use std::path::PathBuf;

use medcode_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StandardsError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} line {line}: {message}")]
    InvalidRow {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, StandardsError>;
