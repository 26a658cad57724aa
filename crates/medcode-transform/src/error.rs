use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid {name} pattern: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("column '{column}' not found in {table}")]
    MissingColumn { column: String, table: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
