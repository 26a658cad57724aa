use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid question list '{0}': expected numbers like 2-10 or 2,3,7")]
    InvalidQuestionList(String),
    #[error("unknown text encoding '{0}'")]
    UnknownEncoding(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
