use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogbookError {
    #[error("Case not found: {0}")]
    CaseNotFound(String),

    #[error("Record has no id")]
    MissingId,

    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LogbookError>;
