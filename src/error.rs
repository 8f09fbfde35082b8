use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitstatsError>;

#[derive(Error, Debug)]
pub enum GitstatsError {
    #[error("Cannot scan {}: {reason}", path.display())]
    Discovery { path: PathBuf, reason: String },
    #[error("Git log failed for {}: {message}", repository.display())]
    Extraction { repository: PathBuf, message: String },
    #[error("Malformed log row (expected 3 fields, found {fields}): {row:?}")]
    MalformedRow { row: String, fields: usize },
    #[error("Invalid date: {value:?}")]
    DateParse { value: String },
    #[error("Directory walk error: {0}")]
    Walk(#[from] ignore::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GitstatsError {
    /// Row-level errors are recoverable: the row is dropped and extraction goes on.
    pub fn is_row_error(&self) -> bool {
        matches!(self, GitstatsError::MalformedRow { .. } | GitstatsError::DateParse { .. })
    }
}
