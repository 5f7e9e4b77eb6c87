use thiserror::Error;

/// Caller contract violations detected before reconciliation starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("Duplicate game in catalogue: {0}")]
    DuplicateGame(String),

    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    #[error("File {path} belongs to content type '{actual}', expected '{expected}'")]
    ContentTypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },
}
