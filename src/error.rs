//! Error Types
//!
//! Every failure the app can recover from. None of these are fatal: the
//! presentation layer turns them into toasts.

use thiserror::Error;

/// Storage backend failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("write rejected: {0}")]
    WriteRejected(String),
}

/// Application-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// Persisted state could not be parsed; caller reseeds
    #[error("malformed saved state: {0}")]
    MalformedState(String),
    /// Storage refused the write; in-memory list stays authoritative
    #[error("could not save list: {0}")]
    PersistenceWrite(#[from] StorageError),
    /// Imported CSV had no parseable rows; list left unchanged
    #[error("no valid rows in CSV")]
    NoValidRows,
    /// Both clipboard mechanisms failed
    #[error("clipboard copy failed: {0}")]
    Clipboard(String),
    #[error("could not read file: {0}")]
    FileRead(String),
    #[error("export failed: {0}")]
    Export(String),
    /// The session was disposed before the action ran
    #[error("ranking session is no longer available")]
    SessionClosed,
}

pub type RankingResult<T> = Result<T, RankingError>;
