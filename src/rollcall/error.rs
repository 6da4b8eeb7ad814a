use thiserror::Error;

/// A state-machine rejection. These are expected, recoverable outcomes:
/// the record is left untouched and the caller reports the reason.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Student is already checked in")]
    AlreadyCheckedIn,

    #[error("Student has already completed attendance for today")]
    AlreadyCompleted,

    #[error("Student must check in first")]
    NotCheckedIn,

    #[error("Student has already checked out")]
    AlreadyCheckedOut,
}

#[derive(Error, Debug)]
pub enum RollcallError {
    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidTransition(#[from] TransitionError),

    #[error("No students selected")]
    EmptySelection,

    #[error("Unsupported barcode text {text:?}: {reason}")]
    Barcode { text: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RollcallError>;
