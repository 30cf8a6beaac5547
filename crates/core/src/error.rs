//! Failure categories shared by every data-access operation.

use serde::Serialize;

/// A categorized failure.
///
/// Expected failure paths (missing rows, business-state checks, uniqueness
/// conflicts) are values of this type rather than panics; store failures are
/// folded into [`CoreError::Internal`] with the underlying message embedded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate record: {0}")]
    DuplicateRecord(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Discriminant of [`CoreError`], for callers that branch on category only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    Validation,
    DuplicateRecord,
    Internal,
}

impl CoreError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn duplicate_record(message: impl Into<String>) -> Self {
        Self::DuplicateRecord(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The category of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateRecord(_) => ErrorKind::DuplicateRecord,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// The human-readable message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::DuplicateRecord(msg)
            | Self::Internal(msg) => msg,
        }
    }
}
