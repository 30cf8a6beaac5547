//! The value every data-access operation returns.
//!
//! An [`Outcome`] is either a [`Success`] payload (with an optional
//! human-readable message) or a categorized [`CoreError`]. It is a plain
//! `Result`, so `?` and the usual combinators work on it.

use serde::Serialize;

use crate::error::CoreError;

/// Result of a data-access operation.
pub type Outcome<T> = Result<Success<T>, CoreError>;

/// A successful payload plus an optional message for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Success<T> {
    pub value: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Success<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            message: None,
        }
    }

    pub fn with_message(value: T, message: impl Into<String>) -> Self {
        Self {
            value,
            message: Some(message.into()),
        }
    }

    /// Drop the message and keep the payload.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Transform the payload, keeping the message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<U> {
        Success {
            value: f(self.value),
            message: self.message,
        }
    }
}
