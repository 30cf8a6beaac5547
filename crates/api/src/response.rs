//! Shared response envelope for API handlers.
//!
//! Every success body is `{ "data": ..., "message": ... }`, with `message`
//! omitted when the service returned none.

use hr_core::outcome::Success;
use serde::Serialize;

/// Standard `{ "data": T, "message": ... }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> From<Success<T>> for DataResponse<T> {
    fn from(success: Success<T>) -> Self {
        Self {
            data: success.value,
            message: success.message,
        }
    }
}
