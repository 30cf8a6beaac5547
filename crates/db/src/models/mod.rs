//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` + `Validate` request DTO
//! - An insert record and a `Serialize` response DTO

use hr_core::types::Date;
use validator::ValidationError;

pub mod company_rule;
pub mod project;
pub mod role;
pub mod status;
pub mod task;

/// Shared field check: text must contain something other than whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Shared schema check: an end date may not precede its start date.
pub(crate) fn check_date_range(
    start: Option<Date>,
    end: Option<Date>,
) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(ValidationError::new("date_range")
            .with_message("end_date must not be before start_date".into())),
        _ => Ok(()),
    }
}
