//! One data-access service per table.

use hr_core::error::CoreError;
use validator::Validate;

use crate::store::StoreError;

pub mod company_rule;
pub mod project;
pub mod role;
pub mod task;

pub use company_rule::CompanyRuleService;
pub use project::ProjectService;
pub use role::RoleService;
pub use task::TaskService;

/// Actor stamped into `created_by` / `modified_by` when none is configured.
pub const DEFAULT_ACTOR: &str = "system";

/// Run the request's `validator` rules, mapping failures to `Validation`.
pub(crate) fn validate_request(request: &impl Validate) -> Result<(), CoreError> {
    request
        .validate()
        .map_err(|errors| CoreError::validation(errors.to_string()))
}

/// Fold an unexpected store failure into the generic error category.
pub(crate) fn store_failure(action: &str, err: StoreError) -> CoreError {
    tracing::error!(error = %err, action, "Store operation failed");
    CoreError::internal(format!("An error occurred while {action}: {err}"))
}
