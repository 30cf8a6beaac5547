//! Role entity model and DTOs.

use hr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::not_blank;

/// A role row from the `roles` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub role_code: String,
    pub role_name: String,
    pub unique_name: String,
    pub delete_flag: bool,
    pub created_at: Timestamp,
    pub created_by: Option<String>,
    pub modified_at: Option<Timestamp>,
    pub modified_by: Option<String>,
}

/// Request body for creating a role. All fields are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RoleRequest {
    #[validate(required, length(min = 1, max = 100), custom(function = "not_blank"))]
    pub role_name: Option<String>,
    #[validate(required, length(min = 1, max = 50), custom(function = "not_blank"))]
    pub role_code: Option<String>,
    #[validate(required, length(min = 1, max = 100), custom(function = "not_blank"))]
    pub unique_name: Option<String>,
}

impl RoleRequest {
    /// Build the insert record. Returns `None` if a required field is missing,
    /// which [`Validate::validate`] already rejects.
    pub fn to_new_role(&self, created_by: &str) -> Option<NewRole> {
        Some(NewRole {
            role_code: self.role_code.clone()?,
            role_name: self.role_name.clone()?,
            unique_name: self.unique_name.clone()?,
            created_by: created_by.to_string(),
        })
    }
}

/// Request body for updating a role. Absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RoleUpdateRequest {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub role_name: Option<String>,
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub unique_name: Option<String>,
}

/// Insert record for the `roles` table.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub role_code: String,
    pub role_name: String,
    pub unique_name: String,
    pub created_by: String,
}

/// Response shape for a role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleResponse {
    pub role_code: String,
    pub role_name: String,
    pub unique_name: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            role_code: role.role_code,
            role_name: role.role_name,
            unique_name: role.unique_name,
        }
    }
}
