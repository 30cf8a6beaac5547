//! Data-access service for roles.

use std::sync::Arc;

use chrono::Utc;
use hr_core::error::CoreError;
use hr_core::outcome::{Outcome, Success};
use hr_db::models::role::{Role, RoleRequest, RoleResponse, RoleUpdateRequest};

use super::{store_failure, validate_request, DEFAULT_ACTOR};
use crate::store::{RoleStore, StoreError};

pub struct RoleService<S: ?Sized> {
    store: Arc<S>,
    actor: String,
}

/// Describe which unique column a role write collided on.
fn duplicate_role(constraint: &str, role_code: &str, unique_name: &str) -> CoreError {
    let message = match constraint {
        "uq_roles_role_code" => format!("A role with code '{role_code}' already exists!"),
        "uq_roles_unique_name" => {
            format!("A role with unique name '{unique_name}' already exists!")
        }
        _ => format!(
            "A role with code '{role_code}' or unique name '{unique_name}' already exists!"
        ),
    };
    CoreError::duplicate_record(message)
}

impl<S: RoleStore + ?Sized> RoleService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            actor: DEFAULT_ACTOR.to_string(),
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    /// Create a role and return its code.
    pub async fn create(&self, request: &RoleRequest) -> Outcome<String> {
        validate_request(request)?;
        let Some(new_role) = request.to_new_role(&self.actor) else {
            return Err(CoreError::validation(
                "role name, code and unique name are required",
            ));
        };

        match self.store.insert_role(&new_role).await {
            Ok(0) => Err(CoreError::internal("fail to create role!")),
            Ok(_) => {
                tracing::info!(code = %new_role.role_code, "Role created");
                Ok(Success::with_message(new_role.role_code, "role created success"))
            }
            Err(StoreError::UniqueViolation { constraint }) => Err(duplicate_role(
                &constraint,
                &new_role.role_code,
                &new_role.unique_name,
            )),
            Err(e) => Err(store_failure("creating role", e)),
        }
    }

    pub async fn get_all(&self) -> Outcome<Vec<RoleResponse>> {
        let roles = self
            .store
            .list_roles()
            .await
            .map_err(|e| store_failure("retrieving roles", e))?;

        if roles.is_empty() {
            return Err(CoreError::not_found("no roles found!"));
        }

        Ok(Success::new(roles.into_iter().map(RoleResponse::from).collect()))
    }

    pub async fn get_by_code(&self, code: &str) -> Outcome<RoleResponse> {
        let role = self
            .store
            .find_role_by_code(code)
            .await
            .map_err(|e| store_failure("retrieving role", e))?
            .ok_or_else(|| CoreError::not_found("no role found!"))?;

        Ok(Success::new(RoleResponse::from(role)))
    }

    /// Rename a role. Absent fields keep their stored value.
    pub async fn update(&self, code: &str, request: &RoleUpdateRequest) -> Outcome<()> {
        validate_request(request)?;

        let existing = self
            .store
            .find_role_by_code(code)
            .await
            .map_err(|e| store_failure("updating role", e))?
            .ok_or_else(|| CoreError::not_found("no role found to update!"))?;

        let merged = Role {
            role_name: request
                .role_name
                .clone()
                .unwrap_or_else(|| existing.role_name.clone()),
            unique_name: request
                .unique_name
                .clone()
                .unwrap_or_else(|| existing.unique_name.clone()),
            modified_at: Some(Utc::now()),
            modified_by: Some(self.actor.clone()),
            ..existing
        };

        match self.store.update_role(&merged).await {
            Ok(0) => Err(CoreError::internal("fail to update role!")),
            Ok(_) => {
                tracing::info!(code, "Role updated");
                Ok(Success::with_message((), "role updated success"))
            }
            Err(StoreError::UniqueViolation { constraint }) => Err(duplicate_role(
                &constraint,
                &merged.role_code,
                &merged.unique_name,
            )),
            Err(e) => Err(store_failure("updating role", e)),
        }
    }

    /// Flag a live role as deleted. The row itself is kept.
    pub async fn delete(&self, code: &str) -> Outcome<()> {
        let role = self
            .store
            .find_role_by_code(code)
            .await
            .map_err(|e| store_failure("deleting role", e))?
            .ok_or_else(|| CoreError::not_found("no role found to delete!"))?;

        match self
            .store
            .soft_delete_role(role.id, Utc::now(), &self.actor)
            .await
        {
            Ok(0) => Err(CoreError::internal("fail to delete role!")),
            Ok(_) => {
                tracing::info!(code, id = role.id, "Role soft-deleted");
                Ok(Success::with_message((), "role deleted success."))
            }
            Err(e) => Err(store_failure("deleting role", e)),
        }
    }
}
