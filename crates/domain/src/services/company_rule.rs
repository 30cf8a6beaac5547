//! Data-access service for company rules.

use std::sync::Arc;

use chrono::Utc;
use hr_core::error::CoreError;
use hr_core::outcome::{Outcome, Success};
use hr_db::models::company_rule::CompanyRule;

use super::store_failure;
use crate::store::CompanyRuleStore;

pub struct CompanyRuleService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: CompanyRuleStore + ?Sized> CompanyRuleService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Every rule with its flags normalized.
    ///
    /// Fails with `NotFound` when the table is empty and with `Validation`
    /// when no rule is active or every rule is soft-deleted. Otherwise all
    /// rows are returned, inactive and deleted ones included.
    pub async fn get_all(&self) -> Outcome<Vec<CompanyRule>> {
        let rules: Vec<CompanyRule> = self
            .store
            .list_company_rules()
            .await
            .map_err(|e| store_failure("retrieving company rules", e))?
            .into_iter()
            .map(CompanyRule::from)
            .collect();

        if rules.is_empty() {
            return Err(CoreError::not_found("No company rules found."));
        }

        if rules.iter().all(|rule| !rule.is_active) {
            tracing::warn!(count = rules.len(), "Every company rule is inactive");
            return Err(CoreError::validation("All company rules are inactive."));
        }

        if rules.iter().all(|rule| rule.delete_flag) {
            tracing::warn!(count = rules.len(), "Every company rule is deleted");
            return Err(CoreError::validation("All company rules are deleted."));
        }

        tracing::debug!(count = rules.len(), "Loaded company rules");
        Ok(Success::new(rules))
    }

    /// Overwrite a rule's code, description, value and flags.
    ///
    /// The stored row is read first; the merged record keeps its creation
    /// audit fields and is stamped with the current time and the caller's
    /// `modified_by`. Returns the input on success.
    pub async fn update(&self, rule: CompanyRule) -> Outcome<CompanyRule> {
        let existing = self
            .store
            .find_company_rule(rule.id)
            .await
            .map_err(|e| store_failure("updating the company rule", e))?
            .ok_or_else(|| CoreError::not_found("Company rule not found."))?;

        let merged = CompanyRule {
            id: existing.id,
            company_rule_code: rule.company_rule_code.clone(),
            description: rule.description.clone(),
            value: rule.value.clone(),
            is_active: rule.is_active,
            delete_flag: rule.delete_flag,
            created_at: existing.created_at,
            created_by: existing.created_by,
            modified_at: Some(Utc::now()),
            modified_by: rule.modified_by.clone(),
        };

        match self.store.update_company_rule(&merged).await {
            Ok(0) => Err(CoreError::internal("fail to update company rule!")),
            Ok(_) => {
                tracing::info!(id = merged.id, code = %merged.company_rule_code, "Company rule updated");
                Ok(Success::new(rule))
            }
            Err(e) => Err(store_failure("updating the company rule", e)),
        }
    }
}
