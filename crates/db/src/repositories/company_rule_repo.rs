//! Repository for the `company_rules` table.

use hr_core::types::DbId;
use sqlx::PgPool;

use crate::models::company_rule::{CompanyRule, CompanyRuleRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company_rule_code, description, value, is_active, delete_flag, \
                       created_at, created_by, modified_at, modified_by";

/// Provides read and update operations for company rules.
pub struct CompanyRuleRepo;

impl CompanyRuleRepo {
    /// List every rule, including inactive and soft-deleted ones, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<CompanyRuleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM company_rules ORDER BY id ASC");
        sqlx::query_as::<_, CompanyRuleRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a rule by its internal ID, regardless of its flags.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CompanyRuleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM company_rules WHERE id = $1");
        sqlx::query_as::<_, CompanyRuleRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every mutable column of the rule identified by `rule.id`.
    pub async fn update(pool: &PgPool, rule: &CompanyRule) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE company_rules SET
                company_rule_code = $2,
                description = $3,
                value = $4,
                is_active = $5,
                delete_flag = $6,
                modified_at = $7,
                modified_by = $8
             WHERE id = $1",
        )
        .bind(rule.id)
        .bind(&rule.company_rule_code)
        .bind(&rule.description)
        .bind(&rule.value)
        .bind(rule.is_active)
        .bind(rule.delete_flag)
        .bind(rule.modified_at)
        .bind(&rule.modified_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
