//! Company rule entity model.

use hr_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A raw row from the `company_rules` table.
///
/// `is_active` and `delete_flag` are nullable in the schema. Convert into
/// [`CompanyRule`] right after loading; nothing else should read this type.
#[derive(Debug, Clone, FromRow)]
pub struct CompanyRuleRow {
    pub id: DbId,
    pub company_rule_code: String,
    pub description: Option<String>,
    pub value: Option<String>,
    pub is_active: Option<bool>,
    pub delete_flag: Option<bool>,
    pub created_at: Option<Timestamp>,
    pub created_by: Option<String>,
    pub modified_at: Option<Timestamp>,
    pub modified_by: Option<String>,
}

/// A company rule with its flags normalized.
///
/// Used both as the response shape of the list operation and as the input
/// of the update operation. Absent JSON fields deserialize to an empty code
/// and `false` flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRule {
    pub id: DbId,
    #[serde(default)]
    pub company_rule_code: String,
    pub description: Option<String>,
    pub value: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub delete_flag: bool,
    pub created_at: Option<Timestamp>,
    pub created_by: Option<String>,
    pub modified_at: Option<Timestamp>,
    pub modified_by: Option<String>,
}

impl From<CompanyRuleRow> for CompanyRule {
    fn from(row: CompanyRuleRow) -> Self {
        Self {
            id: row.id,
            company_rule_code: row.company_rule_code,
            description: row.description,
            value: row.value,
            is_active: row.is_active.unwrap_or(false),
            delete_flag: row.delete_flag.unwrap_or(false),
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
        }
    }
}
