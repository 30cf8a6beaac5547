//! Shared fixtures for service tests.

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use hr_core::types::{Date, Timestamp};
use hr_db::models::company_rule::CompanyRuleRow;
use hr_db::models::project::{Project, ProjectRequest};
use hr_db::models::role::RoleRequest;
use hr_db::models::task::TaskCreateRequest;

/// A fixed instant well in the past, so seeded rows sort before anything
/// the services insert during a test.
pub fn past(days_ago: i64) -> Timestamp {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() - Duration::days(days_ago)
}

pub fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd_opt(y, m, d).unwrap()
}

pub fn rule_row(code: &str, is_active: Option<bool>, delete_flag: Option<bool>) -> CompanyRuleRow {
    CompanyRuleRow {
        id: 0,
        company_rule_code: code.to_string(),
        description: Some(format!("{code} description")),
        value: Some("1".to_string()),
        is_active,
        delete_flag,
        created_at: Some(past(30)),
        created_by: Some("seed".to_string()),
        modified_at: None,
        modified_by: None,
    }
}

pub fn project_row(code: &str, created_at: Timestamp) -> Project {
    Project {
        id: 0,
        project_code: code.to_string(),
        project_name: format!("Project {code}"),
        project_description: None,
        start_date: None,
        end_date: None,
        status_id: 1,
        delete_flag: false,
        created_at,
        created_by: Some("seed".to_string()),
        modified_at: None,
        modified_by: None,
    }
}

pub fn project_request(name: &str) -> ProjectRequest {
    ProjectRequest {
        project_name: name.to_string(),
        project_description: Some("Internal tooling".to_string()),
        start_date: Some(date(2026, 1, 5)),
        end_date: Some(date(2026, 6, 30)),
        status_id: None,
    }
}

pub fn role_request(code: &str, name: &str, unique_name: &str) -> RoleRequest {
    RoleRequest {
        role_name: Some(name.to_string()),
        role_code: Some(code.to_string()),
        unique_name: Some(unique_name.to_string()),
    }
}

pub fn task_request(project_code: &str, name: &str) -> TaskCreateRequest {
    TaskCreateRequest {
        employee_code: Some("EMP-001".to_string()),
        project_code: Some(project_code.to_string()),
        task_name: Some(name.to_string()),
        task_description: None,
        start_date: Some(date(2026, 2, 1)),
        end_date: Some(date(2026, 2, 3)),
        status_id: None,
        working_hour: Some(7.5),
    }
}
