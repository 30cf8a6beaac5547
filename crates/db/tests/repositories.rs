//! Integration tests for the repositories against a real database.
//!
//! Each test gets a fresh database with all migrations applied. They need a
//! reachable Postgres in `DATABASE_URL`, so they are skipped by default; run
//! them with `cargo test -p hr-db -- --ignored`.

use chrono::Utc;
use hr_db::models::company_rule::CompanyRule;
use hr_db::models::project::NewProject;
use hr_db::models::role::NewRole;
use hr_db::models::task::NewTask;
use hr_db::repositories::{CompanyRuleRepo, ProjectRepo, RoleRepo, TaskRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(code: &str) -> NewProject {
    NewProject {
        project_code: code.to_string(),
        project_name: format!("Project {code}"),
        project_description: None,
        start_date: None,
        end_date: None,
        status_id: 1,
        created_by: "tester".to_string(),
    }
}

fn new_task(code: &str, project_code: &str) -> NewTask {
    NewTask {
        task_code: code.to_string(),
        employee_code: "EMP-001".to_string(),
        project_code: project_code.to_string(),
        task_name: format!("Task {code}"),
        task_description: None,
        start_date: None,
        end_date: None,
        status_id: 1,
        working_hour: Some(2.5),
        created_by: "tester".to_string(),
    }
}

fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505") && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Company rules
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn company_rule_null_flags_load_as_none(pool: PgPool) {
    sqlx::query("INSERT INTO company_rules (company_rule_code, value) VALUES ('CR-1', '5')")
        .execute(&pool)
        .await
        .unwrap();

    let rows = CompanyRuleRepo::list(&pool).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].is_active, None);
    assert_eq!(rows[0].delete_flag, None);
    let rule = CompanyRule::from(rows[0].clone());
    assert!(!rule.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn company_rule_update_writes_flags(pool: PgPool) {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO company_rules (company_rule_code, is_active) VALUES ('CR-1', TRUE) RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let mut rule = CompanyRule::from(CompanyRuleRepo::find_by_id(&pool, id).await.unwrap().unwrap());
    rule.delete_flag = true;
    rule.modified_by = Some("hr-admin".to_string());
    rule.modified_at = Some(Utc::now());

    let affected = CompanyRuleRepo::update(&pool, &rule).await.unwrap();

    assert_eq!(affected, 1);
    let row = CompanyRuleRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(row.delete_flag, Some(true));
    assert_eq!(row.modified_by.as_deref(), Some("hr-admin"));
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn project_last_code_includes_deleted_rows(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("PRJ-0001")).await.unwrap();
    ProjectRepo::create(&pool, &new_project("PRJ-0002")).await.unwrap();
    let second = ProjectRepo::find_by_code(&pool, "PRJ-0002").await.unwrap().unwrap();
    ProjectRepo::soft_delete(&pool, second.id, Utc::now(), "tester")
        .await
        .unwrap();

    assert_eq!(
        ProjectRepo::last_code(&pool).await.unwrap().as_deref(),
        Some("PRJ-0002")
    );
    assert_eq!(ProjectRepo::list(&pool).await.unwrap().len(), 1);
    assert!(ProjectRepo::find_by_code(&pool, "PRJ-0002").await.unwrap().is_none());

    let deleted = ProjectRepo::find_by_id_include_deleted(&pool, second.id)
        .await
        .unwrap()
        .unwrap();
    assert!(deleted.delete_flag);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn duplicate_project_code_is_a_unique_violation(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("PRJ-0001")).await.unwrap();

    let err = ProjectRepo::create(&pool, &new_project("PRJ-0001"))
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err, "uq_projects_project_code"));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn project_update_skips_deleted_rows(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("PRJ-0001")).await.unwrap();
    let mut project = ProjectRepo::find_by_code(&pool, "PRJ-0001").await.unwrap().unwrap();
    ProjectRepo::soft_delete(&pool, project.id, Utc::now(), "tester")
        .await
        .unwrap();

    project.project_name = "Renamed".to_string();
    let affected = ProjectRepo::update(&pool, &project).await.unwrap();

    assert_eq!(affected, 0);
    assert_eq!(
        ProjectRepo::soft_delete(&pool, project.id, Utc::now(), "tester")
            .await
            .unwrap(),
        0
    );
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn duplicate_role_unique_name_is_a_unique_violation(pool: PgPool) {
    let role = |code: &str| NewRole {
        role_code: code.to_string(),
        role_name: "Admin".to_string(),
        unique_name: "admin".to_string(),
        created_by: "tester".to_string(),
    };
    RoleRepo::create(&pool, &role("R-1")).await.unwrap();

    let err = RoleRepo::create(&pool, &role("R-2")).await.unwrap_err();

    assert!(is_unique_violation(&err, "uq_roles_unique_name"));
    assert_eq!(RoleRepo::list(&pool).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn tasks_reference_existing_projects(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("PRJ-0001")).await.unwrap();
    TaskRepo::create(&pool, &new_task("TSK-00001", "PRJ-0001"))
        .await
        .unwrap();

    let err = TaskRepo::create(&pool, &new_task("TSK-00002", "PRJ-9999")).await;
    assert!(err.is_err());

    let tasks = TaskRepo::list_by_project(&pool, "PRJ-0001").await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].working_hour, Some(2.5));
    assert_eq!(
        TaskRepo::last_code(&pool).await.unwrap().as_deref(),
        Some("TSK-00001")
    );
}
