//! Service tests for listing and updating company rules.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use common::rule_row;
use hr_core::error::CoreError;
use hr_domain::{CompanyRuleService, CompanyRuleStore, MemoryStore};

fn service(store: &Arc<MemoryStore>) -> CompanyRuleService<MemoryStore> {
    CompanyRuleService::new(Arc::clone(store))
}

// ---------------------------------------------------------------------------
// get_all
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_table_is_not_found() {
    let store = Arc::new(MemoryStore::new());

    let err = service(&store).get_all().await.unwrap_err();

    assert_matches!(err, CoreError::NotFound(ref msg) if msg == "No company rules found.");
}

#[tokio::test]
async fn all_inactive_rules_fail_validation() {
    let store = Arc::new(MemoryStore::new());
    store.seed_company_rule(rule_row("CR-1", Some(false), Some(false))).await;
    store.seed_company_rule(rule_row("CR-2", None, Some(false))).await;

    let err = service(&store).get_all().await.unwrap_err();

    assert_matches!(err, CoreError::Validation(ref msg) if msg == "All company rules are inactive.");
}

#[tokio::test]
async fn inactive_check_runs_before_deleted_check() {
    let store = Arc::new(MemoryStore::new());
    store.seed_company_rule(rule_row("CR-1", Some(false), Some(true))).await;

    let err = service(&store).get_all().await.unwrap_err();

    assert_matches!(err, CoreError::Validation(ref msg) if msg == "All company rules are inactive.");
}

#[tokio::test]
async fn all_deleted_rules_fail_validation() {
    let store = Arc::new(MemoryStore::new());
    store.seed_company_rule(rule_row("CR-1", Some(true), Some(true))).await;
    store.seed_company_rule(rule_row("CR-2", Some(false), Some(true))).await;

    let err = service(&store).get_all().await.unwrap_err();

    assert_matches!(err, CoreError::Validation(ref msg) if msg == "All company rules are deleted.");
}

#[tokio::test]
async fn mixed_rules_are_all_returned_with_normalized_flags() {
    let store = Arc::new(MemoryStore::new());
    store.seed_company_rule(rule_row("CR-1", Some(true), Some(false))).await;
    store.seed_company_rule(rule_row("CR-2", None, None)).await;
    store.seed_company_rule(rule_row("CR-3", Some(false), Some(true))).await;

    let rules = service(&store).get_all().await.unwrap().into_value();

    assert_eq!(rules.len(), 3);
    let cr2 = rules.iter().find(|r| r.company_rule_code == "CR-2").unwrap();
    assert!(!cr2.is_active);
    assert!(!cr2.delete_flag);
}

#[tokio::test]
async fn list_failure_is_internal() {
    let store = Arc::new(MemoryStore::new());
    store.fail_with("connection reset").await;

    let err = service(&store).get_all().await.unwrap_err();

    assert_matches!(err, CoreError::Internal(ref msg) if msg.contains("connection reset"));
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_overwrites_fields_and_keeps_creation_audit() {
    let store = Arc::new(MemoryStore::new());
    let id = store.seed_company_rule(rule_row("CR-1", Some(true), Some(false))).await;
    let svc = service(&store);

    let mut rule = svc
        .get_all()
        .await
        .unwrap()
        .into_value()
        .into_iter()
        .find(|r| r.id == id)
        .unwrap();
    rule.company_rule_code = "CR-LEAVE".to_string();
    rule.value = Some("21".to_string());
    rule.is_active = false;
    rule.created_by = Some("intruder".to_string());
    rule.modified_by = Some("hr-admin".to_string());

    let returned = svc.update(rule.clone()).await.unwrap().into_value();
    assert_eq!(returned, rule);

    let stored = store.find_company_rule(id).await.unwrap().unwrap();
    assert_eq!(stored.company_rule_code, "CR-LEAVE");
    assert_eq!(stored.value.as_deref(), Some("21"));
    assert_eq!(stored.is_active, Some(false));
    assert_eq!(stored.created_by.as_deref(), Some("seed"));
    assert_eq!(stored.modified_by.as_deref(), Some("hr-admin"));
    assert!(stored.modified_at.is_some());
}

#[tokio::test]
async fn update_of_unknown_rule_is_not_found() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(&store);
    let mut rule = hr_db::models::company_rule::CompanyRule::from(rule_row("CR-1", None, None));
    rule.id = 99;

    let err = svc.update(rule).await.unwrap_err();

    assert_matches!(err, CoreError::NotFound(ref msg) if msg == "Company rule not found.");
}

#[tokio::test]
async fn update_failure_is_internal() {
    let store = Arc::new(MemoryStore::new());
    let id = store.seed_company_rule(rule_row("CR-1", Some(true), None)).await;
    let mut rule = hr_db::models::company_rule::CompanyRule::from(rule_row("CR-1", None, None));
    rule.id = id;
    store.fail_with("disk full").await;

    let err = service(&store).update(rule).await.unwrap_err();

    assert_matches!(err, CoreError::Internal(ref msg) if msg.contains("disk full"));
}

#[tokio::test]
async fn update_touching_no_rows_is_internal() {
    let store = Arc::new(MemoryStore::new());
    let id = store.seed_company_rule(rule_row("CR-1", Some(true), None)).await;
    let mut rule = hr_db::models::company_rule::CompanyRule::from(rule_row("CR-9", None, None));
    rule.id = id;
    store.affect_no_rows().await;

    let err = service(&store).update(rule).await.unwrap_err();

    assert_matches!(err, CoreError::Internal(ref msg) if msg == "fail to update company rule!");
    let stored = store.find_company_rule(id).await.unwrap().unwrap();
    assert_eq!(stored.company_rule_code, "CR-1");
}
