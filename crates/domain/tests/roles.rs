//! Service tests for role CRUD.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use common::role_request;
use hr_core::error::CoreError;
use hr_db::models::role::{RoleRequest, RoleUpdateRequest};
use hr_domain::{MemoryStore, RoleService, RoleStore};

fn service(store: &Arc<MemoryStore>) -> RoleService<MemoryStore> {
    RoleService::new(Arc::clone(store))
}

#[tokio::test]
async fn create_returns_the_role_code() {
    let store = Arc::new(MemoryStore::new());

    let created = service(&store)
        .create(&role_request("R-ADMIN", "Administrator", "admin"))
        .await
        .unwrap();

    assert_eq!(created.value, "R-ADMIN");
    assert_eq!(created.message.as_deref(), Some("role created success"));
}

#[tokio::test]
async fn missing_fields_fail_validation() {
    let store = Arc::new(MemoryStore::new());
    let request = RoleRequest {
        role_name: Some("Nameless".to_string()),
        role_code: None,
        unique_name: Some("nameless".to_string()),
    };

    let err = service(&store).create(&request).await.unwrap_err();

    assert_matches!(err, CoreError::Validation(_));
    assert!(store.list_roles().await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_fields_fail_validation() {
    let store = Arc::new(MemoryStore::new());

    let err = service(&store)
        .create(&role_request("   ", "   ", "   "))
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::Validation(_));
    assert!(store.list_roles().await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_rename_fails_validation() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(&store);
    svc.create(&role_request("R-DEV", "Developer", "dev")).await.unwrap();

    let err = svc
        .update(
            "R-DEV",
            &RoleUpdateRequest {
                role_name: Some("  ".to_string()),
                unique_name: Some("\t".to_string()),
            },
        )
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::Validation(_));
    let role = store.find_role_by_code("R-DEV").await.unwrap().unwrap();
    assert_eq!(role.role_name, "Developer");
}

#[tokio::test]
async fn duplicate_code_names_the_code() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(&store);
    svc.create(&role_request("R-HR", "HR", "hr")).await.unwrap();

    let err = svc
        .create(&role_request("R-HR", "HR again", "hr-2"))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        CoreError::DuplicateRecord(ref msg) if msg == "A role with code 'R-HR' already exists!"
    );
}

#[tokio::test]
async fn duplicate_unique_name_names_the_unique_name() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(&store);
    svc.create(&role_request("R-HR", "HR", "hr")).await.unwrap();

    let err = svc
        .create(&role_request("R-HR2", "HR two", "hr"))
        .await
        .unwrap_err();

    assert_matches!(
        err,
        CoreError::DuplicateRecord(ref msg) if msg == "A role with unique name 'hr' already exists!"
    );
}

#[tokio::test]
async fn deleted_role_codes_stay_reserved() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(&store);
    svc.create(&role_request("R-OPS", "Ops", "ops")).await.unwrap();
    svc.delete("R-OPS").await.unwrap();

    let err = svc
        .create(&role_request("R-OPS", "Ops", "ops-2"))
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::DuplicateRecord(_));
}

#[tokio::test]
async fn empty_list_is_not_found() {
    let store = Arc::new(MemoryStore::new());

    let err = service(&store).get_all().await.unwrap_err();

    assert_matches!(err, CoreError::NotFound(ref msg) if msg == "no roles found!");
}

#[tokio::test]
async fn get_by_code_returns_the_role() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(&store);
    svc.create(&role_request("R-DEV", "Developer", "dev")).await.unwrap();

    let role = svc.get_by_code("R-DEV").await.unwrap().into_value();

    assert_eq!(role.role_name, "Developer");
    assert_eq!(role.unique_name, "dev");
    assert_matches!(svc.get_by_code("R-NONE").await, Err(CoreError::NotFound(_)));
}

#[tokio::test]
async fn update_keeps_absent_fields() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(&store);
    svc.create(&role_request("R-DEV", "Developer", "dev")).await.unwrap();

    let outcome = svc
        .update(
            "R-DEV",
            &RoleUpdateRequest {
                role_name: Some("Engineer".to_string()),
                unique_name: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(outcome.message.as_deref(), Some("role updated success"));

    let role = store.find_role_by_code("R-DEV").await.unwrap().unwrap();
    assert_eq!(role.role_name, "Engineer");
    assert_eq!(role.unique_name, "dev");
    assert!(role.modified_at.is_some());
}

#[tokio::test]
async fn update_to_taken_unique_name_is_a_duplicate() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(&store);
    svc.create(&role_request("R-A", "A", "alpha")).await.unwrap();
    svc.create(&role_request("R-B", "B", "beta")).await.unwrap();

    let err = svc
        .update(
            "R-B",
            &RoleUpdateRequest {
                role_name: None,
                unique_name: Some("alpha".to_string()),
            },
        )
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::DuplicateRecord(ref msg) if msg.contains("alpha"));
}

#[tokio::test]
async fn update_of_unknown_role_is_not_found() {
    let store = Arc::new(MemoryStore::new());

    let err = service(&store)
        .update(
            "R-NONE",
            &RoleUpdateRequest {
                role_name: Some("x".to_string()),
                unique_name: None,
            },
        )
        .await
        .unwrap_err();

    assert_matches!(err, CoreError::NotFound(ref msg) if msg == "no role found to update!");
}

#[tokio::test]
async fn delete_hides_the_role() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(&store);
    svc.create(&role_request("R-TMP", "Temp", "temp")).await.unwrap();

    let outcome = svc.delete("R-TMP").await.unwrap();

    assert_eq!(outcome.message.as_deref(), Some("role deleted success."));
    assert_matches!(
        svc.delete("R-TMP").await,
        Err(CoreError::NotFound(ref msg)) if msg == "no role found to delete!"
    );
}

#[tokio::test]
async fn store_failure_is_internal() {
    let store = Arc::new(MemoryStore::new());
    store.fail_with("relation \"roles\" does not exist").await;

    let err = service(&store).get_all().await.unwrap_err();

    assert_matches!(err, CoreError::Internal(ref msg) if msg.contains("roles"));
}

#[tokio::test]
async fn writes_touching_no_rows_are_internal() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(&store);
    svc.create(&role_request("R-OPS", "Ops", "ops")).await.unwrap();
    store.affect_no_rows().await;

    assert_matches!(
        svc.create(&role_request("R-NEW", "New", "new")).await,
        Err(CoreError::Internal(ref msg)) if msg == "fail to create role!"
    );
    assert_matches!(
        svc.update(
            "R-OPS",
            &RoleUpdateRequest {
                role_name: Some("Operations".to_string()),
                unique_name: None,
            },
        )
        .await,
        Err(CoreError::Internal(ref msg)) if msg == "fail to update role!"
    );
    assert_matches!(
        svc.delete("R-OPS").await,
        Err(CoreError::Internal(ref msg)) if msg == "fail to delete role!"
    );
    assert_eq!(store.list_roles().await.unwrap().len(), 1);
}
