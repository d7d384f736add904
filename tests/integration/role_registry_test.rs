//! Integration tests for the role registry.

use chrono::{Duration, Utc};
use uuid::Uuid;

use opsdesk_core::ErrorKind;
use opsdesk_core::types::{DateRange, PageRequest};
use opsdesk_entity::permission::{Action, Scope};
use opsdesk_entity::role::{
    ActivationStatus, AuthorizationState, NewRole, Role, RoleFilter, RoleUpdate,
};
use opsdesk_store::RoleStore;

use crate::helpers::{TestCore, entry_granting};

fn new_role(name: &str, created_by: &str) -> NewRole {
    NewRole {
        name: name.to_string(),
        description: format!("{name} duties"),
        permissions: vec![entry_granting("sales", "orders", Scope::OwnData, Action::View)],
        created_by: Some(created_by.to_string()),
    }
}

/// A role inserted directly into the store with a chosen creation time.
fn stored_role(name: &str, created_minutes_ago: i64) -> Role {
    let created = Utc::now() - Duration::minutes(created_minutes_ago);
    Role {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: format!("{name} duties"),
        permissions: vec![],
        created_by: Some("seeder".to_string()),
        updated_by: None,
        authorized_by: None,
        authorized_at: None,
        authorized: AuthorizationState::Pending,
        status: ActivationStatus::Inactive,
        created_at: created,
        updated_at: created,
    }
}

#[tokio::test]
async fn test_create_then_list_shows_summary_with_count() {
    let core = TestCore::new();
    core.role_service
        .create(new_role("Order Desk", "ops-admin"))
        .await
        .unwrap();

    let page = core
        .role_service
        .list(&RoleFilter::default(), &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    let summary = &page.items[0];
    assert_eq!(summary.name, "Order Desk");
    assert_eq!(summary.count, 1);
    assert_eq!(summary.authorized, AuthorizationState::Pending);
    assert_eq!(summary.status, ActivationStatus::Inactive);
}

#[tokio::test]
async fn test_list_total_reflects_filtered_set_not_page() {
    let core = TestCore::new();
    for i in 0..27 {
        core.roles
            .insert(stored_role(&format!("role-{i}"), i))
            .await
            .unwrap();
    }

    let page = core
        .role_service
        .list(&RoleFilter::default(), &PageRequest::new(1, 3))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.total, 27);
    assert_eq!(page.limit, 3);
}

#[tokio::test]
async fn test_list_sorted_by_creation_descending() {
    let core = TestCore::new();
    for (name, age) in [("oldest", 30), ("newest", 1), ("middle", 15)] {
        core.roles.insert(stored_role(name, age)).await.unwrap();
    }

    let page = core
        .role_service
        .list(&RoleFilter::default(), &PageRequest::default())
        .await
        .unwrap();
    let names: Vec<_> = page.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn test_list_filters_combine_with_and() {
    let core = TestCore::new();
    let mut approved_active = stored_role("approved-active", 5);
    approved_active.authorized = AuthorizationState::Approved;
    approved_active.status = ActivationStatus::Active;
    core.roles.insert(approved_active).await.unwrap();

    let mut approved_inactive = stored_role("approved-inactive", 5);
    approved_inactive.authorized = AuthorizationState::Approved;
    core.roles.insert(approved_inactive).await.unwrap();

    core.roles.insert(stored_role("pending", 5)).await.unwrap();

    let filter = RoleFilter {
        authorized: Some(AuthorizationState::Approved),
        status: Some(ActivationStatus::Active),
        ..RoleFilter::default()
    };
    let page = core
        .role_service
        .list(&filter, &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "approved-active");
}

#[tokio::test]
async fn test_list_created_window_filter() {
    let core = TestCore::new();
    core.roles.insert(stored_role("recent", 10)).await.unwrap();
    core.roles.insert(stored_role("ancient", 60 * 24)).await.unwrap();

    let filter = RoleFilter {
        created: DateRange {
            from: Some(Utc::now() - Duration::hours(1)),
            to: None,
        },
        ..RoleFilter::default()
    };
    let page = core
        .role_service
        .list(&filter, &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "recent");
}

#[tokio::test]
async fn test_edit_workflow_transition() {
    let core = TestCore::new();
    let role = core
        .role_service
        .create(new_role("Order Desk", "ops-admin"))
        .await
        .unwrap();

    let authorized_at = Utc::now();
    let edited = core
        .role_service
        .edit(
            role.id,
            RoleUpdate {
                name: role.name.clone(),
                description: role.description.clone(),
                authorized: Some(AuthorizationState::Approved),
                authorized_by: Some("chief".to_string()),
                authorized_at: Some(authorized_at),
                status: Some(ActivationStatus::Active),
                updated_by: Some("ops-admin".to_string()),
                permissions: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(edited.authorized, AuthorizationState::Approved);
    assert_eq!(edited.status, ActivationStatus::Active);
    assert_eq!(edited.authorized_at, Some(authorized_at));
    // permissions untouched when not supplied
    assert_eq!(edited.permissions.len(), 1);
}

#[tokio::test]
async fn test_edit_without_name_and_description_is_rejected() {
    let core = TestCore::new();
    let role = core
        .role_service
        .create(new_role("Order Desk", "ops-admin"))
        .await
        .unwrap();

    let err = core
        .role_service
        .edit(
            role.id,
            RoleUpdate {
                status: Some(ActivationStatus::Active),
                ..RoleUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_delete_is_hard_and_idempotence_fails() {
    let core = TestCore::new();
    let role = core
        .role_service
        .create(new_role("Order Desk", "ops-admin"))
        .await
        .unwrap();

    core.role_service.delete(role.id).await.unwrap();
    let err = core.role_service.delete(role.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let page = core
        .role_service
        .list(&RoleFilter::default(), &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total, 0);
}
