//! Role persistence.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use opsdesk_core::types::{PageRequest, PageResponse};
use opsdesk_core::{AppError, AppResult};
use opsdesk_entity::role::{Role, RoleFilter};

/// Role persistence operations the registry relies on.
#[async_trait]
pub trait RoleStore: Send + Sync + 'static {
    /// Find a role by its primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>>;

    /// Persist a new role.
    async fn insert(&self, role: Role) -> AppResult<Role>;

    /// Replace an existing role record (last-write-wins).
    async fn update(&self, role: Role) -> AppResult<Role>;

    /// Hard-delete a role. Returns `false` when the id is unknown.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// List roles matching the filter, newest first.
    ///
    /// The response `total` counts every match, not just this page.
    async fn list(&self, filter: &RoleFilter, page: &PageRequest) -> AppResult<PageResponse<Role>>;
}

/// In-memory role store using a Tokio mutex for single-node use.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoleStore {
    /// Roles keyed by id.
    roles: Arc<Mutex<HashMap<Uuid, Role>>>,
}

impl MemoryRoleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>> {
        let roles = self.roles.lock().await;
        Ok(roles.get(&id).cloned())
    }

    async fn insert(&self, role: Role) -> AppResult<Role> {
        let mut roles = self.roles.lock().await;
        debug!(role_id = %role.id, name = %role.name, "Role stored");
        roles.insert(role.id, role.clone());
        Ok(role)
    }

    async fn update(&self, role: Role) -> AppResult<Role> {
        let mut roles = self.roles.lock().await;
        if !roles.contains_key(&role.id) {
            return Err(AppError::not_found("Role not found"));
        }
        roles.insert(role.id, role.clone());
        Ok(role)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut roles = self.roles.lock().await;
        Ok(roles.remove(&id).is_some())
    }

    async fn list(&self, filter: &RoleFilter, page: &PageRequest) -> AppResult<PageResponse<Role>> {
        let roles = self.roles.lock().await;

        let mut matching: Vec<Role> = roles.values().filter(|r| filter.matches(r)).cloned().collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as u64;
        let items: Vec<Role> = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .collect();

        Ok(PageResponse::new(items, page, total))
    }
}
