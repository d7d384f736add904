//! Role registry — CRUD and lifecycle for named permission matrices.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use opsdesk_core::types::{PageRequest, PageResponse};
use opsdesk_core::{AppError, AppResult};
use opsdesk_entity::role::{NewRole, Role, RoleFilter, RoleSummary, RoleUpdate};
use opsdesk_store::RoleStore;

/// Manages the role collection.
#[derive(Clone)]
pub struct RoleService {
    /// Role persistence.
    roles: Arc<dyn RoleStore>,
}

impl std::fmt::Debug for RoleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleService").finish()
    }
}

impl RoleService {
    /// Creates a role service over the given store.
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }

    /// Creates a role. New roles start `Pending` and `Inactive`.
    pub async fn create(&self, new: NewRole) -> AppResult<Role> {
        require_name_and_description(&new.name, &new.description)?;

        let now = Utc::now();
        let role = Role {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            permissions: new.permissions,
            created_by: new.created_by,
            updated_by: None,
            authorized_by: None,
            authorized_at: None,
            authorized: Default::default(),
            status: Default::default(),
            created_at: now,
            updated_at: now,
        };

        let role = self.roles.insert(role).await?;
        info!(role_id = %role.id, name = %role.name, "Role created");
        Ok(role)
    }

    /// Lists role summaries matching the filter, newest first.
    pub async fn list(
        &self,
        filter: &RoleFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<RoleSummary>> {
        let roles = self.roles.list(filter, page).await?;
        Ok(roles.map(|role| role.summary()))
    }

    /// Edits a role. Name and description stay mandatory even on edit;
    /// every other field is applied only when present. The update
    /// timestamp always refreshes.
    pub async fn edit(&self, id: Uuid, update: RoleUpdate) -> AppResult<Role> {
        require_name_and_description(&update.name, &update.description)?;

        let mut role = self
            .roles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Role not found"))?;

        role.name = update.name;
        role.description = update.description;
        if let Some(permissions) = update.permissions {
            role.permissions = permissions;
        }
        if let Some(updated_by) = update.updated_by {
            role.updated_by = Some(updated_by);
        }
        if let Some(authorized) = update.authorized {
            role.authorized = authorized;
        }
        if let Some(authorized_by) = update.authorized_by {
            role.authorized_by = Some(authorized_by);
        }
        if let Some(authorized_at) = update.authorized_at {
            role.authorized_at = Some(authorized_at);
        }
        if let Some(status) = update.status {
            role.status = status;
        }
        role.updated_at = Utc::now();

        let role = self.roles.update(role).await?;
        info!(role_id = %role.id, "Role updated");
        Ok(role)
    }

    /// Hard-deletes a role.
    ///
    /// No referencing-account check is made: accounts still pointing at
    /// the id degrade to the fail-closed empty matrix at resolution.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.roles.delete(id).await? {
            return Err(AppError::not_found("Role not found"));
        }
        info!(role_id = %id, "Role deleted");
        Ok(())
    }
}

fn require_name_and_description(name: &str, description: &str) -> AppResult<()> {
    if name.trim().is_empty() || description.trim().is_empty() {
        return Err(AppError::validation("Name and description are required."));
    }
    Ok(())
}
