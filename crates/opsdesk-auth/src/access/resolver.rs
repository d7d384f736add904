//! Effective-permission resolution for an account.

use std::sync::Arc;

use tracing::warn;

use opsdesk_core::AppResult;
use opsdesk_entity::account::{AccessSource, Account};
use opsdesk_entity::permission::PermissionEntry;
use opsdesk_store::RoleStore;

/// Resolves the permission entry list in effect for an account.
#[derive(Clone)]
pub struct PermissionResolver {
    /// Role lookup for role-based accounts.
    roles: Arc<dyn RoleStore>,
}

impl PermissionResolver {
    /// Creates a resolver over the given role store.
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }

    /// The entries to apply for this account:
    ///
    /// - custom matrix when custom access is enabled,
    /// - otherwise the assigned role's matrix,
    /// - otherwise empty — no access by default.
    ///
    /// A dangling role reference (the role was hard-deleted) degrades to
    /// the empty matrix rather than an error, so orphaned accounts stay
    /// fail-closed instead of crashing authorization checks.
    pub async fn resolve(&self, account: &Account) -> AppResult<Vec<PermissionEntry>> {
        match &account.access {
            Some(AccessSource::Custom { permissions }) => Ok(permissions.clone()),
            Some(AccessSource::Role { role_id }) => {
                match self.roles.find_by_id(*role_id).await? {
                    Some(role) => Ok(role.permissions),
                    None => {
                        warn!(
                            account_id = %account.id,
                            role_id = %role_id,
                            "Account references a deleted role; resolving to empty matrix"
                        );
                        Ok(Vec::new())
                    }
                }
            }
            None => Ok(Vec::new()),
        }
    }
}

impl std::fmt::Debug for PermissionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionResolver").finish()
    }
}
