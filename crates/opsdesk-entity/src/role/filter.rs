//! Role listing filter.

use serde::{Deserialize, Serialize};

use opsdesk_core::types::DateRange;

use super::model::Role;
use super::workflow::{ActivationStatus, AuthorizationState};

/// Independent, optional criteria for the role list, combined by AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleFilter {
    /// Creation time window.
    #[serde(default)]
    pub created: DateRange,
    /// Last-update time window.
    #[serde(default)]
    pub updated: DateRange,
    /// Review time window.
    #[serde(default)]
    pub authorized_between: DateRange,
    /// Creator identity.
    #[serde(default)]
    pub created_by: Option<String>,
    /// Updater identity.
    #[serde(default)]
    pub updated_by: Option<String>,
    /// Authorizer identity.
    #[serde(default)]
    pub authorized_by: Option<String>,
    /// Review outcome.
    #[serde(default)]
    pub authorized: Option<AuthorizationState>,
    /// Activation state.
    #[serde(default)]
    pub status: Option<ActivationStatus>,
}

impl RoleFilter {
    /// Whether the role satisfies every set criterion.
    pub fn matches(&self, role: &Role) -> bool {
        if !self.created.contains(role.created_at) {
            return false;
        }
        if !self.updated.contains(role.updated_at) {
            return false;
        }
        if !self.authorized_between.contains_opt(role.authorized_at) {
            return false;
        }
        if let Some(created_by) = &self.created_by
            && role.created_by.as_deref() != Some(created_by.as_str())
        {
            return false;
        }
        if let Some(updated_by) = &self.updated_by
            && role.updated_by.as_deref() != Some(updated_by.as_str())
        {
            return false;
        }
        if let Some(authorized_by) = &self.authorized_by
            && role.authorized_by.as_deref() != Some(authorized_by.as_str())
        {
            return false;
        }
        if let Some(authorized) = self.authorized
            && role.authorized != authorized
        {
            return false;
        }
        if let Some(status) = self.status
            && role.status != status
        {
            return false;
        }
        true
    }
}
