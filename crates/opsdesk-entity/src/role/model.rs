//! Role entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::permission::PermissionEntry;

use super::workflow::{ActivationStatus, AuthorizationState};

/// A named, reusable permission matrix assignable to accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Unique role identifier.
    pub id: Uuid,
    /// Role name.
    pub name: String,
    /// What the role is for.
    pub description: String,
    /// The permission matrix this role grants.
    pub permissions: Vec<PermissionEntry>,
    /// Who created the role.
    pub created_by: Option<String>,
    /// Who last updated the role.
    pub updated_by: Option<String>,
    /// Who reviewed the role.
    pub authorized_by: Option<String>,
    /// When the role was reviewed.
    pub authorized_at: Option<DateTime<Utc>>,
    /// Review outcome.
    pub authorized: AuthorizationState,
    /// Activation state, independent of the review outcome.
    pub status: ActivationStatus,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Listing summary for this role.
    pub fn summary(&self) -> RoleSummary {
        RoleSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            count: self.permissions.len(),
            created_at: self.created_at,
            created_by: self.created_by.clone(),
            authorized_at: self.authorized_at,
            authorized_by: self.authorized_by.clone(),
            updated_at: self.updated_at,
            updated_by: self.updated_by.clone(),
            authorized: self.authorized,
            status: self.status,
        }
    }
}

/// Data required to create a role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    /// Role name (required).
    #[serde(default)]
    pub name: String,
    /// Role description (required).
    #[serde(default)]
    pub description: String,
    /// Initial permission matrix.
    #[serde(default)]
    pub permissions: Vec<PermissionEntry>,
    /// Creator identity.
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Partial update applied by the edit operation.
///
/// Name and description are mandatory even on edit; every other field is
/// applied only when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    /// Replacement name (required).
    #[serde(default)]
    pub name: String,
    /// Replacement description (required).
    #[serde(default)]
    pub description: String,
    /// Replacement permission matrix, when present.
    #[serde(default)]
    pub permissions: Option<Vec<PermissionEntry>>,
    /// Updater identity, when present.
    #[serde(default)]
    pub updated_by: Option<String>,
    /// New review outcome, when present.
    #[serde(default)]
    pub authorized: Option<AuthorizationState>,
    /// Authorizer identity, when present.
    #[serde(default)]
    pub authorized_by: Option<String>,
    /// Review timestamp, when present.
    #[serde(default)]
    pub authorized_at: Option<DateTime<Utc>>,
    /// New activation state, when present.
    #[serde(default)]
    pub status: Option<ActivationStatus>,
}

/// Role listing row: identity, matrix size, and audit fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    /// Role identifier.
    pub id: Uuid,
    /// Role name.
    pub name: String,
    /// Role description.
    pub description: String,
    /// Number of permission entries in the matrix.
    pub count: usize,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Creator identity.
    pub created_by: Option<String>,
    /// Review timestamp.
    pub authorized_at: Option<DateTime<Utc>>,
    /// Authorizer identity.
    pub authorized_by: Option<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Updater identity.
    pub updated_by: Option<String>,
    /// Review outcome.
    pub authorized: AuthorizationState,
    /// Activation state.
    pub status: ActivationStatus,
}
