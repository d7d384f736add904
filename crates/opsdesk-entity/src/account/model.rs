//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::permission::PermissionEntry;

use super::challenge::OtpChallenge;

/// Where an account's effective permissions come from.
///
/// An account has at most one authorization source. Modeling this as a
/// tagged union (rather than a role field plus a custom-access flag)
/// makes the role-or-custom exclusivity structural: no later mutation
/// can leave both set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AccessSource {
    /// Permissions come from an assigned role's matrix.
    Role {
        /// The assigned role's identifier.
        role_id: Uuid,
    },
    /// Permissions come from a per-account custom matrix.
    Custom {
        /// The account's own permission entries.
        permissions: Vec<PermissionEntry>,
    },
}

/// A registered back-office account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Optional profile image URL.
    pub image: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Job title within the organization.
    pub designation: String,
    /// Unique login name.
    pub username: String,
    /// Unique email address; also the OTP delivery destination.
    pub email: String,
    /// Unique phone number.
    pub phone: String,
    /// Argon2id password hash. Plaintext is never stored.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the contact channel has been verified.
    pub is_verified: bool,
    /// Authorization source, if any. `None` means no access at all
    /// (fail-closed).
    pub access: Option<AccessSource>,
    /// Pending OTP challenge, present only between login-start and
    /// verification.
    #[serde(skip_serializing, default)]
    pub otp: Option<OtpChallenge>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Whether this account uses a per-account custom matrix.
    pub fn has_custom_access(&self) -> bool {
        matches!(self.access, Some(AccessSource::Custom { .. }))
    }

    /// The assigned role id, when the account is role-based.
    pub fn role_id(&self) -> Option<Uuid> {
        match &self.access {
            Some(AccessSource::Role { role_id }) => Some(*role_id),
            _ => None,
        }
    }

    /// Public summary returned by account endpoints.
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            designation: self.designation.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            role_id: self.role_id(),
            enable_custom_access: self.has_custom_access(),
            image: self.image.clone(),
            created_at: self.created_at,
        }
    }
}

/// Data required to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// Optional profile image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Job title.
    #[serde(default)]
    pub designation: String,
    /// Desired login name.
    #[serde(default)]
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Plaintext password; hashed before persistence, never logged.
    #[serde(default)]
    pub password: String,
    /// Must equal `password`.
    #[serde(default)]
    pub confirm_password: String,
    /// Role to assign (mutually exclusive with custom access).
    #[serde(default)]
    pub role: Option<Uuid>,
    /// Whether to use a per-account custom matrix.
    #[serde(default)]
    pub enable_custom_access: bool,
    /// Custom matrix; ignored unless `enable_custom_access` is set.
    #[serde(default)]
    pub custom_permissions: Vec<PermissionEntry>,
}

/// The account representation returned to callers: everything except
/// secrets and the pending challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Account identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Job title.
    pub designation: String,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Assigned role, when role-based.
    pub role_id: Option<Uuid>,
    /// Whether a custom matrix is in effect.
    pub enable_custom_access: bool,
    /// Profile image URL.
    pub image: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
