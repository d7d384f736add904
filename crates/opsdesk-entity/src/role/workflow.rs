//! Role authorization workflow and activation states.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review outcome of a role.
///
/// Every role starts `Pending` and is later approved or rejected by an
/// authorizer. Independent of [`ActivationStatus`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorizationState {
    /// Awaiting review.
    #[default]
    Pending,
    /// Approved by an authorizer.
    Approved,
    /// Rejected by an authorizer.
    Rejected,
}

impl AuthorizationState {
    /// Return the state as its wire-format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for AuthorizationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthorizationState {
    type Err = opsdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(opsdesk_core::AppError::validation(format!(
                "Invalid authorization state: '{s}'. Expected one of: Pending, Approved, Rejected"
            ))),
        }
    }
}

/// Whether a role is currently usable for assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivationStatus {
    /// The role is live.
    Active,
    /// The role is parked. New roles start here.
    #[default]
    Inactive,
}

impl ActivationStatus {
    /// Return the status as its wire-format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for ActivationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivationStatus {
    type Err = opsdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(opsdesk_core::AppError::validation(format!(
                "Invalid activation status: '{s}'. Expected one of: Active, Inactive"
            ))),
        }
    }
}
