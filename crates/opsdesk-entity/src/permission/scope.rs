//! Ownership scopes and actions checked against the permission matrix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Data-ownership scope of the record an action targets.
///
/// The scope is always the caller's statement. The permission model does
/// not infer whether a record belongs to the acting user; that
/// determination happens at the call site and is passed in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    /// System-automated actions with no acting user.
    Auto,
    /// Actions on the acting user's own records.
    OwnData,
    /// Actions on other users' records.
    OtherUserData,
}

impl Scope {
    /// Return the scope as its wire-format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::OwnData => "ownData",
            Self::OtherUserData => "otherUserData",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scope {
    type Err = opsdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "ownData" => Ok(Self::OwnData),
            "otherUserData" => Ok(Self::OtherUserData),
            _ => Err(opsdesk_core::AppError::validation(format!(
                "Invalid scope: '{s}'. Expected one of: auto, ownData, otherUserData"
            ))),
        }
    }
}

/// An action that can be granted within a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Read a record.
    View,
    /// Modify a record.
    Edit,
    /// Remove a record.
    Delete,
}

impl Action {
    /// Return the action as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = opsdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            _ => Err(opsdesk_core::AppError::validation(format!(
                "Invalid action: '{s}'. Expected one of: view, edit, delete"
            ))),
        }
    }
}
