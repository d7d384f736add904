//! Permission matrix entries.

use serde::{Deserialize, Serialize};

use super::scope::{Action, Scope};

/// The three grantable actions within one ownership scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet {
    /// Whether viewing is granted.
    #[serde(default)]
    pub view: bool,
    /// Whether editing is granted.
    #[serde(default)]
    pub edit: bool,
    /// Whether deleting is granted.
    #[serde(default)]
    pub delete: bool,
}

impl ActionSet {
    /// An action set with every grant enabled.
    pub fn all() -> Self {
        Self {
            view: true,
            edit: true,
            delete: true,
        }
    }

    /// Whether the given action is granted.
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::View => self.view,
            Action::Edit => self.edit,
            Action::Delete => self.delete,
        }
    }
}

/// One module/sub-module cell of a permission matrix.
///
/// A matrix is an ordered list of entries. Key uniqueness is *not*
/// enforced: several entries may share a (module, sub-module) key, and
/// any of them granting an action is sufficient. The model is grant-only
/// and additive; there is no deny override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionEntry {
    /// Top-level application module (e.g. "inventory").
    pub module: String,
    /// Sub-module within the module (e.g. "stock-adjustments").
    pub sub_module: String,
    /// Grants for system-automated actions.
    #[serde(default)]
    pub auto: ActionSet,
    /// Grants for the acting user's own records.
    #[serde(default)]
    pub own_data: ActionSet,
    /// Grants for other users' records.
    #[serde(default)]
    pub other_user_data: ActionSet,
}

impl PermissionEntry {
    /// Create an entry with no grants for the given key.
    pub fn new(module: impl Into<String>, sub_module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            sub_module: sub_module.into(),
            ..Self::default()
        }
    }

    /// Whether this entry covers the given (module, sub-module) key.
    pub fn matches_key(&self, module: &str, sub_module: &str) -> bool {
        self.module == module && self.sub_module == sub_module
    }

    /// The action set for one ownership scope.
    pub fn scope(&self, scope: Scope) -> &ActionSet {
        match scope {
            Scope::Auto => &self.auto,
            Scope::OwnData => &self.own_data,
            Scope::OtherUserData => &self.other_user_data,
        }
    }
}
