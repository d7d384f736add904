//! Grant lookup over a permission entry list.

use opsdesk_entity::permission::{Action, PermissionEntry, Scope};

/// Whether the entries grant `action` at `scope` for the given
/// (module, sub-module) key.
///
/// Entries are a plain list and several may share a key; the result is
/// the OR across all of them, so any entry granting the action wins.
/// There is no deny override — the model is grant-only and additive.
/// No matching key means no access (fail-closed).
pub fn is_allowed(
    entries: &[PermissionEntry],
    module: &str,
    sub_module: &str,
    scope: Scope,
    action: Action,
) -> bool {
    entries
        .iter()
        .filter(|entry| entry.matches_key(module, sub_module))
        .any(|entry| entry.scope(scope).allows(action))
}
