//! Permission matrix entities.

pub mod entry;
pub mod scope;

pub use entry::{ActionSet, PermissionEntry};
pub use scope::{Action, Scope};
