//! Effective-permission resolution and access checks.

pub mod checker;
pub mod resolver;

pub use checker::is_allowed;
pub use resolver::PermissionResolver;
