//! Role domain entities.

pub mod filter;
pub mod model;
pub mod workflow;

pub use filter::RoleFilter;
pub use model::{NewRole, Role, RoleSummary, RoleUpdate};
pub use workflow::{ActivationStatus, AuthorizationState};
