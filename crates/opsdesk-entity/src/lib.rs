//! # opsdesk-entity
//!
//! Domain entities for the Opsdesk back-office platform.
//!
//! ## Modules
//!
//! - `account` — registered accounts, their access source, and the
//!   pending OTP challenge
//! - `permission` — the module/sub-module permission matrix (three
//!   ownership scopes, three actions per scope)
//! - `role` — named, reusable permission matrices with an authorization
//!   workflow

pub mod account;
pub mod permission;
pub mod role;

pub use account::{AccessSource, Account, OtpChallenge};
pub use permission::{Action, ActionSet, PermissionEntry, Scope};
pub use role::{ActivationStatus, AuthorizationState, Role, RoleFilter, RoleSummary};
