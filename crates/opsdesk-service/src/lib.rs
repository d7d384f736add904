//! # opsdesk-service
//!
//! The functional surface of the Opsdesk auth core, abstracted from
//! transport: account registration and the two-phase login flow, token
//! refresh, and role registry management. A transport adapter (HTTP,
//! CLI) calls these services and maps [`opsdesk_core::AppError`] kinds
//! to its own status codes.

pub mod account;
pub mod notify;
pub mod role;

pub use account::{AccountService, VerifiedLogin};
pub use notify::LogNotifier;
pub use role::RoleService;
