//! # opsdesk-core
//!
//! Core crate for the Opsdesk back-office platform. Contains the unified
//! error system, configuration schemas, pagination and filter types, and
//! the capability traits shared by the rest of the workspace.
//!
//! This crate has **no** internal dependencies on other Opsdesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
