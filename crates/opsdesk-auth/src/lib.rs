//! # opsdesk-auth
//!
//! Authentication and authorization primitives for the Opsdesk
//! back-office platform.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `otp` — time-bounded one-time-passcode challenges
//! - `token` — signed access/refresh session tokens
//! - `access` — effective-permission resolution and access checks

pub mod access;
pub mod otp;
pub mod password;
pub mod token;

pub use access::{PermissionResolver, is_allowed};
pub use otp::{OtpEngine, OtpError};
pub use password::PasswordHasher;
pub use token::{Claims, TokenIssuer, TokenPair, TokenVerifier};
