//! # opsdesk-store
//!
//! Backing-store seam for the Opsdesk auth core.
//!
//! The core treats persistence as an external collaborator: services
//! talk to the [`AccountStore`] and [`RoleStore`] traits, which promise
//! per-record write serialization and nothing more. Concurrent edits to
//! the same record resolve last-write-wins.
//!
//! The in-memory implementations here back the test suite and
//! single-node deployments; a database adapter would implement the same
//! traits.

pub mod account;
pub mod role;

pub use account::{AccountStore, MemoryAccountStore};
pub use role::{MemoryRoleStore, RoleStore};
