//! Capability traits implemented by collaborator crates.

pub mod notifier;

pub use notifier::Notifier;
