//! One-time-passcode challenges.

pub mod engine;

pub use engine::{OtpEngine, OtpError};
