//! Account domain entities.

pub mod challenge;
pub mod model;

pub use challenge::OtpChallenge;
pub use model::{AccessSource, Account, AccountSummary, NewAccount};
