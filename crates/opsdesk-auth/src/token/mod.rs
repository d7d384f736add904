//! Signed session tokens.

pub mod claims;
pub mod issuer;
pub mod verifier;

pub use claims::Claims;
pub use issuer::{TokenIssuer, TokenPair};
pub use verifier::TokenVerifier;
