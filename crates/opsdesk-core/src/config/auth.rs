//! Token signing configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Session token signing secrets and lifetimes.
///
/// Access and refresh tokens are signed with **distinct** secrets so a
/// leaked access secret cannot be used to mint refresh tokens. Both
/// fields are required; deserialization fails when either is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Secret key for access token signing (HMAC-SHA256).
    pub access_token_secret: String,
    /// Secret key for refresh token signing (HMAC-SHA256).
    pub refresh_token_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
}

impl TokenConfig {
    /// Fail when either signing secret is blank.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.access_token_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.access_token_secret is empty"));
        }
        if self.refresh_token_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.refresh_token_secret is empty",
            ));
        }
        Ok(())
    }
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7
}
