//! One-time-passcode configuration.

use serde::{Deserialize, Serialize};

/// OTP challenge settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpConfig {
    /// Challenge validity window in minutes.
    #[serde(default = "default_ttl")]
    pub ttl_minutes: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_ttl(),
        }
    }
}

fn default_ttl() -> u64 {
    10
}
