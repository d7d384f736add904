//! Pending OTP challenge bound to an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A one-time passcode awaiting verification.
///
/// Created at login-start, cleared on first successful verification,
/// implicitly invalid after expiry. No rotation, no multi-use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpChallenge {
    /// The 6-digit numeric code.
    pub code: u32,
    /// Instant after which the code is no longer accepted.
    pub expires_at: DateTime<Utc>,
}

impl OtpChallenge {
    /// Whether the challenge has passed its expiry at the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whether the candidate code matches. Codes are compared as
    /// integers, so storage and input format differences cannot cause a
    /// spurious mismatch.
    pub fn matches(&self, candidate: u32) -> bool {
        self.code == candidate
    }
}
