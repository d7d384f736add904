//! OTP challenge generation and verification.
//!
//! The OTP step decouples "knows the password" from "controls the
//! registered contact channel". The validity window bounds how long an
//! intercepted code stays usable.

use chrono::{DateTime, Duration, Utc};
use rand::RngExt;
use thiserror::Error;

use opsdesk_core::AppError;
use opsdesk_core::config::otp::OtpConfig;
use opsdesk_entity::account::OtpChallenge;

/// Smallest issued code (inclusive).
const CODE_MIN: u32 = 100_000;
/// Largest issued code (inclusive).
const CODE_MAX: u32 = 999_999;

/// Failure modes of OTP verification.
///
/// Kept distinct so single-use semantics are observable: a consumed or
/// stale challenge reports `Expired`, never a code mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OtpError {
    /// No challenge is pending, or its validity window has passed.
    #[error("OTP expired. Please try login again.")]
    Expired,
    /// A challenge is pending but the candidate code does not match.
    #[error("Invalid OTP")]
    Mismatch,
}

impl From<OtpError> for AppError {
    fn from(err: OtpError) -> Self {
        AppError::authentication(err.to_string())
    }
}

/// Issues and verifies time-bounded one-time passcodes.
#[derive(Debug, Clone)]
pub struct OtpEngine {
    /// Challenge validity window.
    ttl: Duration,
}

impl OtpEngine {
    /// Creates an engine from OTP configuration.
    pub fn new(config: &OtpConfig) -> Self {
        Self {
            ttl: Duration::minutes(config.ttl_minutes as i64),
        }
    }

    /// Generates a fresh challenge: a uniformly random 6-digit code with
    /// the configured expiry. The caller binds it to an account and
    /// hands the code to the notification channel.
    pub fn issue(&self) -> OtpChallenge {
        let code = rand::rng().random_range(CODE_MIN..=CODE_MAX);
        OtpChallenge {
            code,
            expires_at: Utc::now() + self.ttl,
        }
    }

    /// Verifies a candidate code against the account's pending
    /// challenge, if any. The caller clears the challenge on success
    /// (single use).
    pub fn verify(&self, challenge: Option<&OtpChallenge>, candidate: u32) -> Result<(), OtpError> {
        self.verify_at(challenge, candidate, Utc::now())
    }

    /// Verification against an explicit clock.
    pub fn verify_at(
        &self,
        challenge: Option<&OtpChallenge>,
        candidate: u32,
        now: DateTime<Utc>,
    ) -> Result<(), OtpError> {
        let challenge = challenge.ok_or(OtpError::Expired)?;
        if challenge.is_expired_at(now) {
            return Err(OtpError::Expired);
        }
        if !challenge.matches(candidate) {
            return Err(OtpError::Mismatch);
        }
        Ok(())
    }
}
