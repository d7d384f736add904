//! JWT claims carried by session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload for both access and refresh tokens.
///
/// The account id is the only application claim. Validity derives
/// entirely from the signature and `exp`; nothing is persisted
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the account id.
    pub sub: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Build claims for the given account, valid until `expires_at`.
    pub fn new(account_id: Uuid, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: account_id,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// The account id from the subject claim.
    pub fn account_id(&self) -> Uuid {
        self.sub
    }
}
