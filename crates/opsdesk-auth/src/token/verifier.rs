//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use opsdesk_core::AppError;
use opsdesk_core::config::auth::TokenConfig;

use super::claims::Claims;

/// Validates session tokens.
///
/// Stateless: a token is valid iff its signature checks out against the
/// matching secret and its `exp` has not passed. There is no blocklist,
/// so a leaked refresh token stays valid until its natural expiry.
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC key for access tokens.
    access_key: DecodingKey,
    /// HMAC key for refresh tokens.
    refresh_key: DecodingKey,
    /// Shared validation settings.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from token configuration.
    pub fn new(config: &TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // `exp` is a hard boundary: one second past it the token is dead.
        validation.leeway = 0;

        Self {
            access_key: DecodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token.
    pub fn decode_access(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_with(token, &self.access_key)
    }

    /// Decodes and validates a refresh token.
    pub fn decode_refresh(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_with(token, &self.refresh_key)
    }

    fn decode_with(&self, token: &str, key: &DecodingKey) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, key, &self.validation).map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::invalid_token("Token has expired")
            }
            jsonwebtoken::errors::ErrorKind::InvalidToken => {
                AppError::invalid_token("Invalid token format")
            }
            jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                AppError::invalid_token("Invalid token signature")
            }
            _ => AppError::invalid_token(format!("Token validation failed: {e}")),
        })?;

        Ok(data.claims)
    }
}
