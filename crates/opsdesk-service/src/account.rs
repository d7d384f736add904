//! Account service — registration and the two-phase login flow.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use opsdesk_auth::otp::OtpEngine;
use opsdesk_auth::password::PasswordHasher;
use opsdesk_auth::token::{TokenIssuer, TokenPair, TokenVerifier};
use opsdesk_core::traits::Notifier;
use opsdesk_core::{AppError, AppResult};
use opsdesk_entity::account::{AccessSource, Account, AccountSummary, NewAccount};
use opsdesk_store::AccountStore;

/// Result of a successful OTP verification: the session token pair plus
/// the account summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedLogin {
    /// Freshly issued session tokens.
    pub tokens: TokenPair,
    /// The authenticated account.
    pub account: AccountSummary,
}

/// Registration, login, OTP verification, and token refresh.
#[derive(Clone)]
pub struct AccountService {
    /// Account persistence.
    accounts: Arc<dyn AccountStore>,
    /// Password hashing.
    hasher: PasswordHasher,
    /// OTP challenge issuance and verification.
    otp: OtpEngine,
    /// Session token creation.
    issuer: TokenIssuer,
    /// Session token validation.
    verifier: TokenVerifier,
    /// Out-of-band OTP delivery.
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService").finish()
    }
}

impl AccountService {
    /// Creates an account service with all required collaborators.
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        hasher: PasswordHasher,
        otp: OtpEngine,
        issuer: TokenIssuer,
        verifier: TokenVerifier,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            otp,
            issuer,
            verifier,
            notifier,
        }
    }

    /// Registers a new account.
    ///
    /// Fails with `Validation` when a required field is blank or the
    /// password confirmation mismatches, `Policy` when both a role and
    /// custom access are requested, and `Conflict` when the email,
    /// username, or phone is already taken.
    pub async fn register(&self, new: NewAccount) -> AppResult<AccountSummary> {
        let required = [
            &new.first_name,
            &new.last_name,
            &new.username,
            &new.email,
            &new.phone,
            &new.password,
            &new.confirm_password,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(AppError::validation("Please fill in all required fields"));
        }

        if new.password != new.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }

        if new.enable_custom_access && new.role.is_some() {
            return Err(AppError::policy(
                "Cannot enable both custom access and assign a role",
            ));
        }

        if self
            .accounts
            .identity_taken(&new.email, &new.username, &new.phone)
            .await?
        {
            return Err(AppError::conflict(
                "An account with this email, username, or phone already exists",
            ));
        }

        let access = if new.enable_custom_access {
            Some(AccessSource::Custom {
                permissions: new.custom_permissions,
            })
        } else {
            new.role.map(|role_id| AccessSource::Role { role_id })
        };

        let password_hash = self.hasher.hash(&new.password)?;
        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            image: new.image,
            first_name: new.first_name,
            last_name: new.last_name,
            designation: new.designation,
            username: new.username,
            email: new.email,
            phone: new.phone,
            password_hash,
            is_verified: false,
            access,
            otp: None,
            created_at: now,
            updated_at: now,
        };

        let account = self.accounts.insert(account).await?;
        info!(account_id = %account.id, username = %account.username, "Account created");
        Ok(account.summary())
    }

    /// First login phase: check the password, then issue and dispatch an
    /// OTP challenge.
    ///
    /// Unknown email and wrong password collapse into one generic
    /// `Authentication` error so callers cannot probe which accounts
    /// exist. Delivery failure is logged and swallowed; the caller is
    /// told the OTP was sent either way.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<()> {
        let mut account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        if !self.hasher.verify(password, &account.password_hash)? {
            return Err(AppError::authentication("Invalid email or password"));
        }

        let challenge = self.otp.issue();
        account.otp = Some(challenge);
        account.updated_at = Utc::now();
        self.accounts.update(account.clone()).await?;

        if let Err(e) = self.notifier.send_otp(&account.email, challenge.code).await {
            error!(account_id = %account.id, error = %e, "OTP dispatch failed");
        }

        info!(account_id = %account.id, "OTP challenge issued");
        Ok(())
    }

    /// Second login phase: verify the OTP and issue the session tokens.
    ///
    /// The challenge is single-use: it is cleared on success, so a
    /// repeat verification reports an expired challenge rather than a
    /// code mismatch.
    pub async fn verify_otp(&self, email: &str, candidate: &str) -> AppResult<VerifiedLogin> {
        let mut account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email"))?;

        // An unparsable candidate can never equal a live 6-digit code;
        // folding it to 0 keeps expiry checked before the code itself.
        let code: u32 = candidate.trim().parse().unwrap_or(0);
        self.otp.verify(account.otp.as_ref(), code)?;

        account.otp = None;
        account.updated_at = Utc::now();
        let account = self.accounts.update(account).await?;

        let tokens = self.issuer.issue_pair(account.id)?;
        info!(account_id = %account.id, "Login verified, session tokens issued");

        Ok(VerifiedLogin {
            tokens,
            account: account.summary(),
        })
    }

    /// Mints a new access token from a valid refresh token.
    ///
    /// The refresh token itself is not rotated; it keeps minting access
    /// tokens until its own expiry.
    pub fn refresh_access(
        &self,
        refresh_token: &str,
    ) -> AppResult<(String, chrono::DateTime<Utc>)> {
        let claims = self.verifier.decode_refresh(refresh_token)?;
        self.issuer.issue_access(claims.account_id())
    }

    /// Ends a session. Tokens are stateless, so there is nothing to
    /// revoke server-side; the transport clears its cookies and this
    /// always succeeds.
    pub fn logout(&self) {
        info!("Logout requested; session tokens left to expire");
    }
}
