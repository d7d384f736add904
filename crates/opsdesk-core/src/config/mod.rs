//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate, with `OPSDESK`-prefixed environment variables layered
//! on top. Signing secrets and notifier credentials carry **no** serde
//! defaults: their absence fails startup during deserialization rather
//! than surfacing at first use.

pub mod auth;
pub mod logging;
pub mod notifier;
pub mod otp;

use serde::{Deserialize, Serialize};

use self::auth::TokenConfig;
use self::logging::LoggingConfig;
use self::notifier::NotifierConfig;
use self::otp::OtpConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Token signing secrets and TTLs.
    pub auth: TokenConfig,
    /// One-time-passcode settings.
    #[serde(default)]
    pub otp: OtpConfig,
    /// Outbound notification credentials.
    pub notifier: NotifierConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// and `OPSDESK__`-prefixed environment variables, then validates
    /// that no critical secret is blank.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("OPSDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations whose required secrets are present but blank.
    pub fn validate(&self) -> Result<(), AppError> {
        self.auth.validate()?;
        self.notifier.validate()?;
        Ok(())
    }
}
