//! Outbound notification configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Credentials for the out-of-band OTP delivery channel.
///
/// All fields are required: a deployment without working delivery
/// credentials would silently strand every login at the OTP step, so
/// absence fails startup instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Sender address shown on outbound messages.
    pub from_address: String,
    /// SMTP relay host.
    pub smtp_host: String,
    /// SMTP username.
    pub smtp_username: String,
    /// SMTP password.
    pub smtp_password: String,
}

impl NotifierConfig {
    /// Fail when any credential field is blank.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [
            ("notifier.from_address", &self.from_address),
            ("notifier.smtp_host", &self.smtp_host),
            ("notifier.smtp_username", &self.smtp_username),
            ("notifier.smtp_password", &self.smtp_password),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::configuration(format!("{name} is empty")));
            }
        }
        Ok(())
    }
}
