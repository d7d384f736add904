//! Out-of-band notification capability.

use async_trait::async_trait;

use crate::result::AppResult;

/// Delivers a one-time passcode over a registered contact channel.
///
/// Injected into the login flow rather than configured as a module-level
/// transporter, so tests can substitute a recording double and the OTP
/// engine never owns delivery credentials. Dispatch failures are the
/// caller's to log and swallow; delivery is fire-and-forget from the
/// login flow's perspective.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    /// Send `code` to the given destination (email address or phone).
    async fn send_otp(&self, destination: &str, code: u32) -> AppResult<()>;
}
