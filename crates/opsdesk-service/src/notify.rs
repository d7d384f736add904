//! Development notifier.

use async_trait::async_trait;
use tracing::info;

use opsdesk_core::AppResult;
use opsdesk_core::traits::Notifier;

/// Logs passcodes instead of delivering them.
///
/// Stands in for the SMTP/SMS collaborator in development and tests;
/// production wires a real channel behind the same trait.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_otp(&self, destination: &str, code: u32) -> AppResult<()> {
        info!(destination = %destination, code = code, "OTP dispatch (log channel)");
        Ok(())
    }
}
