//! Opsdesk Server — back-office authentication and RBAC core.
//!
//! Entry point that loads configuration, wires the service graph, and
//! waits for shutdown. Transport adapters (HTTP, CLI) mount on top of
//! the services assembled here.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use opsdesk_auth::access::PermissionResolver;
use opsdesk_auth::otp::OtpEngine;
use opsdesk_auth::password::PasswordHasher;
use opsdesk_auth::token::{TokenIssuer, TokenVerifier};
use opsdesk_core::config::AppConfig;
use opsdesk_core::error::AppError;
use opsdesk_service::{AccountService, LogNotifier, RoleService};
use opsdesk_store::{MemoryAccountStore, MemoryRoleStore};

#[tokio::main]
async fn main() {
    // Missing or blank secrets fail here, before anything else runs.
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("OPSDESK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Wire the service graph and park until shutdown.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Opsdesk v{}", env!("CARGO_PKG_VERSION"));

    let account_store = Arc::new(MemoryAccountStore::new());
    let role_store = Arc::new(MemoryRoleStore::new());

    // Transport adapters mount on top of these services.
    let _account_service = AccountService::new(
        account_store,
        PasswordHasher::new(),
        OtpEngine::new(&config.otp),
        TokenIssuer::new(&config.auth),
        TokenVerifier::new(&config.auth),
        Arc::new(LogNotifier),
    );
    let _role_service = RoleService::new(role_store.clone());
    let _resolver = PermissionResolver::new(role_store);

    tracing::info!("Auth core ready; waiting for shutdown signal");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::internal(format!("Failed to listen for shutdown: {e}")))?;

    tracing::info!("Shutdown signal received, exiting");
    Ok(())
}
