//! Unified application error types for Opsdesk.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Collaborator failures (store,
//! notifier, codec) are wrapped with a safe message and never leak
//! hashes, secrets, or driver internals to the caller.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Authentication failed. Deliberately generic: bad credentials and
    /// bad/expired OTP share this kind so callers cannot enumerate
    /// accounts.
    Authentication,
    /// Input validation failed.
    Validation,
    /// A uniqueness violation occurred (duplicate email/username/phone).
    Conflict,
    /// Mutually exclusive options were both set.
    Policy,
    /// A session token was missing, malformed, expired, or forged.
    InvalidToken,
    /// An unexpected failure in a collaborator occurred.
    Internal,
    /// A configuration error occurred.
    Configuration,
}

impl ErrorKind {
    /// HTTP status a transport adapter should map this kind to.
    ///
    /// `Authentication` is 400 rather than 401 on purpose: the login
    /// endpoints answer bad credentials with a generic 400 so the
    /// response does not distinguish unknown accounts from wrong
    /// passwords. Only token verification answers 401.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Authentication => 400,
            Self::Validation => 400,
            Self::Conflict => 400,
            Self::Policy => 400,
            Self::InvalidToken => 401,
            Self::Internal => 500,
            Self::Configuration => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Policy => write!(f, "POLICY"),
            Self::InvalidToken => write!(f, "INVALID_TOKEN"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Configuration => write!(f, "CONFIGURATION"),
        }
    }
}

/// The unified application error used throughout Opsdesk.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary: a stable `kind` plus a human-readable
/// message.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message safe to show to the caller.
    pub message: String,
    /// Optional underlying cause. Never serialized or displayed.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a policy error.
    pub fn policy(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Policy, message)
    }

    /// Create an invalid-token error.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
