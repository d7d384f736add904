//! Integration tests for registration and the two-phase login flow.

use std::sync::atomic::Ordering;

use chrono::{Duration, Utc};
use uuid::Uuid;

use opsdesk_core::ErrorKind;
use opsdesk_store::AccountStore;

use crate::helpers::{TestCore, new_account};

#[tokio::test]
async fn test_register_returns_summary() {
    let core = TestCore::new();
    let summary = core
        .account_service
        .register(new_account("avery", "avery@example.com", "+15550100"))
        .await
        .unwrap();

    assert_eq!(summary.username, "avery");
    assert_eq!(summary.email, "avery@example.com");
    assert!(!summary.enable_custom_access);
    assert!(summary.role_id.is_none());
}

#[tokio::test]
async fn test_register_blank_field_is_validation_error() {
    let core = TestCore::new();
    let mut new = new_account("avery", "avery@example.com", "+15550100");
    new.phone = "   ".to_string();

    let err = core.account_service.register(new).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let core = TestCore::new();
    let mut new = new_account("avery", "avery@example.com", "+15550100");
    new.confirm_password = "different".to_string();

    let err = core.account_service.register(new).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "Passwords do not match");
}

#[tokio::test]
async fn test_register_role_plus_custom_access_is_policy_error() {
    let core = TestCore::new();
    let mut new = new_account("avery", "avery@example.com", "+15550100");
    new.role = Some(Uuid::new_v4());
    new.enable_custom_access = true;

    let err = core.account_service.register(new).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Policy);
}

#[tokio::test]
async fn test_register_duplicate_identity_is_conflict() {
    let core = TestCore::new();
    core.account_service
        .register(new_account("avery", "avery@example.com", "+15550100"))
        .await
        .unwrap();

    // Same phone, everything else fresh.
    let err = core
        .account_service
        .register(new_account("blake", "blake@example.com", "+15550100"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let core = TestCore::new();
    core.account_service
        .register(new_account("avery", "avery@example.com", "+15550100"))
        .await
        .unwrap();

    let unknown = core
        .account_service
        .login("nobody@example.com", "hunter2hunter2")
        .await
        .unwrap_err();
    let wrong_password = core
        .account_service
        .login("avery@example.com", "wrong-password")
        .await
        .unwrap_err();

    // Same kind, same message: no account enumeration.
    assert_eq!(unknown.kind, ErrorKind::Authentication);
    assert_eq!(wrong_password.kind, ErrorKind::Authentication);
    assert_eq!(unknown.message, wrong_password.message);
}

#[tokio::test]
async fn test_login_stores_and_dispatches_challenge() {
    let core = TestCore::new();
    core.account_service
        .register(new_account("avery", "avery@example.com", "+15550100"))
        .await
        .unwrap();

    core.account_service
        .login("avery@example.com", "hunter2hunter2")
        .await
        .unwrap();

    let stored = core.stored_code("avery@example.com").await;
    assert!((100_000..=999_999).contains(&stored));

    let sent = core.sent_codes().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "avery@example.com");
    assert_eq!(sent[0].1, stored);

    let account = core
        .accounts
        .find_by_email("avery@example.com")
        .await
        .unwrap()
        .unwrap();
    let ttl = account.otp.unwrap().expires_at - Utc::now();
    assert!(ttl > Duration::minutes(9));
    assert!(ttl <= Duration::minutes(10));
}

#[tokio::test]
async fn test_login_succeeds_even_when_dispatch_fails() {
    let core = TestCore::new();
    core.account_service
        .register(new_account("avery", "avery@example.com", "+15550100"))
        .await
        .unwrap();

    core.notifier.fail.store(true, Ordering::SeqCst);
    // Delivery failure is logged and swallowed; the login still reports
    // the OTP as sent and the challenge is stored.
    core.account_service
        .login("avery@example.com", "hunter2hunter2")
        .await
        .unwrap();

    assert!(core.sent_codes().await.is_empty());
    let _ = core.stored_code("avery@example.com").await;
}

#[tokio::test]
async fn test_verify_issues_tokens_and_clears_challenge() {
    let core = TestCore::new();
    core.account_service
        .register(new_account("avery", "avery@example.com", "+15550100"))
        .await
        .unwrap();
    core.account_service
        .login("avery@example.com", "hunter2hunter2")
        .await
        .unwrap();

    let code = core.stored_code("avery@example.com").await;
    let login = core
        .account_service
        .verify_otp("avery@example.com", &code.to_string())
        .await
        .unwrap();

    let claims = core.verifier.decode_access(&login.tokens.access_token).unwrap();
    assert_eq!(claims.account_id(), login.account.id);
    let claims = core
        .verifier
        .decode_refresh(&login.tokens.refresh_token)
        .unwrap();
    assert_eq!(claims.account_id(), login.account.id);

    let account = core
        .accounts
        .find_by_email("avery@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(account.otp.is_none());
}

#[tokio::test]
async fn test_verify_is_single_use() {
    let core = TestCore::new();
    core.account_service
        .register(new_account("avery", "avery@example.com", "+15550100"))
        .await
        .unwrap();
    core.account_service
        .login("avery@example.com", "hunter2hunter2")
        .await
        .unwrap();

    let code = core.stored_code("avery@example.com").await.to_string();
    core.account_service
        .verify_otp("avery@example.com", &code)
        .await
        .unwrap();

    // The same code again: the challenge is gone, so this reports
    // expiry, not a code mismatch.
    let err = core
        .account_service
        .verify_otp("avery@example.com", &code)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(err.message, "OTP expired. Please try login again.");
}

#[tokio::test]
async fn test_verify_wrong_code() {
    let core = TestCore::new();
    core.account_service
        .register(new_account("avery", "avery@example.com", "+15550100"))
        .await
        .unwrap();
    core.account_service
        .login("avery@example.com", "hunter2hunter2")
        .await
        .unwrap();

    let code = core.stored_code("avery@example.com").await;
    let wrong = if code == 100_000 { 999_999 } else { 100_000 };

    let err = core
        .account_service
        .verify_otp("avery@example.com", &wrong.to_string())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(err.message, "Invalid OTP");
}

#[tokio::test]
async fn test_verify_after_expiry_fails_despite_correct_code() {
    let core = TestCore::new();
    core.account_service
        .register(new_account("avery", "avery@example.com", "+15550100"))
        .await
        .unwrap();
    core.account_service
        .login("avery@example.com", "hunter2hunter2")
        .await
        .unwrap();

    // Age the stored challenge past its window.
    let mut account = core
        .accounts
        .find_by_email("avery@example.com")
        .await
        .unwrap()
        .unwrap();
    let code = account.otp.unwrap().code;
    account.otp = Some(opsdesk_entity::account::OtpChallenge {
        code,
        expires_at: Utc::now() - Duration::seconds(1),
    });
    core.accounts.update(account).await.unwrap();

    let err = core
        .account_service
        .verify_otp("avery@example.com", &code.to_string())
        .await
        .unwrap_err();
    assert_eq!(err.message, "OTP expired. Please try login again.");
}

#[tokio::test]
async fn test_refresh_mints_new_access_token() {
    let core = TestCore::new();
    core.account_service
        .register(new_account("avery", "avery@example.com", "+15550100"))
        .await
        .unwrap();
    core.account_service
        .login("avery@example.com", "hunter2hunter2")
        .await
        .unwrap();
    let code = core.stored_code("avery@example.com").await.to_string();
    let login = core
        .account_service
        .verify_otp("avery@example.com", &code)
        .await
        .unwrap();

    let (access, expires_at) = core
        .account_service
        .refresh_access(&login.tokens.refresh_token)
        .unwrap();
    let claims = core.verifier.decode_access(&access).unwrap();
    assert_eq!(claims.account_id(), login.account.id);
    assert!(expires_at > Utc::now());

    // Not rotated: the same refresh token keeps working.
    core.account_service
        .refresh_access(&login.tokens.refresh_token)
        .unwrap();
}

#[tokio::test]
async fn test_refresh_rejects_access_token_and_garbage() {
    let core = TestCore::new();
    core.account_service
        .register(new_account("avery", "avery@example.com", "+15550100"))
        .await
        .unwrap();
    core.account_service
        .login("avery@example.com", "hunter2hunter2")
        .await
        .unwrap();
    let code = core.stored_code("avery@example.com").await.to_string();
    let login = core
        .account_service
        .verify_otp("avery@example.com", &code)
        .await
        .unwrap();

    let err = core
        .account_service
        .refresh_access(&login.tokens.access_token)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidToken);

    let err = core.account_service.refresh_access("junk").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidToken);
}
