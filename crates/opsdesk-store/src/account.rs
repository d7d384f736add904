//! Account persistence.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use opsdesk_core::{AppError, AppResult};
use opsdesk_entity::account::Account;

/// Account persistence operations the auth core relies on.
#[async_trait]
pub trait AccountStore: Send + Sync + 'static {
    /// Find an account by its primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;

    /// Find an account by email address.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Whether any account already uses one of these identity fields.
    async fn identity_taken(&self, email: &str, username: &str, phone: &str) -> AppResult<bool>;

    /// Persist a new account.
    async fn insert(&self, account: Account) -> AppResult<Account>;

    /// Replace an existing account record (last-write-wins).
    async fn update(&self, account: Account) -> AppResult<Account>;
}

/// In-memory account store using a Tokio mutex for single-node use.
///
/// The mutex gives the per-record write serialization the core assumes
/// of its backing store.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccountStore {
    /// Accounts keyed by id.
    accounts: Arc<Mutex<HashMap<Uuid, Account>>>,
}

impl MemoryAccountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn identity_taken(&self, email: &str, username: &str, phone: &str) -> AppResult<bool> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .values()
            .any(|a| a.email == email || a.username == username || a.phone == phone))
    }

    async fn insert(&self, account: Account) -> AppResult<Account> {
        let mut accounts = self.accounts.lock().await;
        debug!(account_id = %account.id, username = %account.username, "Account stored");
        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> AppResult<Account> {
        let mut accounts = self.accounts.lock().await;
        if !accounts.contains_key(&account.id) {
            return Err(AppError::not_found("Account not found"));
        }
        accounts.insert(account.id, account.clone());
        Ok(account)
    }
}
