//! Account store for sign-in credentials.
//!
//! Password hashing happens in the storefront's auth service; this store
//! only holds the resulting hash next to the account identity.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};

use tiffin_core::{CustomerId, Email};

use crate::error::BackendError;

/// A customer account.
#[derive(Debug, Clone)]
pub struct Account {
    /// The customer id assigned at registration.
    pub id: CustomerId,
    /// Sign-in email; unique across accounts.
    pub email: Email,
    /// Argon2id password hash.
    pub password_hash: String,
    /// Full name collected at sign-up.
    pub full_name: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Accounts keyed by email.
#[derive(Default)]
pub struct AccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl AccountStore {
    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Conflict`] if the email is already
    /// registered.
    pub fn create(
        &self,
        email: Email,
        password_hash: String,
        full_name: String,
        now: DateTime<Utc>,
    ) -> Result<Account, BackendError> {
        let mut accounts = self
            .accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if accounts.contains_key(email.as_str()) {
            return Err(BackendError::Conflict("email already exists".to_owned()));
        }

        let account = Account {
            id: CustomerId::new(),
            email: email.clone(),
            password_hash,
            full_name,
            created_at: now,
        };
        accounts.insert(email.as_str().to_owned(), account.clone());
        tracing::info!(customer_id = %account.id, "account created");
        Ok(account)
    }

    /// Look up an account by email.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<Account> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(email.as_str())
            .cloned()
    }
}
