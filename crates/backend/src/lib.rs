//! Tiffin Backend - the backing service the storefront and admin talk to.
//!
//! This crate realizes the contract the rest of the system depends on:
//! order creation and compare-and-swap status transitions, the profile
//! store, and the account store. The production deployment would back these
//! with a database; the contract and the concurrency guarantees are what
//! matter here, so the stores are in-memory and the [`Backend`] handle is a
//! cheap clone shared across handlers.
//!
//! # Concurrency
//!
//! Order transitions take a per-order mutex and validate against the
//! *current persisted* status, never a caller-cached one. Two conflicting
//! concurrent requests on the same order therefore yield exactly one success
//! and one [`error::BackendError::InvalidTransition`]. Different orders
//! transition fully independently; no cross-order lock exists.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod accounts;
pub mod error;
pub mod orders;
pub mod profiles;

pub use accounts::{Account, AccountStore};
pub use error::BackendError;
pub use orders::{OrderFilter, OrderStore};
pub use profiles::ProfileStore;

use std::sync::Arc;

/// Handle to the backing stores, cheaply cloneable via `Arc`.
#[derive(Clone, Default)]
pub struct Backend {
    inner: Arc<BackendInner>,
}

#[derive(Default)]
struct BackendInner {
    orders: OrderStore,
    profiles: ProfileStore,
    accounts: AccountStore,
}

impl Backend {
    /// Create a backend with empty stores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    /// The profile store.
    #[must_use]
    pub fn profiles(&self) -> &ProfileStore {
        &self.inner.profiles
    }

    /// The account store.
    #[must_use]
    pub fn accounts(&self) -> &AccountStore {
        &self.inner.accounts
    }
}
