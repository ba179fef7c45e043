//! Tiffin Core - Shared domain library.
//!
//! This crate provides the domain types and logic used across all Tiffin
//! components:
//! - `storefront` - Customer-facing ordering API
//! - `admin` - Staff order-management API
//! - `backend` - In-process backing store implementing the order contract
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, money, emails, and mobile numbers
//! - [`cart`] - The customer's in-progress selection of line items
//! - [`favorites`] - The customer's liked-item set
//! - [`order`] - The order record and its status state machine
//! - [`profile`] - Customer profile and the completeness predicate
//! - [`reporting`] - Pure aggregation of an order collection into figures

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod favorites;
pub mod order;
pub mod profile;
pub mod reporting;
pub mod types;

pub use cart::{Cart, CartError, Discount, ItemKey, LineItem};
pub use favorites::{FavoriteItem, Favorites};
pub use order::{EmptyOrder, Order, OrderStatus, TransitionError};
pub use profile::{Profile, ProfileField};
pub use reporting::{RevenueReport, daily_growth_percent, revenue_report};
pub use types::*;
