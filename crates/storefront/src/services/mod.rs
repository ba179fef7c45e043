//! Business-logic services for the storefront.

pub mod auth;

pub use auth::{AuthError, AuthService};
