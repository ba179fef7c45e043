//! HTTP middleware for the admin API.

pub mod auth;

pub use auth::RequireStaff;
