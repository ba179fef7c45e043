//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Session layer (tower-sessions with in-memory store)
//!
//! Authentication and the session gate are extractors rather than layers, so
//! each route states exactly which gate it sits behind.

pub mod auth;
pub mod gate;
pub mod session;

pub use auth::{CompleteCustomer, GateRejection, RequireCustomer};
pub use gate::{GateDecision, GateState, decide};
pub use session::create_session_layer;
