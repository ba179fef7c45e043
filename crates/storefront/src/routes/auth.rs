//! Authentication route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_sessions::Session;
use tracing::instrument;

use tiffin_core::{CustomerId, Email};

use crate::error::AppError;
use crate::models::session::{CurrentCustomer, set_current_customer};
use crate::services::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Sign-in email.
    pub email: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
    /// Full display name.
    pub full_name: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Sign-in email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Identity returned after register/login.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    /// The customer's id.
    pub customer_id: CustomerId,
    /// The customer's email.
    pub email: Email,
}

/// Register a new customer and sign them in.
#[instrument(skip_all, fields(email = %req.email))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthService::new(state.backend());
    let account = auth.register(&req.email, &req.password, &req.full_name)?;

    // Fresh session id on privilege change
    session.cycle_id().await?;
    set_current_customer(
        &session,
        &CurrentCustomer {
            id: account.id,
            email: account.email.clone(),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CustomerResponse {
            customer_id: account.id,
            email: account.email,
        }),
    ))
}

/// Sign in with email and password.
#[instrument(skip_all, fields(email = %req.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthService::new(state.backend());
    let account = auth.login(&req.email, &req.password)?;

    session.cycle_id().await?;
    set_current_customer(
        &session,
        &CurrentCustomer {
            id: account.id,
            email: account.email.clone(),
        },
    )
    .await?;

    Ok(Json(CustomerResponse {
        customer_id: account.id,
        email: account.email,
    }))
}

/// Sign out.
///
/// Flushes the whole session, discarding the cart and favorites with the
/// identity.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;
    Ok(Json(json!({ "signed_out": true })))
}
