//! Account and profile route handlers.
//!
//! The profile-completion endpoints sit behind the full session gate: an
//! anonymous request is sent to login, a customer whose profile is already
//! complete is sent home, and only a signed-in customer with missing fields
//! reaches the handlers.

use axum::{Json, extract::State, response::IntoResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use tiffin_core::{MobileNumber, Profile, ProfileField};

use crate::error::AppError;
use crate::middleware::{CompleteCustomer, RequireCustomer};
use crate::state::AppState;

/// Profile representation returned by the account endpoints.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// The profile on record.
    #[serde(flatten)]
    pub profile: Profile,
    /// Whether the profile satisfies the completeness requirement.
    pub complete: bool,
    /// Fields still missing for completeness.
    pub missing_fields: Vec<ProfileField>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            complete: profile.is_complete(),
            missing_fields: profile.missing_fields(),
            profile,
        }
    }
}

/// Profile-completion request body.
#[derive(Debug, Deserialize)]
pub struct CompleteProfileRequest {
    /// Mobile number in any accepted formatting.
    pub mobile_number: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub date_of_birth: String,
}

/// Return the signed-in customer's profile.
#[instrument(skip_all)]
pub async fn profile(
    RequireCustomer(customer): RequireCustomer,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let profile = state
        .backend()
        .profiles()
        .get(customer.id)
        .ok_or_else(|| AppError::NotFound("profile".to_owned()))?;
    Ok(Json(ProfileResponse::from(profile)))
}

/// Show the profile-completion state.
///
/// Gated so that a customer whose profile is already complete is redirected
/// home rather than shown fields they cannot need.
#[instrument(skip_all)]
pub async fn completion_form(
    CompleteCustomer(customer): CompleteCustomer,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let profile = state
        .backend()
        .profiles()
        .get(customer.id)
        .ok_or_else(|| AppError::NotFound("profile".to_owned()))?;
    Ok(Json(ProfileResponse::from(profile)))
}

/// Record the missing profile fields.
#[instrument(skip_all)]
pub async fn complete_profile(
    CompleteCustomer(customer): CompleteCustomer,
    State(state): State<AppState>,
    Json(req): Json<CompleteProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mobile_number = MobileNumber::parse(&req.mobile_number)?;
    let date_of_birth = NaiveDate::parse_from_str(&req.date_of_birth, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("date_of_birth must be YYYY-MM-DD".to_owned()))?;

    let mut profile = state
        .backend()
        .profiles()
        .get(customer.id)
        .ok_or_else(|| AppError::NotFound("profile".to_owned()))?;
    profile.mobile_number = Some(mobile_number);
    profile.date_of_birth = Some(date_of_birth);
    state.backend().profiles().upsert(profile.clone());

    tracing::info!(customer_id = %customer.id, "profile completed");
    Ok(Json(ProfileResponse::from(profile)))
}
