//! Authentication extractors.
//!
//! Provides extractors for requiring customer authentication in route
//! handlers. [`RequireCustomer`] checks the session only; [`CompleteCustomer`]
//! additionally runs the session gate against the customer's profile, so views
//! that need a complete profile reject or redirect before the handler runs.
//!
//! The gate is evaluated fresh on every request. If a request is torn down
//! before the extractor resolves, no decision is applied on its behalf.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::middleware::gate::{
    COMPLETE_PROFILE_PATH, GateDecision, GateState, HOME_PATH, LOGIN_PATH, decide,
};
use crate::models::session::{CurrentCustomer, keys};
use crate::state::AppState;

/// Extractor that requires a signed-in customer.
///
/// Does not consult the profile; use [`CompleteCustomer`] for views that
/// require a complete profile.
pub struct RequireCustomer(pub CurrentCustomer);

/// Extractor that requires a signed-in customer with a complete profile.
pub struct CompleteCustomer(pub CurrentCustomer);

/// Rejection issued when the gate blocks a request.
pub enum GateRejection {
    /// Redirect the customer to the login form.
    RedirectToLogin,
    /// Redirect the customer to the profile-completion form.
    RedirectToCompleteProfile,
    /// Redirect the customer to the home view.
    RedirectToHome,
    /// The session layer was missing or failed.
    Internal,
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
            Self::RedirectToCompleteProfile => Redirect::to(COMPLETE_PROFILE_PATH).into_response(),
            Self::RedirectToHome => Redirect::to(HOME_PATH).into_response(),
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// The request path as the client sent it.
///
/// Extractors run after `Router::nest` has stripped the matched prefix from
/// `parts.uri`, so the gate must compare against the original URI axum
/// preserves in the extensions, or a nested route would look like a
/// different view than the one the redirect targets.
fn original_path(parts: &Parts) -> &str {
    parts
        .extensions
        .get::<OriginalUri>()
        .map_or_else(|| parts.uri.path(), |uri| uri.0.path())
}

async fn session_customer(parts: &Parts) -> Result<Option<CurrentCustomer>, GateRejection> {
    let session = parts
        .extensions
        .get::<Session>()
        .ok_or(GateRejection::Internal)?;
    session
        .get(keys::CURRENT_CUSTOMER)
        .await
        .map_err(|_| GateRejection::Internal)
}

impl<S> FromRequestParts<S> for RequireCustomer
where
    S: Send + Sync,
{
    type Rejection = GateRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match session_customer(parts).await? {
            Some(customer) => Ok(Self(customer)),
            None => Err(GateRejection::RedirectToLogin),
        }
    }
}

impl FromRequestParts<AppState> for CompleteCustomer {
    type Rejection = GateRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let customer = session_customer(parts).await?;

        let gate_state = match &customer {
            None => GateState::Anonymous,
            Some(current) => {
                let complete = state
                    .backend()
                    .profiles()
                    .get(current.id)
                    .is_some_and(|profile| profile.is_complete());
                if complete {
                    GateState::Complete
                } else {
                    GateState::IncompleteProfile
                }
            }
        };

        match decide(gate_state, original_path(parts)) {
            GateDecision::Proceed => {
                // Proceed is only reachable here with a signed-in customer,
                // because the anonymous state proceeds solely on the login
                // path, which never mounts this extractor.
                customer.map(Self).ok_or(GateRejection::Internal)
            }
            GateDecision::RedirectToLogin => Err(GateRejection::RedirectToLogin),
            GateDecision::RedirectToCompleteProfile => Err(GateRejection::RedirectToCompleteProfile),
            GateDecision::RedirectToHome => Err(GateRejection::RedirectToHome),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::Request;

    use super::*;

    #[test]
    fn test_original_path_survives_nest_prefix_stripping() {
        // After `Router::nest("/account", ...)` the request URI an extractor
        // sees is the suffix; the client-visible path lives in `OriginalUri`.
        let (mut parts, ()) = Request::builder()
            .uri("/complete-profile")
            .body(())
            .unwrap()
            .into_parts();
        parts
            .extensions
            .insert(OriginalUri(COMPLETE_PROFILE_PATH.parse().unwrap()));

        assert_eq!(original_path(&parts), COMPLETE_PROFILE_PATH);
    }

    #[test]
    fn test_original_path_falls_back_to_request_uri() {
        let (parts, ()) = Request::builder()
            .uri("/checkout")
            .body(())
            .unwrap()
            .into_parts();

        assert_eq!(original_path(&parts), "/checkout");
    }
}
