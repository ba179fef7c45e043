//! Session-gate decision logic.
//!
//! The gate looks at the authentication and profile state for a request and
//! decides whether it proceeds or where it is redirected. The decision is a
//! pure function of the observed state and the requested path, so a request
//! already at its redirect target proceeds instead of looping.

/// Path of the login form.
pub const LOGIN_PATH: &str = "/auth/login";

/// Path of the profile-completion form.
pub const COMPLETE_PROFILE_PATH: &str = "/account/complete-profile";

/// Path of the home view.
pub const HOME_PATH: &str = "/";

/// Authentication and profile state observed for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No customer is signed in.
    Anonymous,
    /// A customer is signed in but their profile lacks required fields.
    IncompleteProfile,
    /// A customer is signed in with a complete profile.
    Complete,
}

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The request may proceed to its handler.
    Proceed,
    /// The customer must sign in first.
    RedirectToLogin,
    /// The customer must fill in the missing profile fields first.
    RedirectToCompleteProfile,
    /// The customer has nothing left to do here; send them home.
    RedirectToHome,
}

/// Decides what happens to a request at `path` given the observed `state`.
///
/// A redirect is only issued when the request is not already at the redirect
/// target, so repeated evaluations with unchanged state settle on
/// [`GateDecision::Proceed`]. A customer with a complete profile visiting the
/// completion form is sent home rather than shown a form they cannot need.
#[must_use]
pub fn decide(state: GateState, path: &str) -> GateDecision {
    match state {
        GateState::Anonymous => {
            if path == LOGIN_PATH {
                GateDecision::Proceed
            } else {
                GateDecision::RedirectToLogin
            }
        }
        GateState::IncompleteProfile => {
            if path == COMPLETE_PROFILE_PATH {
                GateDecision::Proceed
            } else {
                GateDecision::RedirectToCompleteProfile
            }
        }
        GateState::Complete => {
            if path == COMPLETE_PROFILE_PATH {
                GateDecision::RedirectToHome
            } else {
                GateDecision::Proceed
            }
        }
    }
}
