//! Authentication service.
//!
//! Provides email/password registration and login on top of the backend's
//! account store.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;

use tiffin_backend::{Account, Backend, BackendError};
use tiffin_core::{Email, Profile};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles customer registration and login.
pub struct AuthService<'a> {
    backend: &'a Backend,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(backend: &'a Backend) -> Self {
        Self { backend }
    }

    /// Register a new customer with email and password.
    ///
    /// Also seeds a profile carrying the sign-up name and email; the mobile
    /// number and date of birth stay unset until the customer completes
    /// their profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<Account, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;
        let password_hash = hash_password(password)?;

        let account = self
            .backend
            .accounts()
            .create(email, password_hash, full_name.to_owned(), Utc::now())
            .map_err(|e| match e {
                BackendError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Backend(other),
            })?;

        self.backend.profiles().upsert(Profile::new(
            account.id,
            account.full_name.clone(),
            account.email.clone(),
        ));

        Ok(account)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub fn login(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        let email = Email::parse(email)?;

        let account = self
            .backend
            .accounts()
            .find_by_email(&email)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &account.password_hash)?;

        Ok(account)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_login() {
        let backend = Backend::new();
        let auth = AuthService::new(&backend);

        let account = auth
            .register("asha@example.com", "sup3r-secret", "Asha Rao")
            .unwrap();
        assert_eq!(account.full_name, "Asha Rao");

        // Registration seeds an incomplete profile.
        let profile = backend.profiles().get(account.id).unwrap();
        assert!(!profile.is_complete());

        let logged_in = auth.login("asha@example.com", "sup3r-secret").unwrap();
        assert_eq!(logged_in.id, account.id);
    }

    #[test]
    fn test_login_wrong_password() {
        let backend = Backend::new();
        let auth = AuthService::new(&backend);
        auth.register("asha@example.com", "sup3r-secret", "Asha Rao")
            .unwrap();

        let err = auth.login("asha@example.com", "wrong-secret").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_register_duplicate_email() {
        let backend = Backend::new();
        let auth = AuthService::new(&backend);
        auth.register("asha@example.com", "sup3r-secret", "Asha Rao")
            .unwrap();

        let err = auth
            .register("asha@example.com", "other-secret", "Other")
            .unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists));
    }

    #[test]
    fn test_short_password_rejected() {
        let backend = Backend::new();
        let auth = AuthService::new(&backend);
        let err = auth.register("asha@example.com", "short", "Asha").unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword(_)));
    }
}
