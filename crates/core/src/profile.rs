//! Customer profile and the completeness predicate.
//!
//! Completeness is decided in exactly one place: [`Profile::is_complete`].
//! The optional fields are real `Option`s, not empty strings, so there is no
//! truthiness to get wrong.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, Email, MobileNumber};

/// Profile fields required for completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// The customer's mobile number.
    MobileNumber,
    /// The customer's date of birth.
    DateOfBirth,
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MobileNumber => write!(f, "mobile_number"),
            Self::DateOfBirth => write!(f, "date_of_birth"),
        }
    }
}

/// A customer profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// The customer this profile belongs to.
    pub user_id: CustomerId,
    /// Full display name, collected at sign-up.
    pub full_name: String,
    /// Sign-in email.
    pub email: Email,
    /// Mobile number; required for completeness.
    pub mobile_number: Option<MobileNumber>,
    /// Date of birth; required for completeness.
    pub date_of_birth: Option<NaiveDate>,
}

impl Profile {
    /// Create a fresh, incomplete profile for a new account.
    #[must_use]
    pub const fn new(user_id: CustomerId, full_name: String, email: Email) -> Self {
        Self {
            user_id,
            full_name,
            email,
            mobile_number: None,
            date_of_birth: None,
        }
    }

    /// The completeness invariant: mobile number and date of birth both
    /// recorded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.mobile_number.is_some() && self.date_of_birth.is_some()
    }

    /// The fields still missing for completeness, in a stable order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        let mut missing = Vec::new();
        if self.mobile_number.is_none() {
            missing.push(ProfileField::MobileNumber);
        }
        if self.date_of_birth.is_none() {
            missing.push(ProfileField::DateOfBirth);
        }
        missing
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::new(
            CustomerId::new(),
            "Asha Rao".to_owned(),
            Email::parse("asha@example.com").unwrap(),
        )
    }

    #[test]
    fn test_new_profile_is_incomplete() {
        let p = profile();
        assert!(!p.is_complete());
        assert_eq!(
            p.missing_fields(),
            vec![ProfileField::MobileNumber, ProfileField::DateOfBirth]
        );
    }

    #[test]
    fn test_one_field_is_not_enough() {
        let mut p = profile();
        p.mobile_number = Some(MobileNumber::parse("9876543210").unwrap());
        assert!(!p.is_complete());
        assert_eq!(p.missing_fields(), vec![ProfileField::DateOfBirth]);
    }

    #[test]
    fn test_both_fields_complete() {
        let mut p = profile();
        p.mobile_number = Some(MobileNumber::parse("9876543210").unwrap());
        p.date_of_birth = NaiveDate::from_ymd_opt(1994, 3, 21);
        assert!(p.is_complete());
        assert!(p.missing_fields().is_empty());
    }
}
