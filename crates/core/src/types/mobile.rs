//! Mobile number type.
//!
//! Profile completeness hinges on a recorded mobile number, so malformed
//! input must be rejected at the boundary rather than stored and discovered
//! later by the gate.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`MobileNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum MobileNumberError {
    /// The input string is empty (or only separators).
    #[error("mobile number cannot be empty")]
    Empty,
    /// The number has too few or too many digits.
    #[error("mobile number must have between {min} and {max} digits")]
    BadLength {
        /// Minimum digit count.
        min: usize,
        /// Maximum digit count (ITU-T E.164).
        max: usize,
    },
    /// The input contains a character that is not a digit or separator.
    #[error("mobile number contains invalid character: {0:?}")]
    InvalidCharacter(char),
}

/// A customer's mobile number in normalized form.
///
/// Accepts an optional leading `+` followed by 7-15 digits. Spaces, dashes,
/// and parentheses are stripped during parsing; the stored form contains only
/// the optional `+` and digits.
///
/// ## Examples
///
/// ```
/// use tiffin_core::MobileNumber;
///
/// let m = MobileNumber::parse("+91 98765-43210").unwrap();
/// assert_eq!(m.as_str(), "+919876543210");
///
/// assert!(MobileNumber::parse("call me").is_err());
/// assert!(MobileNumber::parse("123").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 7;
    /// Maximum number of digits (ITU-T E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `MobileNumber` from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters other
    /// than digits and common separators, or has a digit count outside
    /// 7-15.
    pub fn parse(s: &str) -> Result<Self, MobileNumberError> {
        let trimmed = s.trim();
        let (plus, rest) = match trimmed.strip_prefix('+') {
            Some(rest) => ("+", rest),
            None => ("", trimmed),
        };

        let mut digits = String::with_capacity(rest.len());
        for c in rest.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '(' | ')' | '.' => {}
                other => return Err(MobileNumberError::InvalidCharacter(other)),
            }
        }

        if digits.is_empty() {
            return Err(MobileNumberError::Empty);
        }

        if digits.len() < Self::MIN_DIGITS || digits.len() > Self::MAX_DIGITS {
            return Err(MobileNumberError::BadLength {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(format!("{plus}{digits}")))
    }

    /// Returns the normalized number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MobileNumber {
    type Err = MobileNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_digits() {
        let m = MobileNumber::parse("9876543210").unwrap();
        assert_eq!(m.as_str(), "9876543210");
    }

    #[test]
    fn test_parse_strips_separators() {
        let m = MobileNumber::parse("+91 (987) 654-3210").unwrap();
        assert_eq!(m.as_str(), "+919876543210");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            MobileNumber::parse(""),
            Err(MobileNumberError::Empty)
        ));
        assert!(matches!(
            MobileNumber::parse("+ -"),
            Err(MobileNumberError::Empty)
        ));
    }

    #[test]
    fn test_parse_bad_length() {
        assert!(matches!(
            MobileNumber::parse("123456"),
            Err(MobileNumberError::BadLength { .. })
        ));
        assert!(matches!(
            MobileNumber::parse("1234567890123456"),
            Err(MobileNumberError::BadLength { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_character() {
        assert!(matches!(
            MobileNumber::parse("98765x3210"),
            Err(MobileNumberError::InvalidCharacter('x'))
        ));
    }
}
