//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Optional leading '+', first digit non-zero, at least 10 digits total.
/// Applied after stripping spaces from the input.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{9,}$").expect("valid phone regex"));

/// A type-safe wrapper for phone numbers.
///
/// Validated at construction time. Spaces in the input are tolerated and
/// stripped; the stored value keeps only the optional '+' and digits.
///
/// The 10-digit minimum is the canonical rule for this crate. A looser
/// variant (1 to 16 digits) circulated in an earlier form handler and is
/// deliberately not honored here.
///
/// # Example
///
/// ```
/// use inquiry_link::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+977 976 599 1313").unwrap();
/// assert_eq!(phone.as_str(), "+9779765991313");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Optional leading '+'
    /// - Digits only after that (spaces are stripped first)
    /// - First digit must be non-zero
    /// - At least 10 digits
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = phone.into();
        let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if !PHONE_RE.is_match(&stripped) {
            return Err(ValidationError::InvalidPhone(raw));
        }

        Ok(Self(stripped))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no '+').
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("+9779765991313").unwrap();
        assert_eq!(phone.as_str(), "+9779765991313");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("no digits").is_err());
        assert!(PhoneNumber::new("123456789").is_err()); // 9 digits, too short
        assert!(PhoneNumber::new("0123456789").is_err()); // leading zero
        assert!(PhoneNumber::new("+0123456789").is_err());
        assert!(PhoneNumber::new("123-456-7890").is_err()); // hyphens not allowed
        assert!(PhoneNumber::new("1234567890").is_ok());
        assert!(PhoneNumber::new("+14155551234").is_ok());
    }

    #[test]
    fn test_phone_strips_spaces() {
        let phone = PhoneNumber::new("+977 976 599 1313").unwrap();
        assert_eq!(phone.as_str(), "+9779765991313");
    }

    #[test]
    fn test_phone_digits_only() {
        let phone = PhoneNumber::new("+9779765991313").unwrap();
        assert_eq!(phone.digits_only(), "9779765991313");
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("9841234567").unwrap();
        assert_eq!(format!("{}", phone), "9841234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("+14155551234").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+14155551234\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
