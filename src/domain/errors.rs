//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is invalid.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The provided phone number is invalid.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}
