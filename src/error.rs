//! Error types for the inquiry pipeline.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling.

use crate::validation::FieldError;
use thiserror::Error;

/// Errors that can occur when submitting an inquiry.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// One or more form fields failed validation
    #[error("Inquiry failed validation: {} field(s) invalid", .0.len())]
    Invalid(Vec<FieldError>),
}

impl SubmitError {
    /// The field errors behind an `Invalid` submission, in display order.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            SubmitError::Invalid(errors) => errors,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
