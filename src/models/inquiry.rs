//! Inquiry models for a single contact-form submission.

use crate::domain::{EmailAddress, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A raw contact inquiry as entered by the user.
///
/// Field values arrive untrimmed and unchecked; nothing is guaranteed
/// about their contents until they pass through
/// [`validate`](crate::validation::validate). The form lives only for
/// the duration of one submission and is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct InquiryForm {
    /// Full name of the person making the inquiry
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Service code selected from the fixed offering
    /// (e.g. "construction", "road", "design", "valuation", "contract")
    pub service: String,

    /// Free-form inquiry text
    pub message: String,
}

/// A validated inquiry.
///
/// Only the validator can construct this type, so holding one is proof
/// that every field rule passed: fields are trimmed and non-empty, the
/// email and phone are well-formed domain values, the name and message
/// meet their minimum lengths.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidInquiry {
    name: String,
    email: EmailAddress,
    phone: PhoneNumber,
    service: String,
    message: String,
}

impl ValidInquiry {
    pub(crate) fn new(
        name: String,
        email: EmailAddress,
        phone: PhoneNumber,
        service: String,
        message: String,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            service,
            message,
        }
    }

    /// Trimmed full name, at least 2 characters.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Validated phone number.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Trimmed service code as submitted (not the display name).
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Trimmed inquiry text, at least 10 characters.
    pub fn message(&self) -> &str {
        &self.message
    }
}
