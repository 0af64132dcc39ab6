//! Form validation for contact inquiries.
//!
//! [`validate`] applies the per-field rules to a raw [`InquiryForm`] and
//! either produces a [`ValidInquiry`] or the complete list of field
//! errors. Rules are independent per field (no cross-field checks) and
//! every field is evaluated even when an earlier one fails, so callers
//! always see the full picture in one pass.

use crate::domain::{EmailAddress, PhoneNumber};
use crate::models::{InquiryForm, ValidInquiry};
use serde::Serialize;
use std::fmt;

/// The inquiry form fields, in their fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    /// Field identifier as used in the form markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Service => "service",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed field rule, with the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Which field failed
    pub field: Field,

    /// Human-readable reason, suitable for inline display
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Minimum name length in characters.
const MIN_NAME_CHARS: usize = 2;

/// Minimum message length in characters.
const MIN_MESSAGE_CHARS: usize = 10;

/// Validate a raw inquiry form.
///
/// Fields are trimmed, then checked in the order name, email, phone,
/// service, message. Each failing field contributes exactly one error,
/// and the returned list preserves that order so error display is
/// deterministic. The function is pure: re-running it on the same input
/// yields the same verdict and a fresh error list.
///
/// # Errors
///
/// Returns every [`FieldError`] found; the list is non-empty on failure.
pub fn validate(form: &InquiryForm) -> Result<ValidInquiry, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push(FieldError::new(Field::Name, "Name is required"));
    } else if name.chars().count() < MIN_NAME_CHARS {
        errors.push(FieldError::new(
            Field::Name,
            "Name must be at least 2 characters",
        ));
    }

    let email = match form.email.trim() {
        "" => {
            errors.push(FieldError::new(Field::Email, "Email is required"));
            None
        }
        trimmed => match EmailAddress::new(trimmed) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.push(FieldError::new(
                    Field::Email,
                    "Please enter a valid email address",
                ));
                None
            }
        },
    };

    let phone = match form.phone.trim() {
        "" => {
            errors.push(FieldError::new(Field::Phone, "Phone number is required"));
            None
        }
        trimmed => match PhoneNumber::new(trimmed) {
            Ok(phone) => Some(phone),
            Err(_) => {
                errors.push(FieldError::new(
                    Field::Phone,
                    "Please enter a valid phone number",
                ));
                None
            }
        },
    };

    let service = form.service.trim();
    if service.is_empty() {
        errors.push(FieldError::new(Field::Service, "Please select a service"));
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.push(FieldError::new(Field::Message, "Message is required"));
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.push(FieldError::new(
            Field::Message,
            "Message must be at least 10 characters",
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All rules passed, so both domain values were constructed above.
    Ok(ValidInquiry::new(
        name.to_string(),
        email.expect("email validated"),
        phone.expect("phone validated"),
        service.to_string(),
        message.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> InquiryForm {
        InquiryForm {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            phone: "+9779765991313".to_string(),
            service: "road".to_string(),
            message: "Please call me back".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let valid = validate(&valid_form()).unwrap();
        assert_eq!(valid.name(), "Al");
        assert_eq!(valid.email().as_str(), "a@b.com");
        assert_eq!(valid.phone().as_str(), "+9779765991313");
        assert_eq!(valid.service(), "road");
        assert_eq!(valid.message(), "Please call me back");
    }

    #[test]
    fn test_short_name_fails_with_exact_message() {
        let form = InquiryForm {
            name: "A".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Name);
        assert_eq!(errors[0].message, "Name must be at least 2 characters");
    }

    #[test]
    fn test_empty_fields_each_report_required() {
        let errors = validate(&InquiryForm::default()).unwrap_err();
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Name is required",
                "Email is required",
                "Phone number is required",
                "Please select a service",
                "Message is required",
            ]
        );
    }

    #[test]
    fn test_invalid_email_message() {
        let form = InquiryForm {
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Email);
        assert_eq!(errors[0].message, "Please enter a valid email address");
    }

    #[test]
    fn test_invalid_phone_message() {
        let form = InquiryForm {
            phone: "12345".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Phone);
        assert_eq!(errors[0].message, "Please enter a valid phone number");
    }

    #[test]
    fn test_no_short_circuit_collects_all_errors_in_order() {
        let form = InquiryForm {
            name: "A".to_string(),
            email: "bad".to_string(),
            phone: "0".to_string(),
            service: " ".to_string(),
            message: "short".to_string(),
        };
        let errors = validate(&form).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::Service,
                Field::Message
            ]
        );
    }

    #[test]
    fn test_whitespace_only_fields_are_empty() {
        let form = InquiryForm {
            name: "   ".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors[0].message, "Name is required");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let form = InquiryForm {
            name: "A".to_string(),
            email: "bad".to_string(),
            ..valid_form()
        };
        let first = validate(&form).unwrap_err();
        let second = validate(&form).unwrap_err();
        assert_eq!(first, second);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_field_error_serializes_for_display() {
        let errors = validate(&InquiryForm::default()).unwrap_err();
        let json = serde_json::to_string(&errors[0]).unwrap();
        assert_eq!(json, r#"{"field":"name","message":"Name is required"}"#);
    }
}
