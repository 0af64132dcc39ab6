//! Inquiry service layer.
//!
//! Orchestrates the evaluate → compose → dispatch sequence for one
//! submission. Each call is independent; no state survives between
//! submissions.

use crate::compose::{DeepLink, MessageComposer};
use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};
use crate::models::{InquiryForm, ValidInquiry};
use crate::validation::validate;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

/// Confirmation text shown to the user after a successful submission.
const CONFIRMATION: &str = "Message sent successfully! We will contact you shortly.";

/// The outcome of a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    /// The validated inquiry
    pub inquiry: ValidInquiry,

    /// Deep-link URL ready to open in a new browsing context
    #[serde(serialize_with = "serialize_deep_link")]
    pub deep_link: DeepLink,

    /// When the submission was processed
    pub submitted_at: DateTime<Utc>,

    /// User-facing confirmation text
    pub confirmation: &'static str,
}

fn serialize_deep_link<S>(link: &DeepLink, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(link.as_str())
}

/// Processes contact inquiries end to end.
pub struct InquiryService {
    composer: MessageComposer,
}

impl InquiryService {
    /// Build a service from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            composer: MessageComposer::new(&config.recipient, &config.site_name),
        }
    }

    /// Submit one inquiry: validate every field, then compose the
    /// deep link.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] carrying one [`FieldError`] per
    /// failing field, in display order.
    ///
    /// [`FieldError`]: crate::validation::FieldError
    pub fn submit(&self, form: &InquiryForm) -> SubmitResult<Submission> {
        let inquiry = validate(form).map_err(|errors| {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            warn!(fields = ?fields, "inquiry rejected by validation");
            SubmitError::Invalid(errors)
        })?;

        let deep_link = self.composer.compose(&inquiry);
        info!(
            service = inquiry.service(),
            recipient = self.composer.recipient(),
            "inquiry composed"
        );

        Ok(Submission {
            inquiry,
            deep_link,
            submitted_at: Utc::now(),
            confirmation: CONFIRMATION,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> InquiryService {
        InquiryService::new(&Config::default())
    }

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
    fn test_submit_valid_inquiry() {
        let submission = service().submit(&valid_form()).unwrap();
        assert!(submission
            .deep_link
            .as_str()
            .starts_with("https://wa.me/9779765991313?text="));
        assert_eq!(
            submission.confirmation,
            "Message sent successfully! We will contact you shortly."
        );
    }

    #[test]
    fn test_submit_invalid_inquiry_reports_fields() {
        let form = InquiryForm {
            name: "A".to_string(),
            ..valid_form()
        };
        let err = service().submit(&form).unwrap_err();
        let errors = err.field_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Name must be at least 2 characters");
    }

    #[test]
    fn test_submit_produces_no_link_on_failure() {
        let result = service().submit(&InquiryForm::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_submission_serializes() {
        let submission = service().submit(&valid_form()).unwrap();
        let json = serde_json::to_string(&submission).unwrap();
        assert!(json.contains("\"deep_link\":\"https://wa.me/"));
        assert!(json.contains("\"confirmation\""));
    }
}
