//! Deep-link message composition.
//!
//! Turns a [`ValidInquiry`] into a WhatsApp "click to chat" URL: the
//! service code is mapped to its display name, the five field values are
//! substituted into a fixed message template, and the rendered text is
//! percent-encoded into the `text` query parameter. The library only
//! builds the URL; opening it is the caller's concern.

use crate::models::ValidInquiry;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Service codes offered on the contact form, mapped to display names.
/// Codes outside this table pass through to the message verbatim.
static SERVICE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("construction", "Civil Construction"),
        ("road", "Road & Bridge Construction"),
        ("design", "Design & Drawing"),
        ("valuation", "Property Valuation"),
        ("contract", "Contract Works"),
    ])
});

/// Resolve a service code to its display name.
///
/// Unrecognized codes are returned unchanged.
pub fn service_display_name(code: &str) -> &str {
    SERVICE_NAMES.get(code).copied().unwrap_or(code)
}

/// A composed WhatsApp deep-link URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink(String);

impl DeepLink {
    /// Get the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composes inquiry messages and deep links for a fixed recipient.
#[derive(Debug, Clone)]
pub struct MessageComposer {
    recipient: String,
    site_name: String,
}

impl MessageComposer {
    /// Create a composer for the given WhatsApp recipient (digits only,
    /// international format without '+') and site name.
    pub fn new(recipient: impl Into<String>, site_name: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            site_name: site_name.into(),
        }
    }

    /// The recipient identifier this composer targets.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Render the plain-text inquiry message (before URL encoding).
    ///
    /// WhatsApp renders `*bold*` and `_italic_` markers in the text.
    pub fn render_message(&self, inquiry: &ValidInquiry) -> String {
        format!(
            "*New Inquiry - {site}*\n\n\
             *Name:* {name}\n\
             *Email:* {email}\n\
             *Phone:* {phone}\n\
             *Service Required:* {service}\n\
             *Message:* {message}\n\n\
             _Sent via {site} Website_",
            site = self.site_name,
            name = inquiry.name(),
            email = inquiry.email(),
            phone = inquiry.phone(),
            service = service_display_name(inquiry.service()),
            message = inquiry.message(),
        )
    }

    /// Compose the full deep-link URL for a validated inquiry.
    ///
    /// The rendered message is percent-encoded in full, so embedded
    /// newlines become `%0A` and user-entered text cannot break out of
    /// the `text` query parameter.
    pub fn compose(&self, inquiry: &ValidInquiry) -> DeepLink {
        let message = self.render_message(inquiry);
        let encoded = urlencoding::encode(&message);
        DeepLink(format!(
            "https://wa.me/{}?text={}",
            self.recipient, encoded
        ))
    }
}
