//! Inquiry Link - contact inquiry validation and WhatsApp deep-link composition.
//!
//! This library implements the submission pipeline behind a contact form:
//! per-field validation of a five-field inquiry and, on success,
//! composition of a WhatsApp "click to chat" URL pre-filled with a
//! formatted message for a fixed recipient. The logic is pure and fully
//! decoupled from any presentation layer.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (email, phone)
//! - **models**: the raw and validated inquiry forms
//! - **validation**: per-field rules and error messages
//! - **compose**: message template, service-code lookup, deep-link URL
//! - **services**: the evaluate → compose → dispatch sequence
//! - **config**: recipient and branding from environment variables
//! - **error**: custom error types for precise error handling

pub mod compose;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;
pub mod validation;

pub use compose::{service_display_name, DeepLink, MessageComposer};
pub use config::Config;
pub use domain::{EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, SubmitError};
pub use models::{InquiryForm, ValidInquiry};
pub use services::{InquiryService, Submission};
pub use validation::{validate, Field, FieldError};
