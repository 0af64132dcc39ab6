//! Service layer orchestrating validation and composition.

pub mod inquiry_service;

pub use inquiry_service::{InquiryService, Submission};
