//! Data structures for inquiry submissions.

pub mod inquiry;

pub use inquiry::{InquiryForm, ValidInquiry};
