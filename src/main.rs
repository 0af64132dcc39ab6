//! Inquiry Link - Main entry point
//!
//! Reads one inquiry form as JSON on stdin, validates it, and prints the
//! composed WhatsApp deep link on stdout. Field errors go to stderr as
//! JSON and the process exits non-zero.

use anyhow::Result;
use inquiry_link::{Config, InquiryForm, InquiryService, SubmitError};
use std::io::Read;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only so stdout stays machine-readable)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Composing inquiries for recipient {} ({})",
        config.recipient, config.site_name
    );

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    // Nothing to submit is not an error
    if input.trim().is_empty() {
        info!("No input received; nothing to submit");
        return Ok(());
    }

    let form: InquiryForm = serde_json::from_str(&input)?;

    let service = InquiryService::new(&config);
    match service.submit(&form) {
        Ok(submission) => {
            println!("{}", submission.deep_link);
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            eprintln!("{}", serde_json::to_string_pretty(&errors)?);
            std::process::exit(1);
        }
    }
}
