//! # umbra-webhook - Consultation Webhook Client
//!
//! Owns the single outbound integration of UMBRA Legal: posting a
//! consultation to the analysis webhook and turning whatever comes back into
//! report text or a [`SubmissionError`] with a user-facing alert.

pub mod client;
pub mod error;
pub mod payload;
pub mod response;

pub use client::{
    WebhookClient, WebhookConfig, DEFAULT_SYSTEM_TAG, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
    DEFAULT_WEBHOOK_URL,
};
pub use error::SubmissionError;
pub use payload::WebhookPayload;
pub use response::{extract_error_message, extract_report, EMPTY_REPORT_FALLBACK};
