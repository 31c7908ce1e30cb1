//! Consultation validation run before any network effect

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::types::{ConsultationRecord, FormField};

/// Basic `local@domain.tld` shape, no whitespace and a single `@` per side.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Why a consultation cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {fields:?}")]
    MissingRequired { fields: Vec<FormField> },

    #[error("invalid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// Blocking message shown to the user
    pub fn alert_message(&self) -> &'static str {
        match self {
            ValidationError::MissingRequired { .. } => "Por favor complete los campos obligatorios",
            ValidationError::InvalidEmail => "Por favor ingrese un correo electrónico válido",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check required fields first, then the email shape.
pub fn validate(record: &ConsultationRecord) -> Result<(), ValidationError> {
    let missing = record.missing_required();
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequired { fields: missing });
    }

    if !is_valid_email(&record.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
