//! # umbra-core - Core Domain Types
//!
//! Foundation crate for UMBRA Legal. Provides domain types, error handling,
//! logging setup, consultation validation, and the keyword-matched legal
//! assistant.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ConsultationRecord`] - The ten string fields collected by the form
//! - [`FormField`], [`FieldKind`] - Field metadata (labels, options, required)
//! - [`ChatMessage`], [`ChatRole`] - Legal agent conversation entries
//!
//! ### Validation (`validation`)
//! - [`validate()`] - Required fields, then email shape
//! - [`ValidationError`] - What blocked the submission
//!
//! ### Legal Assistant (`interpreter`)
//! - [`respond()`] - Canned paragraph for a free-text question
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, one variant per failing layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - `.context()` that logs what was being attempted
//!
//! ## Prelude
//!
//! ```rust
//! use umbra_core::prelude::*;
//! ```

pub mod error;
pub mod history;
pub mod interpreter;
pub mod logging;
pub mod types;
pub mod validation;

/// Prelude for common imports used throughout all UMBRA crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use history::{sample_history, HistoryEntry, HistoryStatus};
pub use interpreter::{match_topic, respond, Topic, FALLBACK_RESPONSE, GREETING, QUICK_TOPICS};
pub use types::{
    ChatMessage, ChatRole, ConsultationRecord, FieldKind, FormField, COUNTRIES, OPERATION_TYPES,
    PROPERTY_TYPES,
};
pub use validation::{is_valid_email, validate, ValidationError};
