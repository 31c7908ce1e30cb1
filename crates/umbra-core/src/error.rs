//! Error type shared by the UMBRA crates

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup or signal registration failed
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    /// Settings that cannot be used (bad URL, zero timeout)
    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    /// The webhook client could not be built
    #[error("Webhook error: {message}")]
    Webhook { message: String },

    #[error("Failed to save report to {path}: {reason}")]
    ReportSave { path: PathBuf, reason: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn webhook(message: impl Into<String>) -> Self {
        Self::Webhook {
            message: message.into(),
        }
    }

    pub fn report_save(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ReportSave {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Log an error with a short description of what was being attempted
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", context.into(), err);
            err
        })
    }
}
