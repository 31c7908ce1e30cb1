//! Submission failure taxonomy and the alerts shown for each case

use std::time::Duration;

use thiserror::Error;

/// Why a consultation submission failed.
///
/// Every variant ends the current attempt; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The client-side timer fired before the server answered
    #[error("webhook request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// The request never reached the server (DNS, refused, TLS, reset)
    #[error("could not reach webhook: {message}")]
    Connection { message: String },

    /// The server answered with a non-2xx status
    #[error("webhook returned HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// The request could not be built (bad URL, bad client configuration)
    #[error("invalid webhook request: {message}")]
    Client { message: String },
}

impl SubmissionError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Classify a transport-level reqwest error
    pub fn from_reqwest(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout }
        } else if err.is_builder() {
            Self::client(err.to_string())
        } else {
            Self::connection(err.to_string())
        }
    }

    /// Status code for server errors
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Dialog title
    pub fn alert_title(&self) -> String {
        match self {
            SubmissionError::Timeout { .. } => "Timeout".to_string(),
            SubmissionError::Connection { .. } => "Error de conexión".to_string(),
            SubmissionError::Server { status: 500, .. } => "Error del workflow n8n (500)".to_string(),
            SubmissionError::Server { status: 404, .. } => "Webhook no encontrado (404)".to_string(),
            SubmissionError::Server { status, .. } => format!("Error del servidor ({status})"),
            SubmissionError::Client { .. } => "Error al enviar análisis".to_string(),
        }
    }

    /// Dialog body
    pub fn alert_message(&self) -> String {
        match self {
            SubmissionError::Timeout { .. } => {
                "El servidor tardó demasiado en responder. Intenta nuevamente.".to_string()
            }
            SubmissionError::Connection { .. } => "No se pudo conectar con el servidor n8n. Verifica:\n\n\
                 1. Tu conexión a internet\n\
                 2. Que el webhook esté activo en n8n\n\
                 3. Que la URL sea correcta"
                .to_string(),
            SubmissionError::Server {
                status: 500,
                message,
            } => with_detail(
                "El workflow no pudo iniciarse. Verifica:\n\n\
                 1. Que el webhook esté activado\n\
                 2. Que el workflow esté guardado\n\
                 3. Que no haya errores en los nodos\n\
                 4. Los logs de n8n para más detalles",
                message,
            ),
            SubmissionError::Server {
                status: 404,
                message,
            } => with_detail(
                "La URL del webhook no existe. Verifica:\n\n\
                 1. La URL esté correcta\n\
                 2. El webhook esté publicado\n\
                 3. El path sea exacto",
                message,
            ),
            SubmissionError::Server { status, message } => {
                format!("Error del servidor ({status}):\n\n{message}")
            }
            SubmissionError::Client { message } => {
                format!("Error al enviar análisis:\n\n{message}")
            }
        }
    }
}

fn with_detail(base: &str, detail: &str) -> String {
    if detail.trim().is_empty() {
        base.to_string()
    } else {
        format!("{base}\n\nDetalle: {detail}")
    }
}
