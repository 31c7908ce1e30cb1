//! Modal dialog state.
//!
//! Only one dialog can be open at a time. The rendering widget lives in
//! umbra-tui's `widgets::dialog`.

/// What the modal slot currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    /// Blocking notice, dismissed with Enter or Esc
    Alert { title: String, message: String },

    /// "¿Confirmar salida?"
    ConfirmExit,
}

impl DialogState {
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Alert {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            DialogState::Alert { title, .. } => title,
            DialogState::ConfirmExit => "SALIR",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DialogState::Alert { message, .. } => message,
            DialogState::ConfirmExit => "¿Confirmar salida?",
        }
    }

    pub fn is_confirmation(&self) -> bool {
        matches!(self, DialogState::ConfirmExit)
    }
}
