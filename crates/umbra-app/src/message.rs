//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use umbra_core::ConsultationRecord;
use umbra_webhook::SubmissionError;

use crate::input_key::InputKey;
use crate::state::Section;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Poll timeout; drives the typing and processing indicators
    Tick,

    /// Request to quit (shows the confirmation unless disabled)
    RequestQuit,
    /// Quit without confirmation (Ctrl+C, signal handler)
    Quit,
    ConfirmQuit,
    CancelQuit,

    /// Close the open alert
    DismissAlert,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SidebarUp,
    SidebarDown,
    /// Activate the highlighted sidebar entry
    SidebarActivate,
    /// Activate sidebar entry by position (digit shortcuts)
    SidebarSelect(usize),
    OpenSection(Section),
    FocusSidebar,

    // ─────────────────────────────────────────────────────────
    // Consultation form
    // ─────────────────────────────────────────────────────────
    FormNextField,
    FormPrevField,
    FormInput(char),
    FormBackspace,
    FormNewline,
    FormCycleOption { forward: bool },
    SubmitConsultation,

    /// The webhook answered 2xx
    SubmissionCompleted {
        record: ConsultationRecord,
        report: String,
    },
    SubmissionFailed { error: SubmissionError },

    // ─────────────────────────────────────────────────────────
    // Report
    // ─────────────────────────────────────────────────────────
    /// Drop the report and go back to an empty form
    NewAnalysis,
    SaveReport,
    ReportSaved { path: PathBuf },
    ReportSaveFailed { error: String },
    ScrollUp,
    ScrollDown,

    // ─────────────────────────────────────────────────────────
    // History
    // ─────────────────────────────────────────────────────────
    HistoryUp,
    HistoryDown,

    // ─────────────────────────────────────────────────────────
    // Legal agent
    // ─────────────────────────────────────────────────────────
    ChatInput(char),
    ChatBackspace,
    ChatSend,
    ChatQuickTopic(usize),
    AgentReplied { session: u64, text: String },

    // ─────────────────────────────────────────────────────────
    // Webhook probe
    // ─────────────────────────────────────────────────────────
    WebhookProbed { result: Result<u16, SubmissionError> },
}
