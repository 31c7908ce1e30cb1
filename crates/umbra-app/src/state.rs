//! Application state (Model in TEA pattern)

use umbra_core::{sample_history, ConsultationRecord, HistoryEntry};

use crate::chat::ChatState;
use crate::config::Settings;
use crate::dialog::DialogState;
use crate::form::FormState;

/// Views reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Consultation,
    Results,
    Agent,
    History,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "INICIO",
            Section::Consultation => "ANÁLISIS LEGAL",
            Section::Results => "INFORMES",
            Section::Agent => "AGENTE IA",
            Section::History => "REGISTRO",
        }
    }
}

/// One line of the sidebar menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEntry {
    Go(Section),
    Exit,
}

impl SidebarEntry {
    pub fn label(self) -> &'static str {
        match self {
            SidebarEntry::Go(section) => section.title(),
            SidebarEntry::Exit => "SALIR",
        }
    }
}

/// Sidebar menu, top to bottom. Digit keys 1-6 address these in order.
pub const SIDEBAR: [SidebarEntry; 6] = [
    SidebarEntry::Go(Section::Dashboard),
    SidebarEntry::Go(Section::Consultation),
    SidebarEntry::Go(Section::Results),
    SidebarEntry::Go(Section::Agent),
    SidebarEntry::Go(Section::History),
    SidebarEntry::Exit,
];

/// Which pane receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Outcome of the startup OPTIONS probe
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WebhookStatus {
    #[default]
    Unknown,
    Reachable { status: u16 },
    Unreachable { reason: String },
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    /// View shown in the content pane
    pub section: Section,

    /// Highlighted sidebar line (index into [`SIDEBAR`])
    pub sidebar_index: usize,

    pub focus: Focus,

    pub form: FormState,

    /// Report returned by the webhook; replaces the form until dismissed
    pub report: Option<String>,
    pub report_scroll: u16,

    /// Most recent successfully submitted consultation
    pub last_submission: Option<ConsultationRecord>,
    pub results_scroll: u16,

    pub chat: ChatState,

    pub history: Vec<HistoryEntry>,
    pub history_selected: usize,

    pub dialog: Option<DialogState>,

    pub webhook_status: WebhookStatus,

    /// Animation counter advanced on every poll timeout
    pub tick: u64,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            section: Section::Dashboard,
            sidebar_index: 0,
            focus: Focus::Sidebar,
            form: FormState::new(),
            report: None,
            report_scroll: 0,
            last_submission: None,
            results_scroll: 0,
            chat: ChatState::new(),
            history: sample_history(),
            history_selected: 0,
            dialog: None,
            webhook_status: WebhookStatus::Unknown,
            tick: 0,
            settings,
        }
    }

    /// Show a section and move focus into it. Leaving the agent view ends
    /// its conversation.
    pub fn open_section(&mut self, section: Section) {
        if self.section == Section::Agent && section != Section::Agent {
            self.chat.restart();
        }
        self.section = section;
        if let Some(index) = SIDEBAR
            .iter()
            .position(|entry| *entry == SidebarEntry::Go(section))
        {
            self.sidebar_index = index;
        }
        self.focus = Focus::Content;
    }

    pub fn highlighted_entry(&self) -> SidebarEntry {
        SIDEBAR[self.sidebar_index.min(SIDEBAR.len() - 1)]
    }

    pub fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.dialog = Some(DialogState::alert(title, message));
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────

    /// Ask to leave; shows the confirmation unless disabled in settings
    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_exit {
            self.dialog = Some(DialogState::ConfirmExit);
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        if self.dialog.as_ref().is_some_and(DialogState::is_confirmation) {
            self.dialog = None;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.section, Section::Dashboard);
        assert_eq!(state.focus, Focus::Sidebar);
        assert_eq!(state.history.len(), 3);
        assert_eq!(state.chat.messages.len(), 1);
        assert!(state.report.is_none());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_open_section_syncs_sidebar() {
        let mut state = AppState::new();
        state.open_section(Section::Agent);
        assert_eq!(state.section, Section::Agent);
        assert_eq!(state.sidebar_index, 3);
        assert_eq!(state.focus, Focus::Content);
        assert_eq!(state.highlighted_entry(), SidebarEntry::Go(Section::Agent));
    }

    #[test]
    fn test_leaving_agent_view_restarts_chat() {
        let mut state = AppState::new();
        state.open_section(Section::Agent);
        state.chat.input = "contrato".into();
        state.chat.send();
        assert_eq!(state.chat.messages.len(), 2);

        state.open_section(Section::Agent);
        assert_eq!(state.chat.messages.len(), 2);

        state.open_section(Section::History);
        assert_eq!(state.chat.messages.len(), 1);
        assert!(!state.chat.typing);
        assert_eq!(state.chat.session, 1);
    }

    #[test]
    fn test_request_quit_with_confirmation() {
        let mut state = AppState::new();
        state.request_quit();
        assert_eq!(state.dialog, Some(DialogState::ConfirmExit));
        assert!(!state.should_quit());

        state.cancel_quit();
        assert!(state.dialog.is_none());
    }

    #[test]
    fn test_request_quit_without_confirmation() {
        let mut settings = Settings::default();
        settings.behavior.confirm_exit = false;
        let mut state = AppState::with_settings(settings);
        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_sidebar_labels() {
        let labels: Vec<&str> = SIDEBAR.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec!["INICIO", "ANÁLISIS LEGAL", "INFORMES", "AGENTE IA", "REGISTRO", "SALIR"]
        );
    }
}
