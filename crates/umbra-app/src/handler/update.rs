//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info, warn};
use umbra_core::validate;

use crate::dialog::DialogState;
use crate::message::Message;
use crate::state::{AppState, Focus, Section, SidebarEntry, WebhookStatus, SIDEBAR};

use super::{keys::handle_key, UpdateAction, UpdateResult};

const VALIDATION_TITLE: &str = "Datos incompletos";

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::DismissAlert => {
            if matches!(state.dialog, Some(DialogState::Alert { .. })) {
                state.dialog = None;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SidebarUp => {
            state.sidebar_index = state.sidebar_index.checked_sub(1).unwrap_or(SIDEBAR.len() - 1);
            UpdateResult::none()
        }

        Message::SidebarDown => {
            state.sidebar_index = (state.sidebar_index + 1) % SIDEBAR.len();
            UpdateResult::none()
        }

        Message::SidebarSelect(index) => {
            if index < SIDEBAR.len() {
                state.sidebar_index = index;
                UpdateResult::message(Message::SidebarActivate)
            } else {
                UpdateResult::none()
            }
        }

        Message::SidebarActivate => match state.highlighted_entry() {
            SidebarEntry::Go(section) => UpdateResult::message(Message::OpenSection(section)),
            SidebarEntry::Exit => UpdateResult::message(Message::RequestQuit),
        },

        Message::OpenSection(section) => {
            debug!("Opening section {:?}", section);
            state.open_section(section);
            UpdateResult::none()
        }

        Message::FocusSidebar => {
            state.focus = Focus::Sidebar;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Consultation form
        // ─────────────────────────────────────────────────────────
        Message::FormNextField => {
            state.form.focus_next();
            UpdateResult::none()
        }

        Message::FormPrevField => {
            state.form.focus_prev();
            UpdateResult::none()
        }

        Message::FormInput(c) => {
            state.form.input_char(c);
            UpdateResult::none()
        }

        Message::FormBackspace => {
            state.form.backspace();
            UpdateResult::none()
        }

        Message::FormNewline => {
            state.form.insert_newline();
            UpdateResult::none()
        }

        Message::FormCycleOption { forward } => {
            state.form.cycle_option(forward);
            UpdateResult::none()
        }

        Message::SubmitConsultation => handle_submit(state),

        Message::SubmissionCompleted { record, report } => {
            info!("Consultation analysed ({} chars of report)", report.len());
            state.last_submission = Some(record);
            state.form.reset();
            state.report = Some(report);
            state.report_scroll = 0;
            UpdateResult::none()
        }

        Message::SubmissionFailed { error } => {
            warn!("Consultation submission failed: {}", error);
            state.form.submitting = false;
            state.show_alert(error.alert_title(), error.alert_message());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Report
        // ─────────────────────────────────────────────────────────
        Message::NewAnalysis => {
            state.report = None;
            state.report_scroll = 0;
            state.form.reset();
            UpdateResult::none()
        }

        Message::SaveReport => match &state.report {
            Some(text) => UpdateResult::action(UpdateAction::SaveReport {
                text: text.clone(),
                directory: state.settings.reports.directory.clone(),
            }),
            None => UpdateResult::none(),
        },

        Message::ReportSaved { path } => {
            info!("Report saved to {}", path.display());
            state.show_alert(
                "Informe guardado",
                format!("El informe se guardó en:\n\n{}", path.display()),
            );
            UpdateResult::none()
        }

        Message::ReportSaveFailed { error } => {
            warn!("Report save failed: {}", error);
            state.show_alert("Error al guardar informe", error);
            UpdateResult::none()
        }

        Message::ScrollUp => {
            if let Some(offset) = scroll_offset(state) {
                *offset = offset.saturating_sub(1);
            }
            UpdateResult::none()
        }

        Message::ScrollDown => {
            if let Some(offset) = scroll_offset(state) {
                *offset = offset.saturating_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // History
        // ─────────────────────────────────────────────────────────
        Message::HistoryUp => {
            state.history_selected = state.history_selected.saturating_sub(1);
            UpdateResult::none()
        }

        Message::HistoryDown => {
            if state.history_selected + 1 < state.history.len() {
                state.history_selected += 1;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Legal agent
        // ─────────────────────────────────────────────────────────
        Message::ChatInput(c) => {
            state.chat.input.push(c);
            UpdateResult::none()
        }

        Message::ChatBackspace => {
            state.chat.input.pop();
            UpdateResult::none()
        }

        Message::ChatQuickTopic(index) => {
            state.chat.load_quick_topic(index);
            UpdateResult::none()
        }

        Message::ChatSend => match state.chat.send() {
            Some(prompt) => UpdateResult::action(UpdateAction::ScheduleAgentReply {
                session: state.chat.session,
                prompt,
                delay: state.settings.agent.reply_delay(),
            }),
            None => UpdateResult::none(),
        },

        Message::AgentReplied { session, text } => {
            if session == state.chat.session {
                state.chat.receive_reply(text);
            } else {
                debug!("Dropping agent reply for an ended conversation");
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Webhook probe
        // ─────────────────────────────────────────────────────────
        Message::WebhookProbed { result } => {
            state.webhook_status = match result {
                Ok(status) => {
                    info!("Webhook probe answered HTTP {}", status);
                    WebhookStatus::Reachable { status }
                }
                Err(e) => {
                    warn!("Webhook probe failed: {}", e);
                    WebhookStatus::Unreachable {
                        reason: e.to_string(),
                    }
                }
            };
            UpdateResult::none()
        }
    }
}

/// Validate and hand the record to the event loop for sending
fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.form.submitting || state.report.is_some() {
        return UpdateResult::none();
    }

    if let Err(e) = validate(&state.form.record) {
        debug!("Consultation rejected: {}", e);
        state.show_alert(VALIDATION_TITLE, e.alert_message());
        return UpdateResult::none();
    }

    state.form.submitting = true;
    UpdateResult::action(UpdateAction::SubmitConsultation {
        record: state.form.record.clone(),
    })
}

/// Scroll position of whatever scrollable text the current view shows
fn scroll_offset(state: &mut AppState) -> Option<&mut u16> {
    match state.section {
        Section::Consultation if state.report.is_some() => Some(&mut state.report_scroll),
        Section::Results => Some(&mut state.results_scroll),
        _ => None,
    }
}
