//! Key event handlers for each focus, view and dialog

use umbra_core::FieldKind;

use crate::dialog::DialogState;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, Section, SIDEBAR};

/// Convert key events to messages based on what currently has focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere, dialogs included
    if key.is_force_quit() {
        return Some(Message::Quit);
    }

    if let Some(dialog) = &state.dialog {
        return handle_key_dialog(dialog, key);
    }

    match state.focus {
        Focus::Sidebar => handle_key_sidebar(key),
        Focus::Content => {
            if key == InputKey::Esc {
                return Some(Message::FocusSidebar);
            }
            match state.section {
                Section::Dashboard => handle_key_dashboard(key),
                Section::Consultation if state.report.is_some() => handle_key_report(key),
                Section::Consultation => handle_key_form(state, key),
                Section::Results => handle_key_results(key),
                Section::Agent => handle_key_agent(key),
                Section::History => handle_key_history(key),
            }
        }
    }
}

/// Dialogs swallow every key they do not use
fn handle_key_dialog(dialog: &DialogState, key: InputKey) -> Option<Message> {
    match dialog {
        DialogState::Alert { .. } => match key {
            InputKey::Enter | InputKey::Esc => Some(Message::DismissAlert),
            _ => None,
        },
        DialogState::ConfirmExit => match key {
            InputKey::Char('y' | 'Y' | 's' | 'S') | InputKey::Enter => Some(Message::ConfirmQuit),
            InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
            _ => None,
        },
    }
}

fn handle_key_sidebar(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SidebarUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::SidebarDown),
        InputKey::Enter | InputKey::Right => Some(Message::SidebarActivate),
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Char(c) => {
            let index = c.to_digit(10)? as usize;
            (1..=SIDEBAR.len())
                .contains(&index)
                .then_some(Message::SidebarSelect(index - 1))
        }
        _ => None,
    }
}

fn handle_key_dashboard(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::OpenSection(Section::Consultation)),
        _ => None,
    }
}

fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    let focused_kind = state.form.focused_field().map(|f| f.kind());

    match key {
        InputKey::CharCtrl('s') => Some(Message::SubmitConsultation),
        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPrevField),
        InputKey::Left => Some(Message::FormCycleOption { forward: false }),
        InputKey::Right => Some(Message::FormCycleOption { forward: true }),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Enter => match focused_kind {
            None => Some(Message::SubmitConsultation),
            Some(FieldKind::Select(_)) => Some(Message::FormCycleOption { forward: true }),
            Some(FieldKind::Multiline) => Some(Message::FormNewline),
            Some(_) => Some(Message::FormNextField),
        },
        InputKey::Char(' ') if matches!(focused_kind, Some(FieldKind::Select(_))) => {
            Some(Message::FormCycleOption { forward: true })
        }
        InputKey::Char(c) => Some(Message::FormInput(c)),
        _ => None,
    }
}

fn handle_key_report(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('n' | 'N') | InputKey::Enter => Some(Message::NewAnalysis),
        InputKey::Char('g' | 'G') | InputKey::CharCtrl('s') => Some(Message::SaveReport),
        InputKey::Up | InputKey::PageUp | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::PageDown | InputKey::Char('j') => Some(Message::ScrollDown),
        _ => None,
    }
}

fn handle_key_results(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::PageUp | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::PageDown | InputKey::Char('j') => Some(Message::ScrollDown),
        _ => None,
    }
}

fn handle_key_agent(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::ChatSend),
        InputKey::Backspace => Some(Message::ChatBackspace),
        InputKey::F(n @ 1..=6) => Some(Message::ChatQuickTopic(usize::from(n) - 1)),
        InputKey::Char(c) => Some(Message::ChatInput(c)),
        _ => None,
    }
}

fn handle_key_history(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::HistoryUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::HistoryDown),
        _ => None,
    }
}
