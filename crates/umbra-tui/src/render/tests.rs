//! Full-screen render tests: one frame per view, checked for its landmark text

use super::view;
use crate::test_utils::{create_test_state, sample_record, TestTerminal};
use umbra_app::{AppState, DialogState, Section};

fn render_screen(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

fn state_in(section: Section) -> AppState {
    let mut state = create_test_state();
    state.open_section(section);
    state
}

#[test]
fn test_initial_screen_is_dashboard() {
    let term = render_screen(&create_test_state());
    assert!(term.buffer_contains("PANEL DE CONTROL"));
    assert!(term.buffer_contains("Sistema Legal"));
    assert!(term.buffer_contains("Enter abrir"));
}

#[test]
fn test_consultation_screen_shows_form() {
    let term = render_screen(&state_in(Section::Consultation));
    assert!(term.buffer_contains("ANÁLISIS LEGAL DE PROPIEDADES"));
    assert!(term.buffer_contains("INGRESAR DIRECCIÓN EXACTA"));
}

#[test]
fn test_report_replaces_form() {
    let mut state = state_in(Section::Consultation);
    state.report = Some("Análisis sin observaciones".into());

    let term = render_screen(&state);
    assert!(term.buffer_contains("INFORME LEGAL GENERADO"));
    assert!(term.buffer_contains("Análisis sin observaciones"));
    assert!(!term.buffer_contains("ANÁLISIS LEGAL DE PROPIEDADES"));
}

#[test]
fn test_results_screen_without_submission() {
    let term = render_screen(&state_in(Section::Results));
    assert!(term.buffer_contains("No hay datos disponibles"));
}

#[test]
fn test_results_screen_with_submission() {
    let mut state = state_in(Section::Results);
    state.last_submission = Some(sample_record());

    let term = render_screen(&state);
    assert!(term.buffer_contains("INFORMACIÓN DEL CASO"));
    assert!(term.buffer_contains("Ana Pérez"));
}

#[test]
fn test_agent_screen_shows_quick_topics_when_wide() {
    let term = render_screen(&state_in(Section::Agent));
    assert!(term.buffer_contains("IA AGENTE LEGAL"));
    assert!(term.buffer_contains("CONSULTAS FRECUENTES"));
}

#[test]
fn test_history_screen() {
    let term = render_screen(&state_in(Section::History));
    assert!(term.buffer_contains("REGISTRO DE ANÁLISIS"));
    assert!(term.buffer_contains("UMB-002"));
}

#[test]
fn test_dialog_overlays_current_view() {
    let mut state = create_test_state();
    state.dialog = Some(DialogState::ConfirmExit);

    let term = render_screen(&state);
    assert!(term.buffer_contains("¿Confirmar salida?"));
    assert!(term.buffer_contains("y confirmar"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    for section in [
        Section::Dashboard,
        Section::Consultation,
        Section::Results,
        Section::Agent,
        Section::History,
    ] {
        let state = state_in(section);
        let mut term = TestTerminal::with_size(30, 8);
        term.draw_with(|frame| view(frame, &state));
    }
}
