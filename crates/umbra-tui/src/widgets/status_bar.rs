//! Status bar widget
//!
//! One row of key hints for whatever currently has focus.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use umbra_app::{AppState, Focus, Section};

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// `(key, action)` pairs for the current focus
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if let Some(dialog) = &self.state.dialog {
            return if dialog.is_confirmation() {
                vec![("y", "confirmar"), ("n", "cancelar")]
            } else {
                vec![("Enter", "cerrar")]
            };
        }

        if self.state.focus == Focus::Sidebar {
            return vec![
                ("↑↓", "navegar"),
                ("Enter", "abrir"),
                ("1-6", "ir a"),
                ("q", "salir"),
            ];
        }

        let mut hints = match self.state.section {
            Section::Dashboard => vec![("Enter", "iniciar análisis")],
            Section::Consultation if self.state.report.is_some() => vec![
                ("↑↓", "desplazar"),
                ("n", "nuevo análisis"),
                ("g", "guardar informe"),
            ],
            Section::Consultation => vec![
                ("Tab", "siguiente"),
                ("←→", "opción"),
                ("Ctrl+S", "enviar"),
            ],
            Section::Results => vec![("↑↓", "desplazar")],
            Section::Agent => vec![("Enter", "enviar"), ("F1-F6", "consultas frecuentes")],
            Section::History => vec![("↑↓", "seleccionar")],
        };
        hints.push(("Esc", "menú"));
        hints
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = Span::styled(" │ ", styles::text_muted());

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(separator.clone());
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, styles::text_secondary()));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use umbra_app::DialogState;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(state), term.area());
        term
    }

    #[test]
    fn test_sidebar_hints() {
        let term = render(&AppState::new());
        assert!(term.buffer_contains("Enter abrir"));
        assert!(term.buffer_contains("q salir"));
    }

    #[test]
    fn test_form_hints() {
        let mut state = AppState::new();
        state.open_section(Section::Consultation);
        let term = render(&state);
        assert!(term.buffer_contains("Ctrl+S enviar"));
        assert!(term.buffer_contains("Esc menú"));
    }

    #[test]
    fn test_report_hints() {
        let mut state = AppState::new();
        state.open_section(Section::Consultation);
        state.report = Some("Informe".into());
        let term = render(&state);
        assert!(term.buffer_contains("g guardar informe"));
    }

    #[test]
    fn test_dialog_hints_override_focus() {
        let mut state = AppState::new();
        state.dialog = Some(DialogState::ConfirmExit);
        let term = render(&state);
        assert!(term.buffer_contains("y confirmar"));
        assert!(!term.buffer_contains("abrir"));
    }
}
