//! Sidebar navigation menu

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use umbra_app::{AppState, Focus, SIDEBAR};

use crate::theme::{palette, styles};

pub const BRAND: &str = "UMBRA";
pub const SUBTITLE: &str = "Sistema Legal";
pub const ACCESS_LABEL: &str = "Acceso: Clave Personal";
pub const VERSION_LABEL: &str = "v2.1.0";

/// Brand block, the numbered menu and the access footer
pub struct Sidebar<'a> {
    state: &'a AppState,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn menu_lines(&self) -> Vec<Line<'static>> {
        let focused = self.state.focus == Focus::Sidebar;

        SIDEBAR
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let highlighted = index == self.state.sidebar_index;
                let style = match (highlighted, focused) {
                    (true, true) => styles::focused_selected(),
                    (true, false) => styles::unfocused_selected(),
                    (false, _) => styles::text_secondary(),
                };
                let marker = if highlighted { "▸" } else { " " };
                Line::from(Span::styled(
                    format!("{} {} {}", marker, index + 1, entry.label()),
                    style,
                ))
            })
            .collect()
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.state.focus == Focus::Sidebar);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [brand, menu, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(SIDEBAR.len() as u16),
            Constraint::Length(2),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(format!(" {}", BRAND), styles::heading())),
            Line::from(Span::styled(format!(" {}", SUBTITLE), styles::text_muted())),
        ])
        .render(brand, buf);

        Paragraph::new(self.menu_lines()).render(menu, buf);

        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {}", ACCESS_LABEL),
                Style::default().fg(palette::TEXT_MUTED),
            )),
            Line::from(Span::styled(
                format!(" {}", VERSION_LABEL),
                Style::default().fg(palette::TEXT_MUTED),
            )),
        ])
        .render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use umbra_app::Section;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(26, 20);
        term.render_widget(Sidebar::new(state), term.area());
        term
    }

    #[test]
    fn test_sidebar_lists_every_entry() {
        let term = render(&AppState::new());
        assert!(term.buffer_contains("UMBRA"));
        for label in ["INICIO", "ANÁLISIS LEGAL", "INFORMES", "AGENTE IA", "REGISTRO", "SALIR"] {
            assert!(term.buffer_contains(label), "missing {}", label);
        }
        assert!(term.buffer_contains("v2.1.0"));
    }

    #[test]
    fn test_sidebar_marks_highlighted_entry() {
        let mut state = AppState::new();
        state.open_section(Section::History);
        let term = render(&state);
        assert!(term.buffer_contains("▸ 5 REGISTRO"));
        assert!(!term.buffer_contains("▸ 1 INICIO"));
    }
}
