//! Modal dialog: alerts and the exit confirmation

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use umbra_app::DialogState;

use super::agent_chat::wrap_text;
use super::modal_overlay;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 60;

pub struct Dialog<'a> {
    state: &'a DialogState,
}

impl<'a> Dialog<'a> {
    pub fn new(state: &'a DialogState) -> Self {
        Self { state }
    }

    fn buttons(&self) -> Line<'static> {
        if self.state.is_confirmation() {
            Line::from(vec![
                Span::styled("[", styles::text_muted()),
                Span::styled("y", styles::status_green()),
                Span::styled("] Sí   ", styles::text_muted()),
                Span::styled("[", styles::text_muted()),
                Span::styled("n", styles::status_red()),
                Span::styled("] No", styles::text_muted()),
            ])
        } else {
            Line::from(Span::styled(" ACEPTAR ", styles::focused_selected()))
        }
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_width = MODAL_WIDTH.saturating_sub(4) as usize;
        let rows = wrap_text(self.state.message(), text_width);
        // Borders, padding, message, spacer, buttons
        let height = u16::try_from(rows.len())
            .unwrap_or(u16::MAX)
            .saturating_add(6);
        let modal = modal_overlay::open(buf, area, MODAL_WIDTH, height);

        let title = format!(" {} ", self.state.title());
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [_, message, _, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        // Same rows the height was measured from
        let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
        Paragraph::new(lines)
            .style(styles::text_primary())
            .alignment(Alignment::Center)
            .render(message, buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons, buf);
    }
}
