//! REGISTRO view: read-only table of past consultations

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};
use umbra_app::{AppState, Focus};

use crate::theme::styles;

const HEADERS: [&str; 6] = ["ID", "TIPO", "PROPIEDAD", "FECHA", "ESTADO", "VALOR"];

pub struct History<'a> {
    state: &'a AppState,
}

impl<'a> History<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for History<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Content;
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width == 0 {
            return;
        }

        let [title, table_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled("REGISTRO DE ANÁLISIS", styles::heading())),
            Line::from(Span::styled(
                "Historial de consultas legales",
                styles::text_muted(),
            )),
        ])
        .render(title, buf);

        let header = Row::new(HEADERS.map(|h| Cell::from(h).style(styles::text_muted())));

        let rows = self.state.history.iter().enumerate().map(|(i, entry)| {
            let row = Row::new(vec![
                Cell::from(entry.id).style(styles::text_bright()),
                Cell::from(entry.kind),
                Cell::from(entry.property),
                Cell::from(entry.date.format("%Y-%m-%d").to_string()),
                Cell::from(entry.status.label()).style(styles::history_status(entry.status)),
                Cell::from(entry.value),
            ])
            .style(styles::text_primary());

            if i == self.state.history_selected && focused {
                row.style(styles::unfocused_selected())
            } else {
                row
            }
        });

        Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(14),
                Constraint::Min(18),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Length(15),
            ],
        )
        .header(header)
        .column_spacing(1)
        .render(table_area, buf);
    }
}
