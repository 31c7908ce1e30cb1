//! Report returned by the webhook, shown in place of the form

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use umbra_app::{AppState, Focus};

use crate::theme::styles;

pub const REPORT_TITLE: &str = "✓ INFORME LEGAL GENERADO";
pub const REPORT_SUBTITLE: &str = "Análisis completado por IA especializada en derecho inmobiliario";
pub const NEW_ANALYSIS_LABEL: &str = "REALIZAR NUEVO ANÁLISIS";
pub const SAVE_LABEL: &str = "GUARDAR INFORME";

pub struct ReportView<'a> {
    report: &'a str,
    scroll: u16,
    focused: bool,
}

impl<'a> ReportView<'a> {
    pub fn new(state: &'a AppState, report: &'a str) -> Self {
        Self {
            report,
            scroll: state.report_scroll,
            focused: state.focus == Focus::Content,
        }
    }
}

impl Widget for ReportView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 5 || inner.width == 0 {
            return;
        }

        let [title, body, actions] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(REPORT_TITLE, styles::status_green())),
            Line::from(Span::styled(REPORT_SUBTITLE, styles::text_muted())),
        ])
        .alignment(Alignment::Center)
        .render(title, buf);

        // Report text is shown verbatim
        Paragraph::new(self.report)
            .style(styles::text_primary())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(styles::border_inactive()),
            )
            .render(body, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("[n]", styles::keybinding()),
            Span::raw(" "),
            Span::styled(NEW_ANALYSIS_LABEL, styles::text_bright()),
            Span::raw("    "),
            Span::styled("[g]", styles::keybinding()),
            Span::raw(" "),
            Span::styled(SAVE_LABEL, styles::text_secondary()),
        ]))
        .alignment(Alignment::Center)
        .render(actions, buf);
    }
}
