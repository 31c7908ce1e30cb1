//! INICIO view: title, the start button and the three practice-area cards

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use umbra_app::{AppState, Focus};

use crate::theme::styles;

const CARDS: [(&str, &str); 3] = [
    ("COMPRAVENTA", "Contratos y títulos de propiedad"),
    ("ARRENDAMIENTO", "Contratos de alquiler"),
    ("FINANCIAMIENTO", "Hipotecas y créditos"),
];

pub struct Dashboard<'a> {
    state: &'a AppState,
}

impl<'a> Dashboard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_card(title: &str, caption: &str, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(vec![
            Line::from(Span::styled(title.to_string(), styles::heading())),
            Line::from(Span::styled(caption.to_string(), styles::text_secondary())),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Content;
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width == 0 {
            return;
        }

        let [title, _, button, _, cards] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled("PANEL DE CONTROL", styles::heading())),
            Line::from(Span::styled("Sistema de Análisis Legal", styles::text_muted())),
        ])
        .alignment(Alignment::Center)
        .render(title, buf);

        let button_style = if focused {
            styles::focused_selected()
        } else {
            styles::accent_bold()
        };
        Paragraph::new(Line::from(Span::styled(
            " ▶ INICIAR ANÁLISIS LEGAL ",
            button_style,
        )))
        .alignment(Alignment::Center)
        .render(button, buf);

        if cards.height < 4 {
            return;
        }

        let card_row = Rect {
            height: cards.height.min(5),
            ..cards
        };
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(card_row);
        for ((title, caption), column) in CARDS.iter().zip(columns.iter()) {
            Self::render_card(title, caption, *column, buf);
        }
    }
}
