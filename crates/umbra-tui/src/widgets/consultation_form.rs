//! ANÁLISIS LEGAL view: the consultation form
//!
//! Every field renders as three rows (label, value, hint). The paragraph
//! scrolls so the focused field stays on screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use umbra_app::{AppState, Focus, FormState};
use umbra_core::{FieldKind, FormField};

use super::spinner_frame;
use crate::theme::{palette, styles};

pub const FORM_TITLE: &str = "ANÁLISIS LEGAL DE PROPIEDADES";
pub const FORM_SUBTITLE: &str = "Sistema de consulta legal - Umbra v1.0";
pub const SUBMIT_LABEL: &str = "ANALIZAR SITUACIÓN LEGAL";
pub const SUBMITTING_LABEL: &str = "PROCESANDO...";
pub const REQUIRED_NOTE: &str =
    "UMBRA Legal Analysis System - Todos los campos marcados con * son obligatorios";

const CURSOR: &str = "▏";

pub struct ConsultationForm<'a> {
    form: &'a FormState,
    focused: bool,
    tick: u64,
}

impl<'a> ConsultationForm<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            form: &state.form,
            focused: state.focus == Focus::Content,
            tick: state.tick,
        }
    }

    fn field_lines(&self, field: FormField, active: bool) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let marker = if active { "▸ " } else { "  " };
        let mut label = vec![
            Span::styled(marker, styles::accent_bold()),
            Span::styled(
                field.label().to_uppercase(),
                if active {
                    styles::heading()
                } else {
                    styles::text_secondary()
                },
            ),
        ];
        if field.is_required() {
            label.push(Span::styled(" *", styles::status_red()));
        }
        lines.push(Line::from(label));

        let value = self.form.record.get(field);
        let value_style = if active {
            Style::default()
                .fg(palette::TEXT_BRIGHT)
                .bg(palette::POPUP_BG)
        } else {
            styles::text_primary()
        };

        match field.kind() {
            FieldKind::Select(_) => {
                let shown = if value.is_empty() {
                    Span::styled(field.placeholder(), styles::text_muted())
                } else {
                    Span::styled(value.to_string(), value_style)
                };
                let arrows = if active { styles::accent() } else { styles::text_muted() };
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled("‹ ", arrows),
                    shown,
                    Span::styled(" ›", arrows),
                ]));
            }
            FieldKind::Multiline => {
                if value.is_empty() {
                    lines.push(Self::placeholder_line(field, active));
                } else {
                    let rows: Vec<&str> = value.split('\n').collect();
                    let last = rows.len() - 1;
                    for (i, row) in rows.into_iter().enumerate() {
                        let mut spans =
                            vec![Span::raw("    "), Span::styled(row.to_string(), value_style)];
                        if active && i == last {
                            spans.push(Span::styled(CURSOR, styles::accent()));
                        }
                        lines.push(Line::from(spans));
                    }
                }
            }
            FieldKind::Text | FieldKind::Numeric => {
                if value.is_empty() {
                    lines.push(Self::placeholder_line(field, active));
                } else {
                    let mut spans =
                        vec![Span::raw("    "), Span::styled(value.to_string(), value_style)];
                    if field == FormField::Area {
                        spans.push(Span::styled(" m²", styles::text_muted()));
                    }
                    if active {
                        spans.push(Span::styled(CURSOR, styles::accent()));
                    }
                    lines.push(Line::from(spans));
                }
            }
        }

        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(field.hint(), styles::text_muted()),
        ]));
        lines
    }

    fn placeholder_line(field: FormField, active: bool) -> Line<'static> {
        let mut spans = vec![Span::raw("    ")];
        if active {
            spans.push(Span::styled(CURSOR, styles::accent()));
        }
        spans.push(Span::styled(field.placeholder(), styles::text_muted()));
        Line::from(spans)
    }

    fn submit_line(&self) -> Line<'static> {
        let active = self.focused && self.form.submit_focused();
        if self.form.submitting {
            return Line::from(Span::styled(
                format!(" {} {} ", spinner_frame(self.tick), SUBMITTING_LABEL),
                styles::text_muted(),
            ));
        }
        let style = if active {
            styles::focused_selected()
        } else {
            styles::accent_bold()
        };
        Line::from(Span::styled(format!(" [ {} ] ", SUBMIT_LABEL), style))
    }

    /// All rows plus the row range of the focused stop
    fn build(&self) -> (Vec<Line<'static>>, (usize, usize)) {
        let mut lines = Vec::new();
        let mut focus_range = (0, 0);

        for (index, field) in FormField::ALL.iter().enumerate() {
            let active = self.focused && self.form.focused == index;
            let start = lines.len();
            lines.extend(self.field_lines(*field, active));
            if self.form.focused == index {
                focus_range = (start, lines.len());
            }
            lines.push(Line::raw(""));
        }

        let start = lines.len();
        lines.push(self.submit_line().alignment(Alignment::Center));
        if self.form.submit_focused() {
            focus_range = (start, lines.len());
        }
        lines.push(Line::raw(""));
        lines.push(
            Line::from(Span::styled(REQUIRED_NOTE, styles::text_muted()))
                .alignment(Alignment::Center),
        );

        (lines, focus_range)
    }
}

/// First row to show so that `focus` fits in `height` rows
pub fn scroll_for(focus: (usize, usize), height: usize) -> usize {
    let (start, end) = focus;
    if end <= height {
        0
    } else {
        (end - height).min(start)
    }
}

impl Widget for ConsultationForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width == 0 {
            return;
        }

        let [title, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(FORM_TITLE, styles::heading())),
            Line::from(Span::styled(FORM_SUBTITLE, styles::text_muted())),
        ])
        .alignment(Alignment::Center)
        .render(title, buf);

        let (lines, focus) = self.build();
        let offset = scroll_for(focus, body.height as usize);
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(body, buf);
    }
}
