//! INFORMES view: summary of the last submitted consultation plus the
//! static legal-analysis notes

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use umbra_app::{AppState, Focus};
use umbra_core::{ConsultationRecord, FormField};

use crate::theme::styles;

pub const NO_DATA: &str = "No hay datos disponibles";

/// Fields listed under "INFORMACIÓN DEL CASO", in order
const SUMMARY_FIELDS: [FormField; 8] = [
    FormField::Address,
    FormField::PropertyType,
    FormField::Area,
    FormField::OperationType,
    FormField::Price,
    FormField::Seller,
    FormField::Email,
    FormField::Country,
];

const APPLICABLE_LAWS: [&str; 3] = [
    "Código Civil Colombiano - Artículos 1849-1896",
    "Ley 820 de 2003 - Arrendamiento urbano",
    "Ley 675 de 2001 - Propiedad horizontal",
];

const RECOMMENDATIONS: [&str; 4] = [
    "Realizar due diligence completo",
    "Verificar antecedentes de las partes",
    "Solicitar certificados actualizados",
    "Revisar cláusulas contractuales",
];

/// Summary text for one field; empty values get the placeholder with the
/// noun's grammatical gender
pub fn summary_value(record: &ConsultationRecord, field: FormField) -> String {
    let value = record.get(field);
    if value.is_empty() {
        return match field {
            FormField::Address | FormField::Area | FormField::OperationType => {
                "No especificada".to_string()
            }
            _ => "No especificado".to_string(),
        };
    }
    match field {
        FormField::Area => format!("{} m²", value),
        _ => value.to_string(),
    }
}

/// Documents to request; the last one depends on the operation
pub fn required_documents(record: &ConsultationRecord) -> [&'static str; 4] {
    let contract = if record.operation_type == "Compraventa" {
        "Escritura pública"
    } else {
        "Contrato de arrendamiento"
    };
    [
        "Certificado de libertad y tradición",
        "Certificado de paz y salvo",
        "Certificado de avalúo comercial",
        contract,
    ]
}

pub struct Results<'a> {
    state: &'a AppState,
}

impl<'a> Results<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(title, styles::heading()))
    }

    fn bullets<'b>(lines: &mut Vec<Line<'static>>, items: impl IntoIterator<Item = &'b str>) {
        for item in items {
            lines.push(Line::from(vec![
                Span::styled("  • ", styles::text_muted()),
                Span::styled(item.to_string(), styles::text_primary()),
            ]));
        }
    }

    fn build(record: &ConsultationRecord) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled("INFORME LEGAL", styles::heading())).centered(),
            Line::from(Span::styled(
                "Análisis completo de la propiedad",
                styles::text_muted(),
            ))
            .centered(),
            Line::raw(""),
            Self::section("INFORMACIÓN DEL CASO"),
        ];

        for field in SUMMARY_FIELDS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<22}", field.summary_label()),
                    styles::text_secondary(),
                ),
                Span::styled(summary_value(record, field), styles::text_bright()),
            ]));
        }

        lines.push(Line::raw(""));
        lines.push(Self::section("ANÁLISIS LEGAL"));
        lines.push(Line::from(Span::styled(" Leyes Aplicables", styles::accent())));
        Self::bullets(&mut lines, APPLICABLE_LAWS);
        lines.push(Line::from(Span::styled(
            " Documentación Requerida",
            styles::accent(),
        )));
        Self::bullets(&mut lines, required_documents(record));
        lines.push(Line::from(Span::styled(" Recomendaciones", styles::accent())));
        Self::bullets(&mut lines, RECOMMENDATIONS);

        if !record.notes.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Self::section("NOTAS ADICIONALES"));
            for row in record.notes.lines() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", row),
                    styles::text_primary(),
                )));
            }
        }

        lines
    }
}

impl Widget for Results<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.state.focus == Focus::Content);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(record) = &self.state.last_submission else {
            Paragraph::new(Line::from(Span::styled(NO_DATA, styles::text_muted())))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        };

        Paragraph::new(Self::build(record))
            .wrap(Wrap { trim: false })
            .scroll((self.state.results_scroll, 0))
            .render(inner, buf);
    }
}
