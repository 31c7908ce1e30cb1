//! Keyword-matched legal assistant.
//!
//! Deterministic: the lower-cased input is checked against each topic in
//! order and the first topic with a matching keyword wins. Keywords are plain
//! substrings, so accented spellings ("notaría") do not match unaccented
//! keywords ("notaria").

/// A topic and the paragraph returned when any of its keywords appears
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

/// Greeting that opens every chat
pub const GREETING: &str = "Hola, soy tu asistente legal de UMBRA. Estoy aquí para ayudarte con consultas legales inmobiliarias las 24 horas del día. ¿En qué puedo asistirte?";

/// Returned when no topic matches
pub const FALLBACK_RESPONSE: &str = "Entiendo tu consulta legal. Como asistente especializado en derecho inmobiliario, puedo ayudarte con temas como: contratos de compraventa, arrendamientos, escrituras públicas, hipotecas, impuestos prediales, propiedad horizontal, procesos judiciales y avalúos. ¿Podrías ser más específico sobre tu situación?";

/// Suggestions offered under the chat
pub const QUICK_TOPICS: &[&str] = &[
    "Proceso de compraventa inmobiliaria",
    "Contratos de arrendamiento",
    "Escrituras públicas y notarización",
    "Créditos hipotecarios",
    "Impuestos prediales",
    "Propiedad horizontal",
];

/// Topics in priority order
pub const TOPICS: &[Topic] = &[
    Topic {
        name: "compraventa",
        keywords: &["contrato", "compraventa"],
        response: "Para contratos de compraventa inmobiliaria, es fundamental verificar: 1) Certificado de libertad y tradición actualizado, 2) Paz y salvo de impuestos, 3) Avalúo comercial vigente, 4) Verificación de linderos. ¿Necesitas información específica sobre alguno de estos documentos?",
    },
    Topic {
        name: "arrendamiento",
        keywords: &["arriendo", "alquiler"],
        response: "En contratos de arrendamiento, según la Ley 820 de 2003, debes considerar: 1) Duración mínima de 1 año, 2) Incrementos anuales según IPC, 3) Cláusulas de terminación, 4) Garantías permitidas. ¿Tienes alguna situación específica de arrendamiento?",
    },
    Topic {
        name: "escrituras",
        keywords: &["escritura", "notaria"],
        response: "Para escrituras públicas inmobiliarias necesitas: 1) Minuta del contrato, 2) Certificados actualizados, 3) Avalúo catastral, 4) Paz y salvos al día. El proceso toma aproximadamente 15-30 días. ¿Estás en proceso de escrituración?",
    },
    Topic {
        name: "hipoteca",
        keywords: &["hipoteca", "credito"],
        response: "Para créditos hipotecarios considera: 1) Capacidad de pago (30% máximo de ingresos), 2) Avalúo bancario, 3) Seguros obligatorios, 4) Gastos notariales y registro. ¿Necesitas calcular tu capacidad de endeudamiento?",
    },
    Topic {
        name: "impuestos",
        keywords: &["impuesto", "predial"],
        response: "Los impuestos inmobiliarios incluyen: 1) Predial anual, 2) Impuesto de registro (1% del valor), 3) IVA en propiedades nuevas (19%), 4) Beneficio de vivienda VIS/VIP. ¿Qué tipo de impuesto necesitas calcular?",
    },
    Topic {
        name: "propiedad horizontal",
        keywords: &["propiedad horizontal", "condominio"],
        response: "En propiedad horizontal (Ley 675/2001): 1) Reglamento de copropiedad, 2) Administración obligatoria, 3) Cuotas de administración, 4) Asambleas de copropietarios. ¿Tienes consultas sobre administración o conflictos?",
    },
    Topic {
        name: "procesos judiciales",
        keywords: &["embargo", "judicial"],
        response: "Para procesos judiciales inmobiliarios: 1) Verificar medidas cautelares, 2) Revisar procesos ejecutivos, 3) Consultar RUNT judicial, 4) Analizar cargas y gravámenes. ¿La propiedad tiene algún proceso judicial?",
    },
    Topic {
        name: "avaluos",
        keywords: &["avaluo", "valor"],
        response: "Los avalúos inmobiliarios pueden ser: 1) Comercial (transacciones), 2) Catastral (impuestos), 3) Bancario (créditos), 4) Judicial (procesos). Cada uno tiene metodología específica. ¿Para qué propósito necesitas el avalúo?",
    },
];

/// First topic whose keywords occur in `input`, if any
pub fn match_topic(input: &str) -> Option<&'static Topic> {
    let lower = input.to_lowercase();
    TOPICS
        .iter()
        .find(|topic| topic.keywords.iter().any(|k| lower.contains(k)))
}

/// Canned answer for `input`
pub fn respond(input: &str) -> &'static str {
    match_topic(input)
        .map(|topic| topic.response)
        .unwrap_or(FALLBACK_RESPONSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_of(name: &str) -> &'static str {
        TOPICS
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.response)
            .unwrap()
    }

    #[test]
    fn test_contrato_returns_compraventa_paragraph() {
        assert_eq!(
            respond("Necesito revisar un contrato"),
            response_of("compraventa")
        );
        assert_eq!(respond("COMPRAVENTA de casa"), response_of("compraventa"));
    }

    #[test]
    fn test_unmatched_input_returns_fallback() {
        assert_eq!(respond("hola, ¿cómo estás?"), FALLBACK_RESPONSE);
        assert_eq!(respond(""), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_priority_order_wins_over_position_in_text() {
        // "hipoteca" appears first in the text, but compraventa has priority
        let input = "hipoteca sobre el contrato";
        assert_eq!(respond(input), response_of("compraventa"));

        // "valor" is lowest priority
        assert_eq!(respond("valor del arriendo"), response_of("arrendamiento"));
    }

    #[test]
    fn test_each_topic_is_reachable() {
        let cases = [
            ("alquiler de local", "arrendamiento"),
            ("trámite en la notaria", "escrituras"),
            ("credito bancario", "hipoteca"),
            ("pago del predial", "impuestos"),
            ("reglamento de propiedad horizontal", "propiedad horizontal"),
            ("vivo en un condominio", "propiedad horizontal"),
            ("tengo un embargo", "procesos judiciales"),
            ("necesito un avaluo", "avaluos"),
        ];
        for (input, topic) in cases {
            assert_eq!(respond(input), response_of(topic), "input: {input}");
        }
    }

    #[test]
    fn test_accented_spelling_is_not_folded() {
        assert_eq!(respond("notaría"), FALLBACK_RESPONSE);
        assert_eq!(respond("crédito"), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_quick_topics_resolve() {
        // "Proceso de compraventa inmobiliaria" -> compraventa
        assert_eq!(respond(QUICK_TOPICS[0]), response_of("compraventa"));
        // "Contratos de arrendamiento" contains "contrato" -> compraventa
        assert_eq!(respond(QUICK_TOPICS[1]), response_of("compraventa"));
        // "Escrituras públicas..." -> escrituras
        assert_eq!(respond(QUICK_TOPICS[2]), response_of("escrituras"));
    }

    #[test]
    fn test_respond_is_deterministic() {
        let input = "impuesto de registro";
        assert_eq!(respond(input), respond(input));
    }
}
