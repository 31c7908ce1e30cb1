//! Interpreting webhook response bodies
//!
//! The workflow behind the webhook is free to answer with JSON or plain
//! text, and JSON answers put the report under one of several keys. These
//! functions never fail: anything unparsable falls back to the raw body.

use serde_json::Value;

/// Keys searched for the report text, in priority order
pub const REPORT_KEYS: &[&str] = &["output", "message", "data", "response", "informe", "analisis"];

/// Keys searched for a server-provided error message, in priority order
pub const ERROR_KEYS: &[&str] = &["message", "error"];

/// Longest server error message passed on to the alert, in characters
pub const MAX_ERROR_MESSAGE_CHARS: usize = 500;

/// Shown when the server answered 2xx with nothing usable
pub const EMPTY_REPORT_FALLBACK: &str = "Análisis completado - Respuesta recibida del servidor";

/// Whether a `Content-Type` header value denotes JSON
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

/// Extract the report text from a successful (2xx) response.
pub fn extract_report(content_type: Option<&str>, body: &str) -> String {
    let report = if is_json_content_type(content_type) {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => report_from_json(&value),
            Err(e) => {
                tracing::warn!("Webhook declared JSON but body did not parse: {}", e);
                body.to_string()
            }
        }
    } else {
        body.to_string()
    };

    if report.trim().is_empty() {
        EMPTY_REPORT_FALLBACK.to_string()
    } else {
        report
    }
}

/// Pick the report out of a parsed JSON body
pub fn report_from_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) => first_truthy(value, REPORT_KEYS).unwrap_or_else(|| pretty(value)),
        Value::Array(items) => items
            .first()
            .filter(|first| first.is_object())
            .and_then(|first| first_truthy(first, REPORT_KEYS))
            .unwrap_or_else(|| pretty(value)),
        _ => pretty(value),
    }
}

/// Best-effort message for a non-2xx response.
///
/// JSON bodies yield `message`, then `error`, then the compact JSON. Other
/// bodies yield the raw text, or `Error {status}: {reason}` when empty.
/// The result is capped at [`MAX_ERROR_MESSAGE_CHARS`].
pub fn extract_error_message(status: u16, reason: &str, body: &str) -> String {
    let message = if let Ok(value) = serde_json::from_str::<Value>(body) {
        first_truthy(&value, ERROR_KEYS).unwrap_or_else(|| value.to_string())
    } else if body.trim().is_empty() {
        format!("Error {}: {}", status, reason).trim_end().to_string()
    } else {
        body.to_string()
    };
    truncate_chars(message, MAX_ERROR_MESSAGE_CHARS)
}

/// Cut `text` to `max` characters, marking the cut with an ellipsis
fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((cut, _)) = text.char_indices().nth(max) {
        text.truncate(cut);
        text.push('…');
    }
    text
}

/// First key of `keys` holding a truthy value, rendered as text.
///
/// Strings are returned verbatim; other truthy values are pretty-printed.
/// `null`, `false`, `0` and `""` are skipped.
fn first_truthy(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find(|v| is_truthy(v))
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => pretty(other),
        })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn test_output_key_is_returned_verbatim() {
        assert_eq!(extract_report(JSON, r#"{"output":"X"}"#), "X");
    }

    #[test]
    fn test_report_key_priority() {
        let body = r#"{"informe":"I","message":"M","analisis":"A"}"#;
        assert_eq!(extract_report(JSON, body), "M");

        let body = r#"{"analisis":"A","informe":"I"}"#;
        assert_eq!(extract_report(JSON, body), "I");
    }

    #[test]
    fn test_falsy_values_are_skipped() {
        let body = r#"{"output":"","message":null,"data":0,"response":false,"informe":"ok"}"#;
        assert_eq!(extract_report(JSON, body), "ok");
    }

    #[test]
    fn test_non_string_truthy_value_is_pretty_printed() {
        let value = json!({"data": {"score": 7}});
        assert_eq!(report_from_json(&value), "{\n  \"score\": 7\n}");
    }

    #[test]
    fn test_object_without_known_keys_is_pretty_printed() {
        let value = json!({"foo": "bar"});
        assert_eq!(report_from_json(&value), "{\n  \"foo\": \"bar\"\n}");
    }

    #[test]
    fn test_array_wrapped_result_is_unwrapped() {
        assert_eq!(extract_report(JSON, r#"[{"output":"desde n8n"}]"#), "desde n8n");
    }

    #[test]
    fn test_array_without_object_is_pretty_printed() {
        assert_eq!(report_from_json(&json!([1, 2])), "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_top_level_string_is_returned() {
        assert_eq!(extract_report(JSON, r#""solo texto""#), "solo texto");
    }

    #[test]
    fn test_plain_text_content_type() {
        assert_eq!(
            extract_report(Some("text/plain"), "Informe en texto"),
            "Informe en texto"
        );
        assert_eq!(extract_report(None, r#"{"output":"X"}"#), r#"{"output":"X"}"#);
    }

    #[test]
    fn test_invalid_json_falls_back_to_body() {
        assert_eq!(extract_report(JSON, "not json at all"), "not json at all");
    }

    #[test]
    fn test_empty_body_uses_fallback() {
        assert_eq!(extract_report(Some("text/plain"), ""), EMPTY_REPORT_FALLBACK);
        assert_eq!(extract_report(JSON, ""), EMPTY_REPORT_FALLBACK);
        assert_eq!(extract_report(JSON, r#"{"output":"   "}"#), EMPTY_REPORT_FALLBACK);
    }

    #[test]
    fn test_content_type_detection_is_case_insensitive() {
        assert!(is_json_content_type(Some("Application/JSON")));
        assert!(!is_json_content_type(Some("text/html")));
        assert!(!is_json_content_type(None));
    }

    #[test]
    fn test_error_message_prefers_message_then_error() {
        assert_eq!(
            extract_error_message(500, "Internal Server Error", r#"{"message":"M","error":"E"}"#),
            "M"
        );
        assert_eq!(
            extract_error_message(500, "Internal Server Error", r#"{"error":"E"}"#),
            "E"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_compact_json() {
        assert_eq!(
            extract_error_message(400, "Bad Request", r#"{"code": 1}"#),
            r#"{"code":1}"#
        );
    }

    #[test]
    fn test_error_message_plain_text_and_empty() {
        assert_eq!(
            extract_error_message(502, "Bad Gateway", "upstream down"),
            "upstream down"
        );
        assert_eq!(
            extract_error_message(404, "Not Found", ""),
            "Error 404: Not Found"
        );
    }

    #[test]
    fn test_error_message_is_capped() {
        let body = "trace line\n".repeat(10_000);
        let message = extract_error_message(502, "Bad Gateway", &body);
        assert_eq!(message.chars().count(), MAX_ERROR_MESSAGE_CHARS + 1);
        assert!(message.starts_with("trace line"));
        assert!(message.ends_with('…'));
    }

    #[test]
    fn test_error_message_cap_respects_multibyte_chars() {
        let body = json!({ "message": "ñ".repeat(MAX_ERROR_MESSAGE_CHARS) }).to_string();
        let message = extract_error_message(500, "Internal Server Error", &body);
        assert_eq!(message, "ñ".repeat(MAX_ERROR_MESSAGE_CHARS));
    }
}
