//! JSON body posted to the webhook

use serde::Serialize;
use umbra_core::ConsultationRecord;

/// The consultation fields plus the identifier of the sending system
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    #[serde(flatten)]
    pub record: &'a ConsultationRecord,

    #[serde(rename = "sistema")]
    pub system: &'a str,
}

impl<'a> WebhookPayload<'a> {
    pub fn new(record: &'a ConsultationRecord, system: &'a str) -> Self {
        Self { record, system }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::FormField;

    #[test]
    fn test_payload_flattens_record_and_adds_system() {
        let record = ConsultationRecord::new()
            .with(FormField::Address, "Carrera 7 #71-21")
            .with(FormField::Notes, "Tiene hipoteca vigente");

        let json = serde_json::to_value(WebhookPayload::new(&record, "UMBRA Legal Analysis v1.0"))
            .unwrap();

        assert_eq!(json["direccion"], "Carrera 7 #71-21");
        assert_eq!(json["notas"], "Tiene hipoteca vigente");
        assert_eq!(json["sistema"], "UMBRA Legal Analysis v1.0");
        assert_eq!(json.as_object().unwrap().len(), 11);
    }
}
