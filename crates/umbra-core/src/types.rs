//! Core domain types for consultations and the legal agent chat

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Option lists
// ─────────────────────────────────────────────────────────────────────────────

pub const PROPERTY_TYPES: &[&str] = &[
    "Apartamento",
    "Casa",
    "Local Comercial",
    "Oficina",
    "Terreno",
    "Bodega",
    "Otro",
];

pub const OPERATION_TYPES: &[&str] = &[
    "Compraventa",
    "Arrendamiento",
    "Hipoteca",
    "Due Diligence",
    "Consulta Legal",
];

pub const COUNTRIES: &[&str] = &[
    "Colombia",
    "Chile",
    "Argentina",
    "México",
    "Perú",
    "Ecuador",
    "Venezuela",
    "Uruguay",
    "Paraguay",
    "Bolivia",
    "España",
    "Estados Unidos",
    "Otro",
];

// ─────────────────────────────────────────────────────────────────────────────
// Form fields
// ─────────────────────────────────────────────────────────────────────────────

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free single-line text
    Text,
    /// Digits with at most one decimal separator
    Numeric,
    /// Free text that may span several lines
    Multiline,
    /// One value out of a fixed list (empty = nothing selected)
    Select(&'static [&'static str]),
}

/// The named fields of a consultation, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Address,
    PropertyType,
    Area,
    OperationType,
    Price,
    Seller,
    Buyer,
    Email,
    Country,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 10] = [
        FormField::Address,
        FormField::PropertyType,
        FormField::Area,
        FormField::OperationType,
        FormField::Price,
        FormField::Seller,
        FormField::Buyer,
        FormField::Email,
        FormField::Country,
        FormField::Notes,
    ];

    /// Fields that must be non-empty before submission
    pub const REQUIRED: [FormField; 4] = [
        FormField::Address,
        FormField::PropertyType,
        FormField::Email,
        FormField::Country,
    ];

    pub fn kind(self) -> FieldKind {
        match self {
            FormField::PropertyType => FieldKind::Select(PROPERTY_TYPES),
            FormField::OperationType => FieldKind::Select(OPERATION_TYPES),
            FormField::Country => FieldKind::Select(COUNTRIES),
            FormField::Area => FieldKind::Numeric,
            FormField::Notes => FieldKind::Multiline,
            _ => FieldKind::Text,
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Prompt shown above the input
    pub fn label(self) -> &'static str {
        match self {
            FormField::Address => "Ingresar dirección exacta",
            FormField::PropertyType => "Definir tipo de propiedad",
            FormField::Area => "Ingresar superficie en m²",
            FormField::OperationType => "Especificar tipo de operación",
            FormField::Price => "Establecer precio o valor",
            FormField::Seller => "Identificar vendedor o propietario",
            FormField::Buyer => "Identificar comprador o cliente",
            FormField::Email => "Correo electrónico",
            FormField::Country => "País de la propiedad",
            FormField::Notes => "Agregar notas adicionales",
        }
    }

    /// Helper line shown under the label
    pub fn hint(self) -> &'static str {
        match self {
            FormField::Address => "Ej: Av. Providencia 1234, Providencia, Santiago",
            FormField::PropertyType => "Seleccionar tipo de propiedad",
            FormField::Area => "Ej: 150",
            FormField::OperationType => "Seleccionar operación",
            FormField::Price => "Ej: $250,000,000 CLP",
            FormField::Seller | FormField::Buyer => "Nombre completo o razón social",
            FormField::Email => "Para notificaciones y seguimiento",
            FormField::Country => "Determina la jurisdicción legal aplicable",
            FormField::Notes => "Información adicional relevante para el análisis legal...",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Address => "Ingrese la dirección completa",
            FormField::PropertyType => "Seleccione tipo de propiedad",
            FormField::Area => "Superficie en metros cuadrados",
            FormField::OperationType => "Seleccione tipo de operación",
            FormField::Price => "Precio o valor de la propiedad",
            FormField::Seller => "Nombre del vendedor o propietario",
            FormField::Buyer => "Nombre del comprador o cliente",
            FormField::Email => "ejemplo@correo.com",
            FormField::Country => "Seleccione país",
            FormField::Notes => "Información adicional, observaciones especiales, documentos disponibles, etc.",
        }
    }

    /// Short name used in the results summary
    pub fn summary_label(self) -> &'static str {
        match self {
            FormField::Address => "Dirección",
            FormField::PropertyType => "Tipo de Propiedad",
            FormField::Area => "Superficie",
            FormField::OperationType => "Operación",
            FormField::Price => "Precio/Valor",
            FormField::Seller => "Vendedor/Propietario",
            FormField::Buyer => "Comprador/Cliente",
            FormField::Email => "Correo Electrónico",
            FormField::Country => "País",
            FormField::Notes => "Notas",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ConsultationRecord
// ─────────────────────────────────────────────────────────────────────────────

/// One consultation as collected by the form.
///
/// Serialized with the webhook's field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRecord {
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "tipoPropiedad")]
    pub property_type: String,
    #[serde(rename = "superficie")]
    pub area: String,
    #[serde(rename = "tipoOperacion")]
    pub operation_type: String,
    #[serde(rename = "precio")]
    pub price: String,
    #[serde(rename = "vendedor")]
    pub seller: String,
    #[serde(rename = "comprador")]
    pub buyer: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "notas")]
    pub notes: String,
}

impl ConsultationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Address => &self.address,
            FormField::PropertyType => &self.property_type,
            FormField::Area => &self.area,
            FormField::OperationType => &self.operation_type,
            FormField::Price => &self.price,
            FormField::Seller => &self.seller,
            FormField::Buyer => &self.buyer,
            FormField::Email => &self.email,
            FormField::Country => &self.country,
            FormField::Notes => &self.notes,
        }
    }

    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Address => &mut self.address,
            FormField::PropertyType => &mut self.property_type,
            FormField::Area => &mut self.area,
            FormField::OperationType => &mut self.operation_type,
            FormField::Price => &mut self.price,
            FormField::Seller => &mut self.seller,
            FormField::Buyer => &mut self.buyer,
            FormField::Email => &mut self.email,
            FormField::Country => &mut self.country,
            FormField::Notes => &mut self.notes,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Builder-style setter, handy in tests and fixtures
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Required fields that are still empty, in display order
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single message in the legal agent conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(id: u64, role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self::new(id, ChatRole::User, text)
    }

    pub fn assistant(id: u64, text: impl Into<String>) -> Self {
        Self::new(id, ChatRole::Assistant, text)
    }

    /// Time label shown under the bubble (HH:MM)
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_wire_names() {
        let record = ConsultationRecord::new()
            .with(FormField::Address, "Calle 1")
            .with(FormField::PropertyType, "Casa")
            .with(FormField::Email, "a@b.co")
            .with(FormField::Country, "Chile");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["direccion"], "Calle 1");
        assert_eq!(json["tipoPropiedad"], "Casa");
        assert_eq!(json["correo"], "a@b.co");
        assert_eq!(json["pais"], "Chile");
        assert_eq!(json["notas"], "");
        assert_eq!(json.as_object().unwrap().len(), 10);
    }

    #[test]
    fn test_get_and_set_cover_every_field() {
        let mut record = ConsultationRecord::new();
        for (i, field) in FormField::ALL.iter().enumerate() {
            record.set(*field, format!("v{i}"));
        }
        for (i, field) in FormField::ALL.iter().enumerate() {
            assert_eq!(record.get(*field), format!("v{i}"));
        }
    }

    #[test]
    fn test_missing_required_reports_in_order() {
        let record = ConsultationRecord::new().with(FormField::PropertyType, "Casa");
        assert_eq!(
            record.missing_required(),
            vec![FormField::Address, FormField::Email, FormField::Country]
        );
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(FormField::Area.kind(), FieldKind::Numeric);
        assert_eq!(FormField::Notes.kind(), FieldKind::Multiline);
        assert_eq!(FormField::Country.kind(), FieldKind::Select(COUNTRIES));
        assert!(FormField::Email.is_required());
        assert!(!FormField::Price.is_required());
    }

    #[test]
    fn test_chat_message_constructors() {
        let msg = ChatMessage::user(3, "hola");
        assert_eq!(msg.role, ChatRole::User);
        assert_eq!(msg.id, 3);
        assert_eq!(msg.time_label().len(), 5);
    }
}
