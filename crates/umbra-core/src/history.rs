//! Sample consultation history shown in the REGISTRO view

use chrono::NaiveDate;

/// Review state of a past consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStatus {
    Completed,
    InReview,
}

impl HistoryStatus {
    pub fn label(self) -> &'static str {
        match self {
            HistoryStatus::Completed => "COMPLETADO",
            HistoryStatus::InReview => "EN REVISIÓN",
        }
    }
}

/// One row of the history table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: &'static str,
    pub kind: &'static str,
    pub property: &'static str,
    pub date: NaiveDate,
    pub status: HistoryStatus,
    pub value: &'static str,
}

/// The static sample rows, newest first
pub fn sample_history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry {
            id: "UMB-001",
            kind: "COMPRAVENTA",
            property: "Apartamento - Chapinero",
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default(),
            status: HistoryStatus::Completed,
            value: "$180,000,000",
        },
        HistoryEntry {
            id: "UMB-002",
            kind: "ARRENDAMIENTO",
            property: "Local - Zona T",
            date: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap_or_default(),
            status: HistoryStatus::InReview,
            value: "$2,500,000/mes",
        },
        HistoryEntry {
            id: "UMB-003",
            kind: "DUE DILIGENCE",
            property: "Terreno - Puente Alto",
            date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap_or_default(),
            status: HistoryStatus::Completed,
            value: "$450,000,000",
        },
    ]
}
