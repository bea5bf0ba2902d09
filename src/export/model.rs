// src/export/model.rs

use crate::models::payment::Payment;
use serde::Serialize;

/// Flat row for the tabular exports: one record per row, header row
/// included, columns title / amount / due date / status / notes /
/// created date.
#[derive(Serialize, Clone, Debug)]
pub struct PaymentExport {
    pub title: String,
    pub amount: String,
    pub due_date: String,
    pub status: String,
    pub notes: String,
    pub created_at: String,
}

impl From<&Payment> for PaymentExport {
    fn from(p: &Payment) -> Self {
        Self {
            title: p.title.clone(),
            amount: p.amount_str(),
            due_date: p.due_date_str(),
            status: p.status.to_db_str().to_string(),
            notes: p.notes.clone().unwrap_or_default(),
            created_at: p.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Header per CSV / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["title", "amount", "due_date", "status", "notes", "created_at"]
}

pub(crate) fn payment_to_row(e: &PaymentExport) -> Vec<String> {
    vec![
        e.title.clone(),
        e.amount.clone(),
        e.due_date.clone(),
        e.status.clone(),
        e.notes.clone(),
        e.created_at.clone(),
    ]
}

pub(crate) fn payments_to_table(rows: &[PaymentExport]) -> Vec<Vec<String>> {
    rows.iter().map(payment_to_row).collect()
}
