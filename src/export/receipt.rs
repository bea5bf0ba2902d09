// src/export/receipt.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::payment::Payment;
use crate::ui::messages::info;
use crate::utils::date::YearMonth;
use crate::utils::format_amount;
use std::io;
use std::path::Path;

const RECEIPT_FOOTER: &str = "Thank you for your payment!";

/// Width (in chars) for wrapped notes in the receipt body.
const NOTES_WRAP: usize = 80;

/// Generate a receipt document for a single payment:
/// receipt id (first 8 chars of the record id), generation date,
/// title, amount, due date, status and optional notes.
pub fn generate_receipt(payment: &Payment, path: &Path, force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;
    info(format!("Generating receipt: {}", path.display()));

    let mut lines: Vec<String> = vec![
        format!("Receipt ID: {}", payment.short_id()),
        format!("Date: {}", chrono::Local::now().format("%Y-%m-%d")),
        String::new(),
        "Payment Details:".to_string(),
        String::new(),
        format!("Title: {}", payment.title),
        format!("Amount: {}", format_amount(payment.amount)),
        format!("Due Date: {}", payment.due_date_str()),
        format!("Status: {}", payment.status.to_db_str()),
    ];

    if let Some(notes) = payment.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        lines.push(String::new());
        let mut wrapped = textwrap::wrap(notes, NOTES_WRAP).into_iter();
        if let Some(first) = wrapped.next() {
            lines.push(format!("Notes: {}", first));
        }
        for cont in wrapped {
            lines.push(format!("       {}", cont));
        }
    }

    let mut pdf = PdfManager::new();
    pdf.write_receipt("Payment Receipt", &lines, RECEIPT_FOOTER);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("Receipt error: {e}"))))?;

    notify_export_success("Receipt", path);
    Ok(())
}

/// Monthly history report: one summary page with the period totals.
pub fn generate_history_report(
    month: Option<YearMonth>,
    total_payments: usize,
    total_amount: f64,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;
    info(format!("Generating history report: {}", path.display()));

    let period = match month {
        Some(m) => m.label(),
        None => "All months".to_string(),
    };

    let lines: Vec<String> = vec![
        format!("Period: {}", period),
        format!("Date: {}", chrono::Local::now().format("%Y-%m-%d")),
        String::new(),
        format!("Total payments: {}", total_payments),
        format!("Total amount: {}", format_amount(total_amount)),
    ];

    let mut pdf = PdfManager::new();
    pdf.write_receipt("Payment History Report", &lines, RECEIPT_FOOTER);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("Report error: {e}"))))?;

    notify_export_success("History report", path);
    Ok(())
}
