// src/export/logic.rs

use crate::core::engine::filter;
use crate::core::engine::filter::StatusFilter;
use crate::core::store::PaymentStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::PaymentExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use crate::utils::date::{self, YearMonth};

use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the owner's payments.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a due-date expression:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    /// - `status`/`search`: same predicates as the dashboard
    pub fn export(
        store: &mut PaymentStore,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        status: StatusFilter,
        search: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let today = date::today();
        let mut selected = filter::apply(store.list()?, today, status, search);

        if let Some((start, end)) = date_bounds {
            selected.retain(|p| p.due_date >= start && p.due_date <= end);
        }

        if selected.is_empty() {
            warning("⚠️  No payments found for selected range.");
            return Ok(());
        }

        let rows: Vec<PaymentExport> = selected.iter().map(PaymentExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(range);
                export_pdf(&rows, path, &title)?
            }
        }

        Ok(())
    }

    /// Write an already-selected sequence of records as CSV (used by the
    /// history view, which does its own month restriction).
    pub fn export_selected_csv(payments: &[crate::models::payment::Payment], file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let rows: Vec<PaymentExport> = payments.iter().map(PaymentExport::from).collect();
        export_csv(&rows, path)
    }
}

/// PDF title derived from the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    let Some(p) = period.as_ref().filter(|p| !p.eq_ignore_ascii_case("all")) else {
        return "Payments".to_string();
    };

    match p.len() {
        // YYYY
        4 => format!("Payments for year {}", p),

        // YYYY-MM
        7 => match YearMonth::parse(p) {
            Ok(m) => format!("Payments for {}", m.label()),
            Err(_) => "Payments".to_string(),
        },

        // YYYY-MM-DD
        10 => format!("Payments due {}", p),

        _ => {
            // interval
            if let Some((start, end)) = p.split_once(':') {
                format!("Payments from {} to {}", start.trim(), end.trim())
            } else {
                "Payments".to_string()
            }
        }
    }
}
