//! Classification & aggregation engine.
//!
//! Pure functions of (payments, today, filters, search term): no side
//! effects, no I/O. Views are re-derived from scratch on every call.

pub mod classify;
pub mod filter;
pub mod history;
pub mod stats;

pub use classify::{DUE_SOON_DAYS, classify};
pub use filter::StatusFilter;
pub use history::HistoryView;
pub use stats::DashboardStats;

use crate::models::payment::Payment;
use crate::utils::date::YearMonth;
use chrono::NaiveDate;

/// Dashboard view model: the filtered collection plus the stat block
/// (stats always cover the full collection, not the filtered one).
#[derive(Debug)]
pub struct DashboardView {
    pub payments: Vec<Payment>,
    pub stats: DashboardStats,
}

/// Reminders view model: what needs attention right now.
#[derive(Debug)]
pub struct RemindersView {
    pub overdue: Vec<Payment>,
    pub upcoming: Vec<Payment>,
}

impl RemindersView {
    pub fn total(&self) -> usize {
        self.overdue.len() + self.upcoming.len()
    }
}

pub struct Engine;

impl Engine {
    pub fn build_dashboard(
        payments: &[Payment],
        today: NaiveDate,
        status: StatusFilter,
        search: &str,
    ) -> DashboardView {
        DashboardView {
            payments: filter::apply(payments, today, status, search),
            stats: stats::dashboard_stats(payments, today),
        }
    }

    pub fn build_reminders(payments: &[Payment], today: NaiveDate) -> RemindersView {
        RemindersView {
            overdue: filter::apply(payments, today, StatusFilter::Overdue, ""),
            upcoming: filter::apply(payments, today, StatusFilter::DueSoon, ""),
        }
    }

    pub fn build_history(payments: &[Payment], month: Option<YearMonth>) -> HistoryView {
        history::build(payments, month)
    }

    pub fn available_months(payments: &[Payment]) -> Vec<YearMonth> {
        history::available_months(payments)
    }
}
