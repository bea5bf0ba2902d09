use crate::models::payment::Payment;
use chrono::NaiveDate;

/// Dashboard stat block.
///
/// `total_amount` sums Pending amounts only: money still at risk.
/// Paid amounts are excluded on purpose.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub overdue: usize,
    pub total_amount: f64,
}

pub fn dashboard_stats(payments: &[Payment], today: NaiveDate) -> DashboardStats {
    let pending: Vec<&Payment> = payments.iter().filter(|p| p.status.is_pending()).collect();

    DashboardStats {
        total: payments.len(),
        pending: pending.len(),
        overdue: pending.iter().filter(|p| p.due_date < today).count(),
        total_amount: pending.iter().map(|p| p.amount).sum(),
    }
}
