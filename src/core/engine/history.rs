use crate::models::payment::Payment;
use crate::utils::date::YearMonth;

/// History view model: Paid records (optionally one calendar month of
/// them, keyed by last-update time) plus their totals.
#[derive(Debug)]
pub struct HistoryView {
    pub payments: Vec<Payment>,
    pub total_amount: f64,
    pub total_payments: usize,
}

/// Restrict to Paid records, then to the selected month (updated_at
/// within the month, local time), most recently paid first.
pub fn build(payments: &[Payment], month: Option<YearMonth>) -> HistoryView {
    let mut paid: Vec<Payment> = payments
        .iter()
        .filter(|p| p.status.is_paid())
        .filter(|p| match month {
            None => true,
            Some(m) => {
                let (start, end) = m.bounds();
                let updated = p.updated_at.naive_local();
                updated >= start && updated < end
            }
        })
        .cloned()
        .collect();

    paid.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let total_amount = paid.iter().map(|p| p.amount).sum();
    let total_payments = paid.len();

    HistoryView {
        payments: paid,
        total_amount,
        total_payments,
    }
}

/// Distinct year-month buckets among Paid records, most recent first.
/// Feeds the month selector.
pub fn available_months(payments: &[Payment]) -> Vec<YearMonth> {
    let mut months: Vec<YearMonth> = payments
        .iter()
        .filter(|p| p.status.is_paid())
        .map(|p| YearMonth::of(p.updated_at.date_naive()))
        .collect();

    months.sort();
    months.dedup();
    months.reverse();
    months
}
