use super::classify::classify;
use crate::models::due::DueClass;
use crate::models::payment::Payment;
use chrono::NaiveDate;
use clap::ValueEnum;

/// Status filter of the dashboard. `All` is the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum StatusFilter {
    All,
    Pending,
    Paid,
    Overdue,
    DueSoon,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Paid => "paid",
            StatusFilter::Overdue => "overdue",
            StatusFilter::DueSoon => "due_soon",
        }
    }
}

/// Case-insensitive substring match over title OR notes.
/// An empty term matches everything.
pub fn matches_search(payment: &Payment, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();

    payment.title.to_lowercase().contains(&needle)
        || payment
            .notes
            .as_ref()
            .is_some_and(|n| n.to_lowercase().contains(&needle))
}

pub fn matches_status(payment: &Payment, today: NaiveDate, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        // "pending" is the persisted status, so it includes overdue rows
        StatusFilter::Pending => payment.status.is_pending(),
        StatusFilter::Paid => payment.status.is_paid(),
        StatusFilter::Overdue => classify(payment, today) == DueClass::Overdue,
        StatusFilter::DueSoon => classify(payment, today) == DueClass::DueSoon,
    }
}

/// A record is included iff it passes BOTH predicates.
/// Input order is preserved.
pub fn apply(
    payments: &[Payment],
    today: NaiveDate,
    filter: StatusFilter,
    search: &str,
) -> Vec<Payment> {
    payments
        .iter()
        .filter(|p| matches_search(p, search) && matches_status(p, today, filter))
        .cloned()
        .collect()
}
