use crate::models::due::DueClass;
use crate::models::payment::Payment;
use chrono::{Duration, NaiveDate};

/// Forward window flagging payments that need imminent attention.
pub const DUE_SOON_DAYS: i64 = 7;

/// Classify one payment against "today".
///
/// Exactly one class applies:
/// - Paid     → status is Paid (terminal, dates no longer matter)
/// - Overdue  → pending AND due strictly before today
/// - DueSoon  → pending AND today <= due < today + 7 days
///   (due today counts; due in exactly 7 days does not)
/// - Pending  → everything else
pub fn classify(payment: &Payment, today: NaiveDate) -> DueClass {
    if payment.status.is_paid() {
        return DueClass::Paid;
    }

    if payment.due_date < today {
        return DueClass::Overdue;
    }

    if payment.due_date < today + Duration::days(DUE_SOON_DAYS) {
        return DueClass::DueSoon;
    }

    DueClass::Pending
}
