use serde::Serialize;

/// Derived classification of a payment against "today".
/// Never persisted: recomputed from status + due_date on every view.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum DueClass {
    Paid,
    Overdue,
    DueSoon,
    Pending,
}

impl DueClass {
    pub fn label(&self) -> &'static str {
        match self {
            DueClass::Paid => "paid",
            DueClass::Overdue => "overdue",
            DueClass::DueSoon => "due soon",
            DueClass::Pending => "pending",
        }
    }
}
