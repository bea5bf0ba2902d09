use serde::Serialize;

/// Persisted lifecycle state of a payment. `Paid` is terminal.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(PaymentStatus::Pending),
            "Paid" => Some(PaymentStatus::Paid),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PaymentStatus::Pending)
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}
