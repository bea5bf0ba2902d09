use super::status::PaymentStatus;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub id: String,        // ⇔ payments.id (TEXT, UUID v4)
    pub owner_id: String,  // ⇔ payments.owner_id (TEXT, set once at create)
    pub title: String,     // ⇔ payments.title (TEXT NOT NULL)
    pub amount: f64,       // ⇔ payments.amount (TEXT, coerced on load)
    pub due_date: NaiveDate, // ⇔ payments.due_date (TEXT "YYYY-MM-DD")
    pub status: PaymentStatus, // ⇔ payments.status ('Pending' | 'Paid')
    pub notes: Option<String>, // ⇔ payments.notes (TEXT, nullable)

    pub created_at: DateTime<Local>, // ⇔ payments.created_at (TEXT, ISO8601)
    pub updated_at: DateTime<Local>, // ⇔ payments.updated_at (TEXT, ISO8601)
}

impl Payment {
    pub fn due_date_str(&self) -> String {
        self.due_date.format("%Y-%m-%d").to_string()
    }

    pub fn amount_str(&self) -> String {
        format!("{:.2}", self.amount)
    }

    /// First 8 characters of the record id, used as receipt id.
    pub fn short_id(&self) -> &str {
        &self.id[..self.id.len().min(8)]
    }
}

/// Fields the caller provides on create. Everything else (id, owner,
/// status, timestamps) is assigned by the storage layer.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub title: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub notes: Option<String>,
}

impl NewPayment {
    /// Required-field presence check. No further validation by design.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".into()));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(AppError::Validation(
                "amount must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}

/// Partial update: only the fields set are written.
#[derive(Debug, Clone, Default)]
pub struct PaymentPatch {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<PaymentStatus>,
    pub notes: Option<Option<String>>,
}

impl PaymentPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.amount.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }

    pub fn validate(&self) -> AppResult<()> {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err(AppError::Validation("title is required".into()));
        }
        if let Some(amount) = self.amount
            && (!amount.is_finite() || amount < 0.0)
        {
            return Err(AppError::Validation(
                "amount must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}
