use crate::auth::Owner;
use crate::errors::{AppError, AppResult};
use crate::models::payment::{NewPayment, Payment, PaymentPatch};
use crate::models::status::PaymentStatus;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::types::ToSql;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use uuid::Uuid;

/// Mapping DB row → Payment (reused by every payment query).
///
/// `amount` is stored as TEXT and coerced to f64 here; a malformed value
/// surfaces as a conversion failure instead of a silent zero.
pub fn map_row(row: &Row) -> Result<Payment> {
    let due_str: String = row.get("due_date")?;
    let due_date = NaiveDate::parse_from_str(&due_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(due_str.clone())),
        )
    })?;

    let amount_str: String = row.get("amount")?;
    let amount: f64 = amount_str.trim().parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidAmount(amount_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = PaymentStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(Payment {
        id: row.get("id")?,
        owner_id: row.get("owner_id")?,
        title: row.get("title")?,
        amount,
        due_date,
        status,
        notes: row.get("notes")?,
        created_at: parse_timestamp(row, "created_at")?,
        updated_at: parse_timestamp(row, "updated_at")?,
    })
}

fn parse_timestamp(row: &Row, col: &str) -> Result<DateTime<Local>> {
    let raw: String = row.get(col)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(raw.clone())),
            )
        })
}

/// All payments of one owner, due date ascending.
/// No rows is an empty Vec, never an error.
pub fn list_payments(conn: &Connection, owner_id: &str) -> AppResult<Vec<Payment>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM payments
         WHERE owner_id = ?1
         ORDER BY due_date ASC, created_at ASC",
    )?;

    let rows = stmt.query_map([owner_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_payment(conn: &Connection, id: &str, owner_id: &str) -> AppResult<Option<Payment>> {
    let mut stmt = conn.prepare("SELECT * FROM payments WHERE id = ?1 AND owner_id = ?2")?;
    let payment = stmt.query_row(params![id, owner_id], map_row).optional()?;
    Ok(payment)
}

/// Insert a new payment. The storage layer assigns id, status and both
/// timestamps; the finished row is returned to the caller.
pub fn insert_payment(
    conn: &Connection,
    owner_id: &str,
    fields: &NewPayment,
) -> AppResult<Payment> {
    let now = Local::now();

    let payment = Payment {
        id: Uuid::new_v4().to_string(),
        owner_id: owner_id.to_string(),
        title: fields.title.clone(),
        amount: fields.amount,
        due_date: fields.due_date,
        status: PaymentStatus::Pending,
        notes: fields.notes.clone(),
        created_at: now,
        updated_at: now,
    };

    conn.execute(
        "INSERT INTO payments (id, owner_id, title, amount, due_date, status, notes, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            payment.id,
            payment.owner_id,
            payment.title,
            payment.amount_str(),
            payment.due_date_str(),
            payment.status.to_db_str(),
            payment.notes,
            payment.created_at.to_rfc3339(),
            payment.updated_at.to_rfc3339(),
        ],
    )?;

    Ok(payment)
}

/// Partial update, filtered on BOTH id and owner_id so one owner can never
/// mutate another owner's record. Returns the number of rows matched
/// (0 → caller maps to NotFound). `updated_at` is always refreshed.
pub fn update_payment(
    conn: &Connection,
    id: &str,
    owner_id: &str,
    patch: &PaymentPatch,
    now: &DateTime<Local>,
) -> AppResult<usize> {
    let now_str = now.to_rfc3339();
    let amount_str = patch.amount.map(|a| format!("{:.2}", a));
    let due_str = patch.due_date.map(|d| d.format("%Y-%m-%d").to_string());
    let status_str = patch.status.map(|s| s.to_db_str());

    let mut sets: Vec<&str> = vec!["updated_at = ?"];
    let mut values: Vec<&dyn ToSql> = vec![&now_str];

    if let Some(title) = &patch.title {
        sets.push("title = ?");
        values.push(title);
    }
    if let Some(amount) = &amount_str {
        sets.push("amount = ?");
        values.push(amount);
    }
    if let Some(due) = &due_str {
        sets.push("due_date = ?");
        values.push(due);
    }
    if let Some(status) = &status_str {
        sets.push("status = ?");
        values.push(status);
    }
    if let Some(notes) = &patch.notes {
        sets.push("notes = ?");
        values.push(notes);
    }

    let sql = format!(
        "UPDATE payments SET {} WHERE id = ? AND owner_id = ?",
        sets.join(", ")
    );

    values.push(&id);
    values.push(&owner_id);

    let changed = conn.execute(&sql, rusqlite::params_from_iter(values))?;
    Ok(changed)
}

/// Delete with the same dual-filter discipline as update.
/// Returns the number of rows removed (0 → caller maps to NotFound).
pub fn delete_payment(conn: &Connection, id: &str, owner_id: &str) -> AppResult<usize> {
    let removed = conn.execute(
        "DELETE FROM payments WHERE id = ?1 AND owner_id = ?2",
        params![id, owner_id],
    )?;
    Ok(removed)
}

// ---------------------------
// Users (local auth backend)
// ---------------------------

fn map_owner(row: &Row) -> Result<Owner> {
    Ok(Owner {
        id: row.get("id")?,
        email: row.get("email")?,
    })
}

pub fn find_user_by_email(conn: &Connection, email: &str) -> AppResult<Option<Owner>> {
    let mut stmt = conn.prepare("SELECT id, email FROM users WHERE email = ?1")?;
    let owner = stmt.query_row([email], map_owner).optional()?;
    Ok(owner)
}

pub fn get_user(conn: &Connection, id: &str) -> AppResult<Option<Owner>> {
    let mut stmt = conn.prepare("SELECT id, email FROM users WHERE id = ?1")?;
    let owner = stmt.query_row([id], map_owner).optional()?;
    Ok(owner)
}

pub fn insert_user(conn: &Connection, email: &str) -> AppResult<Owner> {
    let owner = Owner {
        id: Uuid::new_v4().to_string(),
        email: Some(email.to_string()),
    };

    conn.execute(
        "INSERT INTO users (id, email, created_at) VALUES (?1, ?2, ?3)",
        params![owner.id, email, Local::now().to_rfc3339()],
    )?;

    Ok(owner)
}
