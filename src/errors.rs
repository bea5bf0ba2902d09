//! Unified application error type.
//! All modules (db, auth, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Payment store unavailable: {0}")]
    StoreUnavailable(String),

    // ---------------------------
    // Store contract errors
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payment not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Auth errors
    // ---------------------------
    #[error("Not signed in. Run 'rpayminder login' first.")]
    Unauthenticated,

    #[error("Authentication error: {0}")]
    Auth(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format: {0}")]
    InvalidMonth(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid payment status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
