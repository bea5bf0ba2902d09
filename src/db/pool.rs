//! SQLite connection pool wrapper (lightweight for CLI usage).

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

#[derive(Debug)]
pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database file. A failure here means the backing store is
    /// unreachable, which every caller surfaces as StoreUnavailable.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))
            .map_err(|e| AppError::StoreUnavailable(format!("{}: {}", path, e)))?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        func(&mut self.conn)
    }
}
