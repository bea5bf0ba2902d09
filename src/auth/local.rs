//! Database-native auth backend.
//!
//! Accounts are rows in the `users` table of the payment database; the
//! active session is a JSON sidecar file next to the database, so every
//! database carries its own session.

use super::{AuthBackend, Owner};
use crate::db::pool::DbPool;
use crate::db::queries::{find_user_by_email, get_user, insert_user};
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;

pub struct LocalAuth {
    db_path: String,
    session_file: PathBuf,
}

impl LocalAuth {
    pub fn new(db_path: &str) -> Self {
        Self {
            db_path: db_path.to_string(),
            session_file: PathBuf::from(format!("{db_path}.session")),
        }
    }

    fn read_session(&self) -> Option<Owner> {
        let raw = fs::read_to_string(&self.session_file).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn write_session(&self, owner: &Owner) -> AppResult<()> {
        let raw = serde_json::to_string(owner)
            .map_err(|e| AppError::Auth(format!("failed to encode session: {e}")))?;
        fs::write(&self.session_file, raw)?;
        Ok(())
    }
}

impl AuthBackend for LocalAuth {
    /// The persisted session is only trusted if its user row still exists.
    /// A database that cannot answer (missing, not yet initialized) means
    /// no owner, never a startup failure.
    fn current_owner(&self) -> AppResult<Option<Owner>> {
        let Some(owner) = self.read_session() else {
            return Ok(None);
        };

        let Ok(pool) = DbPool::new(&self.db_path) else {
            return Ok(None);
        };

        match get_user(&pool.conn, &owner.id) {
            Ok(Some(user)) => Ok(Some(user)),
            Ok(None) => {
                // stale session for a deleted account
                fs::remove_file(&self.session_file).ok();
                Ok(None)
            }
            Err(_) => Ok(None),
        }
    }

    fn register(&self, email: &str) -> AppResult<Owner> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AppError::Validation("email is required".into()));
        }

        let pool = DbPool::new(&self.db_path)?;

        if find_user_by_email(&pool.conn, &email)?.is_some() {
            return Err(AppError::Auth(format!(
                "an account for '{email}' already exists; use 'login'"
            )));
        }

        let owner = insert_user(&pool.conn, &email)?;
        self.write_session(&owner)?;
        Ok(owner)
    }

    fn sign_in(&self, email: &str) -> AppResult<Owner> {
        let email = email.trim().to_lowercase();
        let pool = DbPool::new(&self.db_path)?;

        let owner = find_user_by_email(&pool.conn, &email)?.ok_or_else(|| {
            AppError::Auth(format!("no account for '{email}'; run 'signup' first"))
        })?;

        self.write_session(&owner)?;
        Ok(owner)
    }

    fn sign_out(&self) -> AppResult<()> {
        if self.session_file.exists() {
            fs::remove_file(&self.session_file)?;
        }
        Ok(())
    }
}
