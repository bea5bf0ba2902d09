//! Hosted-identity stand-in backend.
//!
//! The owner id is supplied externally (RPAYMINDER_OWNER or the
//! `owner_token` config key); account management lives with the provider,
//! so register/sign-in are refused here.

use super::{AuthBackend, Owner};
use crate::errors::{AppError, AppResult};
use std::env;

pub struct TokenAuth {
    configured: Option<String>,
}

impl TokenAuth {
    pub fn new(configured: Option<String>) -> Self {
        Self { configured }
    }

    fn owner_id(&self) -> Option<String> {
        env::var("RPAYMINDER_OWNER")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.configured.clone())
    }
}

impl AuthBackend for TokenAuth {
    fn current_owner(&self) -> AppResult<Option<Owner>> {
        Ok(self.owner_id().map(|id| Owner { id, email: None }))
    }

    fn register(&self, _email: &str) -> AppResult<Owner> {
        Err(AppError::Auth(
            "registration is managed by the identity provider".into(),
        ))
    }

    fn sign_in(&self, _email: &str) -> AppResult<Owner> {
        Err(AppError::Auth(
            "sign-in is managed by the identity provider; set RPAYMINDER_OWNER".into(),
        ))
    }

    /// Nothing to clear locally; the provider session is external.
    fn sign_out(&self) -> AppResult<()> {
        Ok(())
    }
}
