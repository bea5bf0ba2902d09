//! Identity capability.
//!
//! One polymorphic backend trait with two implementations chosen at startup
//! from the configuration; command handlers never talk to a backend
//! directly, only to the [`session::Session`] built in lib::run().

pub mod local;
pub mod session;
pub mod token;

use crate::config::{AuthBackendKind, Config};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// The authenticated user. The id is the ownership key for every
/// payment row; the email is only known to the local backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Owner {
    pub id: String,
    pub email: Option<String>,
}

impl Owner {
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.id)
    }
}

/// Auth state transition, delivered to session listeners.
#[derive(Debug, Clone)]
pub enum AuthChange {
    SignedIn(Owner),
    SignedOut,
}

/// The full capability the rest of the application consumes:
/// current owner or none, registration/sign-in, and a sign-out action.
/// Credential verification is explicitly out of scope for every backend.
pub trait AuthBackend {
    fn current_owner(&self) -> AppResult<Option<Owner>>;
    fn register(&self, email: &str) -> AppResult<Owner>;
    fn sign_in(&self, email: &str) -> AppResult<Owner>;
    fn sign_out(&self) -> AppResult<()>;
}

/// Build the backend selected by the configuration.
pub fn backend_for(cfg: &Config) -> Box<dyn AuthBackend> {
    match cfg.auth_backend {
        AuthBackendKind::Local => Box::new(local::LocalAuth::new(&cfg.database)),
        AuthBackendKind::Token => Box::new(token::TokenAuth::new(cfg.owner_token.clone())),
    }
}
