//! Process-wide session object.
//!
//! Built once in run() (init: fetch the current owner from the backend),
//! passed down to command handlers by argument, cleared on sign-out.
//! Listeners registered with subscribe() are notified on every auth
//! state change within the process.

use super::{AuthBackend, AuthChange, Owner, backend_for};
use crate::config::Config;
use crate::errors::{AppError, AppResult};

type Listener = Box<dyn Fn(&AuthChange)>;

pub struct Session {
    backend: Box<dyn AuthBackend>,
    owner: Option<Owner>,
    listeners: Vec<Listener>,
}

impl Session {
    /// Init lifecycle step: resolve the configured backend and fetch the
    /// current owner, if any.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let backend = backend_for(cfg);
        let owner = backend.current_owner()?;
        Ok(Self {
            backend,
            owner,
            listeners: Vec::new(),
        })
    }

    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    /// Gate used by the store accessor: no owner → Unauthenticated,
    /// before any database request is issued.
    pub fn require_owner(&self) -> AppResult<&Owner> {
        self.owner.as_ref().ok_or(AppError::Unauthenticated)
    }

    pub fn subscribe(&mut self, listener: impl Fn(&AuthChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self, change: &AuthChange) {
        for listener in &self.listeners {
            listener(change);
        }
    }

    pub fn register(&mut self, email: &str) -> AppResult<Owner> {
        let owner = self.backend.register(email)?;
        self.owner = Some(owner.clone());
        self.notify(&AuthChange::SignedIn(owner.clone()));
        Ok(owner)
    }

    pub fn sign_in(&mut self, email: &str) -> AppResult<Owner> {
        let owner = self.backend.sign_in(email)?;
        self.owner = Some(owner.clone());
        self.notify(&AuthChange::SignedIn(owner.clone()));
        Ok(owner)
    }

    /// Teardown lifecycle step: clear the backend session and the cached
    /// owner, then notify.
    pub fn sign_out(&mut self) -> AppResult<()> {
        self.backend.sign_out()?;
        self.owner = None;
        self.notify(&AuthChange::SignedOut);
        Ok(())
    }
}
