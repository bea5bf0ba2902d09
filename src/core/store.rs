//! Payment store accessor.
//!
//! Owner-scoped CRUD over the payments table plus an in-memory cached
//! collection. Every successful mutation merges into the cache with the
//! same values the statement wrote (write-through, no read-after-write);
//! refresh() is the explicit revalidation hook. The cache belongs to one
//! accessor in one process: cross-process edits are last-write-wins and
//! only become visible on the next refresh.

use crate::auth::session::Session;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_payment, get_payment, insert_payment, list_payments, update_payment,
};
use crate::errors::{AppError, AppResult};
use crate::models::payment::{NewPayment, Payment, PaymentPatch};
use crate::models::status::PaymentStatus;
use chrono::Local;

#[derive(Debug)]
pub struct PaymentStore<'a> {
    pool: &'a mut DbPool,
    owner_id: String,
    cache: Vec<Payment>,
    loaded: bool,
}

impl<'a> PaymentStore<'a> {
    /// Fails with Unauthenticated before any request when there is no
    /// signed-in owner.
    pub fn open(pool: &'a mut DbPool, session: &Session) -> AppResult<Self> {
        let owner = session.require_owner()?;
        Ok(Self {
            pool,
            owner_id: owner.id.clone(),
            cache: Vec::new(),
            loaded: false,
        })
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// The owner's payments, due date ascending. Loads once, then serves
    /// the cached collection.
    pub fn list(&mut self) -> AppResult<&[Payment]> {
        if !self.loaded {
            self.cache = list_payments(&self.pool.conn, &self.owner_id)?;
            self.loaded = true;
        }
        Ok(&self.cache)
    }

    /// Drop the cache and re-fetch (revalidation).
    pub fn refresh(&mut self) -> AppResult<&[Payment]> {
        self.loaded = false;
        self.list()
    }

    pub fn get(&mut self, id: &str) -> AppResult<Payment> {
        if self.loaded
            && let Some(p) = self.cache.iter().find(|p| p.id == id)
        {
            return Ok(p.clone());
        }

        get_payment(&self.pool.conn, id, &self.owner_id)?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    pub fn create(&mut self, fields: NewPayment) -> AppResult<Payment> {
        fields.validate()?;

        let payment = insert_payment(&self.pool.conn, &self.owner_id, &fields)?;

        if self.loaded {
            self.cache.push(payment.clone());
            self.sort_cache();
        }
        Ok(payment)
    }

    pub fn update(&mut self, id: &str, patch: PaymentPatch) -> AppResult<Payment> {
        patch.validate()?;

        let now = Local::now();
        let changed = update_payment(&self.pool.conn, id, &self.owner_id, &patch, &now)?;
        if changed == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }

        // Optimistic merge: apply the same values the UPDATE wrote.
        self.ensure_loaded()?;
        if !self.cache.iter().any(|p| p.id == id) {
            // row exists in the store but not in a stale cache
            self.loaded = false;
            self.ensure_loaded()?;
        }
        let merged = {
            let cached = self
                .cache
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| AppError::NotFound(id.to_string()))?;

            if let Some(title) = &patch.title {
                cached.title = title.clone();
            }
            if let Some(amount) = patch.amount {
                cached.amount = amount;
            }
            if let Some(due_date) = patch.due_date {
                cached.due_date = due_date;
            }
            if let Some(status) = patch.status {
                cached.status = status;
            }
            if let Some(notes) = &patch.notes {
                cached.notes = notes.clone();
            }
            cached.updated_at = now;
            cached.clone()
        };
        self.sort_cache();

        Ok(merged)
    }

    /// Sugar for update with status=Paid; no other field is touched.
    pub fn mark_paid(&mut self, id: &str) -> AppResult<Payment> {
        self.update(
            id,
            PaymentPatch {
                status: Some(PaymentStatus::Paid),
                ..PaymentPatch::default()
            },
        )
    }

    pub fn delete(&mut self, id: &str) -> AppResult<()> {
        let removed = delete_payment(&self.pool.conn, id, &self.owner_id)?;
        if removed == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }

        if self.loaded {
            self.cache.retain(|p| p.id != id);
        }
        Ok(())
    }

    fn ensure_loaded(&mut self) -> AppResult<()> {
        if !self.loaded {
            self.cache = list_payments(&self.pool.conn, &self.owner_id)?;
            self.loaded = true;
        }
        Ok(())
    }

    /// Keep the cached collection in the list() contract order.
    fn sort_cache(&mut self) {
        self.cache
            .sort_by(|a, b| (a.due_date, a.created_at).cmp(&(b.due_date, b.created_at)));
    }
}
