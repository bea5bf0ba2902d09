use crate::auth::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::PaymentStore;
use crate::db::log::pmlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::payment::PaymentPatch;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Edit an existing payment (partial update).
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        amount,
        due,
        notes,
        clear_notes,
    } = cmd
    {
        let due_date = match due {
            Some(d) => {
                Some(date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?)
            }
            None => None,
        };

        let patch = PaymentPatch {
            title: title.clone(),
            amount: *amount,
            due_date,
            status: None,
            notes: if *clear_notes {
                Some(None)
            } else {
                notes.clone().map(Some)
            },
        };

        if patch.is_empty() {
            warning("Nothing to update: pass at least one of --title, --amount, --due, --notes.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = PaymentStore::open(&mut pool, session)?;

        let payment = store.update(id, patch)?;

        success(format!(
            "Payment updated: {} [id {}]",
            payment.title,
            payment.short_id()
        ));

        let _ = pmlog(
            &pool.conn,
            "edit",
            &payment.id,
            &format!("Edited '{}'", payment.title),
        );
    }

    Ok(())
}
