use crate::auth::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::PaymentStore;
use crate::db::log::pmlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::payment::NewPayment;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::format_amount;

/// Add a payment reminder.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Add {
        title,
        amount,
        due,
        notes,
    } = cmd
    {
        //
        // 1. Parse due date (mandatory)
        //
        let due_date =
            date::parse_date(due).ok_or_else(|| AppError::InvalidDate(due.to_string()))?;

        //
        // 2. Open DB and store
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = PaymentStore::open(&mut pool, session)?;

        //
        // 3. Create (required-field validation happens in the store)
        //
        let payment = store.create(NewPayment {
            title: title.clone(),
            amount: *amount,
            due_date,
            notes: notes.clone(),
        })?;

        success(format!(
            "Payment added: {} ({}) due {} [id {}]",
            payment.title,
            format_amount(payment.amount),
            payment.due_date_str(),
            payment.id
        ));

        let _ = pmlog(
            &pool.conn,
            "add",
            &payment.id,
            &format!("Added '{}' due {}", payment.title, payment.due_date_str()),
        );
    }

    Ok(())
}
