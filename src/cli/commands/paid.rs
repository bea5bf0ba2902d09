use crate::auth::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::PaymentStore;
use crate::db::log::pmlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::format_amount;

/// Mark a payment as paid.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Paid { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = PaymentStore::open(&mut pool, session)?;

        let payment = store.mark_paid(id)?;

        success(format!(
            "Marked as paid: {} ({})",
            payment.title,
            format_amount(payment.amount)
        ));

        let _ = pmlog(
            &pool.conn,
            "paid",
            &payment.id,
            &format!("Marked '{}' as paid", payment.title),
        );
    }

    Ok(())
}
