use crate::auth::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::PaymentStore;
use crate::db::log::pmlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::receipt::generate_receipt;
use std::io;
use std::path::Path;

/// Generate a PDF receipt for one payment.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Receipt { id, file, force } = cmd {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = PaymentStore::open(&mut pool, session)?;

        let payment = store.get(id)?;

        generate_receipt(&payment, path, *force)?;

        let _ = pmlog(
            &pool.conn,
            "export",
            file,
            &format!("Receipt for '{}'", payment.title),
        );
    }

    Ok(())
}
