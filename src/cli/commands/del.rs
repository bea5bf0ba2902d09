use crate::auth::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::PaymentStore;
use crate::db::log::pmlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        //
        // Confirmation prompt
        //
        if !yes {
            let prompt = format!("Delete payment {}? This action is irreversible.", id);
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = PaymentStore::open(&mut pool, session)?;

        store.delete(id)?;

        success(format!("Payment {} has been deleted.", id));

        let _ = pmlog(&pool.conn, "del", id, "Payment deleted");
    }

    Ok(())
}
