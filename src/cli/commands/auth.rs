use crate::auth::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::pmlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the identity commands: signup / login / logout / whoami.
/// All of them go through the Session; the configured backend decides
/// what each operation means.
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    match cmd {
        Commands::Signup { email } => {
            let owner = session.register(email)?;
            success(format!("Account created for {}", owner.display_name()));
            audit(cfg, "signup", owner.display_name(), "Account created");
        }

        Commands::Login { email } => {
            let owner = session.sign_in(email)?;
            audit(cfg, "login", owner.display_name(), "Signed in");
        }

        Commands::Logout => {
            let name = session
                .owner()
                .map(|o| o.display_name().to_string())
                .unwrap_or_else(|| "--".to_string());
            session.sign_out()?;
            audit(cfg, "logout", &name, "Signed out");
        }

        Commands::Whoami => match session.owner() {
            Some(owner) => info(format!("Signed in as {}", owner.display_name())),
            None => info("Not signed in."),
        },

        _ => {}
    }

    Ok(())
}

/// Best-effort audit entry: auth must keep working even when the
/// database has not been initialized yet.
fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Ok(pool) = DbPool::new(&cfg.database) {
        let _ = pmlog(&pool.conn, operation, target, message);
    }
}
