use crate::auth::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::PaymentStore;
use crate::db::log::pmlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        status,
        search,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = PaymentStore::open(&mut pool, session)?;

        ExportLogic::export(
            &mut store,
            format,
            file,
            range,
            *status,
            search.as_deref().unwrap_or(""),
            *force,
        )?;

        let _ = pmlog(
            &pool.conn,
            "export",
            file,
            &format!("{} export", format.as_str()),
        );
    }
    Ok(())
}
