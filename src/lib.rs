//! rPayMinder library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use auth::AuthChange;
use auth::session::Session;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: &mut Session) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Signup { .. } | Commands::Login { .. } | Commands::Logout | Commands::Whoami => {
            cli::commands::auth::handle(&cli.command, cfg, session)
        }
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, session),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, session),
        Commands::Paid { .. } => cli::commands::paid::handle(&cli.command, cfg, session),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, session),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, session),
        Commands::Due => cli::commands::due::handle(&cli.command, cfg, session),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg, session),
        Commands::Receipt { .. } => cli::commands::receipt::handle(&cli.command, cfg, session),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, session),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1) parse CLI
    let cli = Cli::parse();

    // 2) load config ONCE
    let mut cfg = Config::load();

    // 3) apply DB override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4) open the process-wide session (init: fetch current owner)
    let mut session = Session::open(&cfg)?;

    // the CLI is the only subscriber of the auth change stream
    session.subscribe(|change| match change {
        AuthChange::SignedIn(owner) => {
            messages::info(format!("Signed in as {}", owner.display_name()))
        }
        AuthChange::SignedOut => messages::info("Signed out."),
    });

    // 5) hand everything to the dispatcher
    dispatch(&cli, &cfg, &mut session)
}
