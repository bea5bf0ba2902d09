use crate::auth::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::Engine;
use crate::core::store::PaymentStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::payment::Payment;
use crate::ui::messages::header;
use crate::utils::colors::{RED, RESET, YELLOW};
use crate::utils::date;
use crate::utils::format_amount;

/// Reminders view: overdue payments plus payments due within the
/// seven-day window. Computed on demand, nothing is scheduled.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if matches!(cmd, Commands::Due) {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = PaymentStore::open(&mut pool, session)?;

        let today = date::today();
        let view = Engine::build_reminders(store.list()?, today);

        header("Payment Reminders");
        println!(
            "Overdue: {}{}{} | Due this week: {}{}{} | Total: {}\n",
            RED,
            view.overdue.len(),
            RESET,
            YELLOW,
            view.upcoming.len(),
            RESET,
            view.total()
        );

        if view.total() == 0 {
            println!("🎉 All caught up: nothing due in the next 7 days.");
            return Ok(());
        }

        if !view.overdue.is_empty() {
            println!("{}OVERDUE:{}", RED, RESET);
            for p in &view.overdue {
                print_reminder(p, today);
            }
            println!();
        }

        if !view.upcoming.is_empty() {
            println!("{}DUE THIS WEEK:{}", YELLOW, RESET);
            for p in &view.upcoming {
                print_reminder(p, today);
            }
        }
    }
    Ok(())
}

fn print_reminder(payment: &Payment, today: chrono::NaiveDate) {
    let days = (payment.due_date - today).num_days();
    let when = match days {
        d if d < 0 => format!("{} day(s) late", -d),
        0 => "due today".to_string(),
        d => format!("due in {} day(s)", d),
    };

    println!(
        "- {} | {} | {} | {} ({})",
        payment.short_id(),
        payment.title,
        format_amount(payment.amount),
        payment.due_date_str(),
        when,
    );
}
