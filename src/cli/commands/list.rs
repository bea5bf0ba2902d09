use crate::auth::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::{DashboardStats, Engine, classify};
use crate::core::store::PaymentStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::payment::Payment;
use crate::utils::colors::{RESET, color_for_class};
use crate::utils::date;
use crate::utils::format_amount;
use crate::utils::formatting::truncate;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::List {
        status,
        search,
        stats_only,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = PaymentStore::open(&mut pool, session)?;

        let today = date::today();
        let search = search.as_deref().unwrap_or("");
        let view = Engine::build_dashboard(store.list()?, today, *status, search);

        print_stats(&view.stats);

        if *stats_only {
            return Ok(());
        }

        if view.payments.is_empty() {
            if search.is_empty() && *status == crate::core::engine::StatusFilter::All {
                println!("No payments yet. Add one with 'rpayminder add'.");
            } else {
                println!("No payments match the current filters.");
            }
            return Ok(());
        }

        println!("PAYMENTS:");
        for payment in &view.payments {
            print_payment(payment, today);
        }
    }
    Ok(())
}

fn print_stats(stats: &DashboardStats) {
    println!("\n=== Payment Dashboard ===");
    println!(
        "Total: {} | Pending: {} | Overdue: {} | Pending amount: {}\n",
        stats.total,
        stats.pending,
        stats.overdue,
        format_amount(stats.total_amount)
    );
}

fn print_payment(payment: &Payment, today: chrono::NaiveDate) {
    let class = classify(payment, today);
    let color = color_for_class(class);

    let notes = payment
        .notes
        .as_deref()
        .map(|n| format!(" | {}", truncate(n, 40)))
        .unwrap_or_default();

    println!(
        "- {} | {:<24} | {:>10} | due {} | {}{}{}{}",
        payment.short_id(),
        truncate(&payment.title, 24),
        format_amount(payment.amount),
        payment.due_date_str(),
        color,
        class.label(),
        RESET,
        notes,
    );
}
