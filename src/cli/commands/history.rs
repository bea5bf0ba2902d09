use crate::auth::session::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::Engine;
use crate::core::store::PaymentStore;
use crate::db::log::pmlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportLogic, receipt};
use crate::models::payment::Payment;
use crate::utils::date::YearMonth;
use crate::utils::format_amount;
use crate::utils::formatting::truncate;
use crate::utils::table::Table;
use std::path::Path;

/// Payment history: Paid records, optionally one calendar month of them
/// (keyed by the paid date), with totals and export hooks.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::History {
        month,
        list_months,
        csv,
        pdf,
        force,
    } = cmd
    {
        let selected_month = match month {
            Some(m) => Some(YearMonth::parse(m)?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = PaymentStore::open(&mut pool, session)?;
        let payments = store.list()?;

        //
        // Month selector
        //
        if *list_months {
            let months = Engine::available_months(payments);
            if months.is_empty() {
                println!("No payment history yet.");
            } else {
                println!("Months with payment history:");
                for m in months {
                    println!("- {}  ({})", m, m.label());
                }
            }
            return Ok(());
        }

        let view = Engine::build_history(payments, selected_month);

        //
        // Summary block
        //
        let period = selected_month
            .map(|m| m.label())
            .unwrap_or_else(|| "All months".to_string());

        println!("\n=== Payment History: {} ===", period);
        println!(
            "Total payments: {} | Total amount: {}\n",
            view.total_payments,
            format_amount(view.total_amount)
        );

        if view.payments.is_empty() {
            if selected_month.is_some() {
                println!("No payments found for the selected month.");
            } else {
                println!("Start marking payments as paid to see your history here.");
            }
        } else {
            print_history_table(&view.payments);
        }

        //
        // Exports
        //
        if let Some(file) = csv {
            ExportLogic::export_selected_csv(&view.payments, file, *force)?;
            let _ = pmlog(&pool.conn, "export", file, "History CSV export");
        }

        if let Some(file) = pdf {
            receipt::generate_history_report(
                selected_month,
                view.total_payments,
                view.total_amount,
                Path::new(file),
                *force,
            )?;
            let _ = pmlog(&pool.conn, "export", file, "History PDF report");
        }
    }
    Ok(())
}

fn print_history_table(payments: &[Payment]) {
    let mut table = Table::new(&["ID", "PAYMENT", "AMOUNT", "DUE DATE", "PAID DATE", "NOTES"]);

    for p in payments {
        table.add_row(vec![
            p.short_id().to_string(),
            truncate(&p.title, 28),
            format_amount(p.amount),
            p.due_date_str(),
            p.updated_at.format("%Y-%m-%d").to_string(),
            p.notes
                .as_deref()
                .map(|n| truncate(n, 32))
                .unwrap_or_else(|| "--".to_string()),
        ]);
    }

    print!("{}", table.render());
}
