use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) USERS / PAYMENTS
    //
    let users: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, users, RESET);

    let total: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM payments", [], |row| row.get(0))?;
    let pending: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM payments WHERE status = 'Pending'",
        [],
        |row| row.get(0),
    )?;
    let paid: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM payments WHERE status = 'Paid'",
        [],
        |row| row.get(0),
    )?;

    println!(
        "{}• Total payments:{} {}{}{}  (pending: {}, paid: {})",
        CYAN, RESET, GREEN, total, RESET, pending, paid
    );

    //
    // 3) DUE DATE RANGE
    //
    let first_due: Option<String> = pool
        .conn
        .query_row(
            "SELECT due_date FROM payments ORDER BY due_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_due: Option<String> = pool
        .conn
        .query_row(
            "SELECT due_date FROM payments ORDER BY due_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_due.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_due.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Due date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
