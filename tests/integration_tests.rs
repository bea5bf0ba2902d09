use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_payment, date_from_today, init_db_with_user, rpm, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rpm()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_signup_login_whoami_logout() {
    let db_path = setup_test_db("signup_login_whoami");

    rpm()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rpm()
        .args(["--db", &db_path, "signup", "alice@example.com"])
        .assert()
        .success()
        .stdout(contains("alice@example.com"));

    rpm()
        .args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("alice@example.com"));

    rpm()
        .args(["--db", &db_path, "logout"])
        .assert()
        .success()
        .stdout(contains("Signed out"));

    rpm()
        .args(["--db", &db_path, "whoami"])
        .assert()
        .success()
        .stdout(contains("Not signed in"));

    // login again with the existing account
    rpm()
        .args(["--db", &db_path, "login", "alice@example.com"])
        .assert()
        .success()
        .stdout(contains("Signed in as alice@example.com"));
}

#[test]
fn test_signup_twice_fails() {
    let db_path = setup_test_db("signup_twice");
    init_db_with_user(&db_path, "bob@example.com");

    rpm()
        .args(["--db", &db_path, "signup", "bob@example.com"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_store_commands_require_login() {
    let db_path = setup_test_db("requires_login");

    rpm()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // no session → the accessor refuses before touching the store
    rpm()
        .args([
            "--db",
            &db_path,
            "add",
            "Rent",
            "--amount",
            "1200",
            "--due",
            &date_from_today(3),
        ])
        .assert()
        .failure()
        .stderr(contains("Not signed in"));
}

#[test]
fn test_add_and_list_dashboard() {
    let db_path = setup_test_db("add_and_list");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "Rent", "1200", &date_from_today(3));
    add_payment(&db_path, "Internet", "49.90", &date_from_today(20));

    rpm()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Rent"))
        .stdout(contains("Internet"))
        .stdout(contains("Total: 2 | Pending: 2 | Overdue: 0"))
        .stdout(contains("$1249.90"));
}

#[test]
fn test_validation_rejects_empty_title() {
    let db_path = setup_test_db("validation_title");
    init_db_with_user(&db_path, "alice@example.com");

    rpm()
        .args([
            "--db",
            &db_path,
            "add",
            "",
            "--amount",
            "10",
            "--due",
            &date_from_today(1),
        ])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn test_validation_rejects_negative_amount() {
    let db_path = setup_test_db("validation_amount");
    init_db_with_user(&db_path, "alice@example.com");

    rpm()
        .args([
            "--db",
            &db_path,
            "add",
            "Rent",
            "--amount",
            "-5",
            "--due",
            &date_from_today(1),
        ])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn test_due_today_is_due_soon_not_overdue() {
    let db_path = setup_test_db("due_today_boundary");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "Electricity", "80", &date_from_today(0));

    // due today → in the due_soon bucket
    rpm()
        .args(["--db", &db_path, "list", "--status", "due_soon"])
        .assert()
        .success()
        .stdout(contains("Electricity"));

    // and NOT overdue (overdue requires strictly before today)
    rpm()
        .args(["--db", &db_path, "list", "--status", "overdue"])
        .assert()
        .success()
        .stdout(contains("Electricity").not());
}

#[test]
fn test_due_in_seven_days_not_due_soon() {
    let db_path = setup_test_db("due_seven_boundary");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "Water", "30", &date_from_today(7));

    // exactly 7 days out is excluded (upper bound exclusive)
    rpm()
        .args(["--db", &db_path, "list", "--status", "due_soon"])
        .assert()
        .success()
        .stdout(contains("Water").not());

    rpm()
        .args(["--db", &db_path, "list", "--status", "pending"])
        .assert()
        .success()
        .stdout(contains("Water"));
}

#[test]
fn test_mark_paid_moves_to_history() {
    let db_path = setup_test_db("paid_to_history");
    init_db_with_user(&db_path, "alice@example.com");

    let id = add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    // starts in the due_soon bucket and counted as pending
    rpm()
        .args(["--db", &db_path, "list", "--status", "due_soon"])
        .assert()
        .success()
        .stdout(contains("Rent"))
        .stdout(contains("Pending: 1"));

    rpm()
        .args(["--db", &db_path, "paid", &id])
        .assert()
        .success()
        .stdout(contains("Marked as paid"));

    // gone from the pending-derived buckets
    rpm()
        .args(["--db", &db_path, "list", "--status", "pending"])
        .assert()
        .success()
        .stdout(contains("Rent").not())
        .stdout(contains("Pending: 0"));

    // appears in the current month's history with totals
    let month = chrono::Local::now().format("%Y-%m").to_string();
    rpm()
        .args(["--db", &db_path, "history", "--month", &month])
        .assert()
        .success()
        .stdout(contains("Rent"))
        .stdout(contains("Total payments: 1"))
        .stdout(contains("$1200.00"));
}

#[test]
fn test_edit_updates_fields() {
    let db_path = setup_test_db("edit_updates");
    init_db_with_user(&db_path, "alice@example.com");

    let id = add_payment(&db_path, "Gym", "25", &date_from_today(5));

    rpm()
        .args([
            "--db", &db_path, "edit", &id, "--title", "Gym membership", "--amount", "29.90",
        ])
        .assert()
        .success()
        .stdout(contains("Payment updated"));

    rpm()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Gym membership"))
        .stdout(contains("$29.90"));
}

#[test]
fn test_delete_with_confirmation_flag() {
    let db_path = setup_test_db("delete_payment");
    init_db_with_user(&db_path, "alice@example.com");

    let id = add_payment(&db_path, "Netflix", "15.99", &date_from_today(10));

    rpm()
        .args(["--db", &db_path, "del", &id, "-y"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    rpm()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Netflix").not())
        .stdout(contains("Total: 0"));
}

#[test]
fn test_delete_non_owned_payment_is_not_found() {
    let db_path = setup_test_db("delete_non_owned");
    init_db_with_user(&db_path, "alice@example.com");

    let id = add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    // second account takes over the session
    rpm()
        .args(["--db", &db_path, "signup", "mallory@example.com"])
        .assert()
        .success();

    // alice's record is invisible to mallory's delete
    rpm()
        .args(["--db", &db_path, "del", &id, "-y"])
        .assert()
        .failure()
        .stderr(contains("Payment not found"));

    // and alice's collection is unchanged
    rpm()
        .args(["--db", &db_path, "login", "alice@example.com"])
        .assert()
        .success();

    rpm()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Rent"))
        .stdout(contains("Total: 1"));
}

#[test]
fn test_search_filters_by_title_and_notes() {
    let db_path = setup_test_db("search_filter");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    rpm()
        .args([
            "--db",
            &db_path,
            "add",
            "Credit card",
            "--amount",
            "300",
            "--due",
            &date_from_today(5),
            "--notes",
            "VISA statement",
        ])
        .assert()
        .success();

    // case-insensitive match on title
    rpm()
        .args(["--db", &db_path, "list", "--search", "rent"])
        .assert()
        .success()
        .stdout(contains("Rent"))
        .stdout(contains("Credit card").not());

    // match on notes
    rpm()
        .args(["--db", &db_path, "list", "--search", "visa"])
        .assert()
        .success()
        .stdout(contains("Credit card"))
        .stdout(contains("Rent").not());
}

#[test]
fn test_due_shows_overdue_and_upcoming() {
    let db_path = setup_test_db("due_reminders");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "Old bill", "50", &date_from_today(-3));
    add_payment(&db_path, "Soon bill", "60", &date_from_today(2));
    add_payment(&db_path, "Far bill", "70", &date_from_today(30));

    rpm()
        .args(["--db", &db_path, "due"])
        .assert()
        .success()
        .stdout(contains("Old bill"))
        .stdout(contains("Soon bill"))
        .stdout(contains("Far bill").not())
        .stdout(contains("3 day(s) late"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db_with_user(&db_path, "alice@example.com");

    let id = add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    rpm()
        .args(["--db", &db_path, "paid", &id])
        .assert()
        .success();

    rpm()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("signup"))
        .stdout(contains("add"))
        .stdout(contains("paid"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_check");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    rpm()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total payments"));

    rpm()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}
