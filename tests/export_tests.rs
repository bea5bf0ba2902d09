use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_payment, date_from_today, init_db_with_user, rpm, setup_test_db, temp_out};

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "Rent", "1200", &date_from_today(3));
    add_payment(&db_path, "Internet", "49.90", &date_from_today(20));

    let out = temp_out("export_csv_all", "csv");

    rpm()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("title,amount,due_date,status,notes,created_at"));
    assert!(content.contains("Rent"));
    assert!(content.contains("Internet"));
    assert!(content.contains("1200.00"));
}

#[test]
fn test_export_json_with_status_filter() {
    let db_path = setup_test_db("export_json_status");
    init_db_with_user(&db_path, "alice@example.com");

    let id = add_payment(&db_path, "Rent", "1200", &date_from_today(3));
    add_payment(&db_path, "Internet", "49.90", &date_from_today(20));

    rpm()
        .args(["--db", &db_path, "paid", &id])
        .assert()
        .success();

    let out = temp_out("export_json_status", "json");

    rpm()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--status", "paid",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("Rent"));
    assert!(content.contains("\"status\": \"Paid\""));
    assert!(!content.contains("Internet"));
}

#[test]
fn test_export_csv_range_by_due_date() {
    let db_path = setup_test_db("export_csv_range");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "August bill", "10", "2026-08-05");
    add_payment(&db_path, "September bill", "20", "2026-09-05");

    let out = temp_out("export_csv_range", "csv");

    rpm()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2026-08",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("August bill"));
    assert!(!content.contains("September bill"));
}

#[test]
fn test_export_xlsx_creates_file() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    let out = temp_out("export_xlsx", "xlsx");

    rpm()
        .args([
            "--db", &db_path, "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("exported xlsx missing");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_pdf_creates_document() {
    let db_path = setup_test_db("export_pdf");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    let out = temp_out("export_pdf", "pdf");

    rpm()
        .args(["--db", &db_path, "export", "--format", "pdf", "--file", &out])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("exported pdf missing");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_relative_path_is_rejected() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    rpm()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_selection_warns_without_file() {
    let db_path = setup_test_db("export_empty_selection");
    init_db_with_user(&db_path, "alice@example.com");

    add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    let out = temp_out("export_empty_selection", "csv");

    // nothing is Paid yet → empty selection, no file written
    rpm()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--status", "paid",
        ])
        .assert()
        .success()
        .stdout(contains("No payments found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_receipt_for_payment() {
    let db_path = setup_test_db("receipt_payment");
    init_db_with_user(&db_path, "alice@example.com");

    let id = add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    let out = temp_out("receipt_payment", "pdf");

    rpm()
        .args(["--db", &db_path, "receipt", &id, "--file", &out])
        .assert()
        .success()
        .stdout(contains("Receipt export completed"));

    let bytes = fs::read(&out).expect("receipt missing");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_receipt_for_unknown_id_fails() {
    let db_path = setup_test_db("receipt_unknown");
    init_db_with_user(&db_path, "alice@example.com");

    let out = temp_out("receipt_unknown", "pdf");

    rpm()
        .args([
            "--db",
            &db_path,
            "receipt",
            "00000000-0000-0000-0000-000000000000",
            "--file",
            &out,
        ])
        .assert()
        .failure()
        .stderr(contains("Payment not found"));
}

#[test]
fn test_history_csv_and_pdf_report() {
    let db_path = setup_test_db("history_exports");
    init_db_with_user(&db_path, "alice@example.com");

    let id = add_payment(&db_path, "Rent", "1200", &date_from_today(3));
    add_payment(&db_path, "Internet", "49.90", &date_from_today(20));

    rpm()
        .args(["--db", &db_path, "paid", &id])
        .assert()
        .success();

    let month = chrono::Local::now().format("%Y-%m").to_string();
    let csv_out = temp_out("history_exports", "csv");
    let pdf_out = temp_out("history_exports", "pdf");

    rpm()
        .args([
            "--db", &db_path, "history", "--month", &month, "--csv", &csv_out, "--pdf", &pdf_out,
        ])
        .assert()
        .success();

    // CSV holds only the paid record
    let content = fs::read_to_string(&csv_out).expect("history csv missing");
    assert!(content.contains("Rent"));
    assert!(!content.contains("Internet"));

    // the report is a PDF document
    let bytes = fs::read(&pdf_out).expect("history pdf missing");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_history_lists_available_months() {
    let db_path = setup_test_db("history_months");
    init_db_with_user(&db_path, "alice@example.com");

    let id = add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    // no history yet
    rpm()
        .args(["--db", &db_path, "history", "--months"])
        .assert()
        .success()
        .stdout(contains("No payment history yet"));

    rpm()
        .args(["--db", &db_path, "paid", &id])
        .assert()
        .success();

    let month = chrono::Local::now().format("%Y-%m").to_string();
    rpm()
        .args(["--db", &db_path, "history", "--months"])
        .assert()
        .success()
        .stdout(contains(month));
}

#[test]
fn test_history_excludes_other_months() {
    let db_path = setup_test_db("history_other_month");
    init_db_with_user(&db_path, "alice@example.com");

    let id = add_payment(&db_path, "Rent", "1200", &date_from_today(3));

    rpm()
        .args(["--db", &db_path, "paid", &id])
        .assert()
        .success();

    // a month with no history: paid timestamps are "now", so last year
    // is guaranteed empty
    let last_year = (chrono::Local::now().date_naive() - chrono::Duration::days(365))
        .format("%Y-%m")
        .to_string();

    rpm()
        .args(["--db", &db_path, "history", "--month", &last_year])
        .assert()
        .success()
        .stdout(contains("Total payments: 0"))
        .stdout(contains("Rent").not());
}
