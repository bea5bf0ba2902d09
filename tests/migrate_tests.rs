//! Migration engine tests: the legacy `payments_pm2025` table (with its
//! split user_id / clerk_user_id ownership columns) must fold into the
//! modern `payments` schema under a single owner_id.

use rpayminder::db::initialize::init_db;
use rpayminder::db::queries::list_payments;
use std::env;
use std::path::PathBuf;

fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpayminder.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

fn create_legacy_table(conn: &rusqlite::Connection) {
    conn.execute_batch(
        r#"
        CREATE TABLE payments_pm2025 (
            id            TEXT PRIMARY KEY,
            user_id       TEXT,
            clerk_user_id TEXT,
            user_email    TEXT,
            title         TEXT NOT NULL,
            amount        NUMERIC NOT NULL,
            due_date      TEXT NOT NULL,
            status        TEXT NOT NULL,
            notes         TEXT,
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        );
        "#,
    )
    .expect("create legacy table");
}

#[test]
fn legacy_table_folds_into_modern_schema() {
    let db_path = setup_test_db("migrate_legacy_fold");
    let conn = rusqlite::Connection::open(&db_path).expect("open db");

    create_legacy_table(&conn);

    // one row per historical auth variant, same user
    conn.execute(
        "INSERT INTO payments_pm2025
         (id, user_id, clerk_user_id, title, amount, due_date, status, notes, created_at, updated_at)
         VALUES
         ('11111111-aaaa-bbbb-cccc-000000000001', 'owner-a', NULL,
          'Rent', 1200.5, '2026-08-10', 'Pending', NULL,
          '2026-03-01T10:00:00+00:00', '2026-03-01T10:00:00+00:00')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO payments_pm2025
         (id, user_id, clerk_user_id, title, amount, due_date, status, notes, created_at, updated_at)
         VALUES
         ('11111111-aaaa-bbbb-cccc-000000000002', NULL, 'owner-a',
          'Internet', 49.9, '2026-08-20', 'Paid', 'fiber',
          '2026-03-02T10:00:00+00:00', '2026-03-05T10:00:00+00:00')",
        [],
    )
    .unwrap();

    init_db(&conn).expect("migrations");

    // legacy table is gone
    let legacy_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='payments_pm2025'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(legacy_count, 0);

    // both ownership variants collapsed into owner_id
    let payments = list_payments(&conn, "owner-a").expect("list after migration");
    assert_eq!(payments.len(), 2);

    let rent = payments.iter().find(|p| p.title == "Rent").unwrap();
    assert!((rent.amount - 1200.5).abs() < 1e-9);
    assert!(rent.status.is_pending());

    let internet = payments.iter().find(|p| p.title == "Internet").unwrap();
    assert!(internet.status.is_paid());
    assert_eq!(internet.notes.as_deref(), Some("fiber"));

    // migration marker landed in the audit log
    let marker: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied' AND target = 'payments_pm2025'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(marker, 1);
}

#[test]
fn migrations_are_idempotent() {
    let db_path = setup_test_db("migrate_idempotent");
    let conn = rusqlite::Connection::open(&db_path).expect("open db");

    init_db(&conn).expect("first run");
    init_db(&conn).expect("second run");

    // notes marker recorded once
    let markers: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'
             AND target = '20250914_0007_add_payment_notes'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(markers <= 1);
}

#[test]
fn orphan_legacy_rows_are_dropped() {
    let db_path = setup_test_db("migrate_orphan_rows");
    let conn = rusqlite::Connection::open(&db_path).expect("open db");

    create_legacy_table(&conn);

    // a row with no ownership information at all
    conn.execute(
        "INSERT INTO payments_pm2025
         (id, user_id, clerk_user_id, title, amount, due_date, status, notes, created_at, updated_at)
         VALUES
         ('11111111-aaaa-bbbb-cccc-000000000003', NULL, NULL,
          'Ghost', 1.0, '2026-08-10', 'Pending', NULL,
          '2026-03-01T10:00:00+00:00', '2026-03-01T10:00:00+00:00')",
        [],
    )
    .unwrap();

    init_db(&conn).expect("migrations");

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM payments", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}
