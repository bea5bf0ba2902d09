use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `payments` table has a `notes` column.
fn payments_has_notes_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('payments')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "notes" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `users` table (local auth backend).
fn ensure_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         TEXT PRIMARY KEY,
            email      TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `payments` table with the modern schema.
///
/// Ownership is a single `owner_id` column: update/delete must always
/// filter on both id and owner_id, there is no row-level security below
/// the query layer.
fn create_payments_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS payments (
            id         TEXT PRIMARY KEY,
            owner_id   TEXT NOT NULL,
            title      TEXT NOT NULL,
            amount     TEXT NOT NULL,
            due_date   TEXT NOT NULL,
            status     TEXT NOT NULL DEFAULT 'Pending' CHECK(status IN ('Pending','Paid')),
            notes      TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_payments_owner_due ON payments(owner_id, due_date);
        CREATE INDEX IF NOT EXISTS idx_payments_owner_status ON payments(owner_id, status);
        "#,
    )?;
    Ok(())
}

/// Migrate the legacy `payments_pm2025` table (split ownership columns)
/// into the modern `payments` schema. The two historical owner columns
/// `user_id` and `clerk_user_id` collapse into the single `owner_id`.
fn migrate_legacy_payments(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "payments_pm2025")? {
        return Ok(());
    }

    warning("Legacy payments_pm2025 table detected — migrating to modern schema...");

    conn.execute_batch(
        r#"
        PRAGMA foreign_keys=OFF;
        BEGIN;

        INSERT OR IGNORE INTO payments
            (id, owner_id, title, amount, due_date, status, notes, created_at, updated_at)
        SELECT
            id,
            COALESCE(user_id, clerk_user_id),
            title,
            CAST(amount AS TEXT),
            due_date,
            status,
            notes,
            created_at,
            updated_at
        FROM payments_pm2025
        WHERE COALESCE(user_id, clerk_user_id) IS NOT NULL;

        DROP TABLE payments_pm2025;

        COMMIT;
        PRAGMA foreign_keys=ON;
        "#,
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', 'payments_pm2025',
                 'Consolidated legacy table into payments (owner_id)')",
        [],
    )?;

    success("Legacy payments migrated into 'payments'.");
    Ok(())
}

fn backup_before_migration(db_path: &str) -> Result<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_migration.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let backup_path = std::path::Path::new(db_path)
        .parent()
        .unwrap()
        .join(&backup_name);

    let file = File::create(&backup_path).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::new(
            e.kind(),
            format!("Backup failed (create): {}", e),
        )))
    })?;

    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (start_file): {}",
            e
        ))))
    })?;

    let db_content = fs::read(db_path).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (read): {}",
            e
        ))))
    })?;

    zip.write_all(&db_content).map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (write_all): {}",
            e
        ))))
    })?;

    zip.finish().map_err(|e| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed (finish): {}",
            e
        ))))
    })?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Add `notes` to databases created before the column existed.
fn migrate_add_notes_column(conn: &Connection) -> Result<(), Error> {
    let version = "20250914_0007_add_payment_notes";

    // 1) Already applied?
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if payments_has_notes_column(conn)? {
        // Column already present (fresh schema) → just record the marker
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, 'notes column present')",
            [version],
        )?;
        return Ok(());
    }

    conn.execute("ALTER TABLE payments ADD COLUMN notes TEXT;", [])
        .map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to add 'notes' column: {}", e)),
            )
        })?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added notes to payments')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'notes' to payments table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Detect legacy schema (pre-CLI, split ownership columns)
    let is_legacy_schema = table_exists(conn, "payments_pm2025")?;

    // 3) If legacy → perform PRE-MIGRATION BACKUP
    if is_legacy_schema {
        warning("Legacy schema detected — creating safety backup before migration...");

        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if !db_path.is_empty() {
            backup_before_migration(&db_path)?;
        } else {
            warning("Could not determine DB path — backup skipped.");
        }
    }

    // 4) Modern tables + indices
    ensure_users_table(conn)?;

    let payments_exists = table_exists(conn, "payments")?;
    if !payments_exists {
        create_payments_table(conn)?;
        success("Created payments table (modern schema).");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_payments_owner_due ON payments(owner_id, due_date);
            CREATE INDEX IF NOT EXISTS idx_payments_owner_status ON payments(owner_id, status);
            "#,
        )?;

        migrate_add_notes_column(conn)?;
    }

    // 5) Fold legacy rows into the modern table
    migrate_legacy_payments(conn)?;

    Ok(())
}
