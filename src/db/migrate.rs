use crate::errors::AppResult;
use rusqlite::Connection;

/// Ensure the `time_records` table exists with the current schema.
fn ensure_time_records(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_records (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id    INTEGER NOT NULL,
            employee_name  TEXT NOT NULL DEFAULT '',
            kind           TEXT NOT NULL CHECK(kind IN ('ENTRADA','SALIDA')),
            timestamp      TEXT NOT NULL,
            fecha          TEXT NOT NULL,
            dia            TEXT NOT NULL,
            hora           TEXT NOT NULL,
            lunch_minutes  INTEGER,
            lunch_edited   INTEGER NOT NULL DEFAULT 0,
            observation    TEXT NOT NULL DEFAULT '',
            paid_leave     INTEGER NOT NULL DEFAULT 0,
            deleted_at     TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_records_employee_ts
            ON time_records(employee_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_records_kind_ts
            ON time_records(kind, timestamp);
        "#,
    )?;
    Ok(())
}

/// Ensure the `employees` directory table exists.
fn ensure_employees(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            cedula     TEXT NOT NULL UNIQUE,
            role       TEXT NOT NULL DEFAULT 'employee'
                       CHECK(role IN ('employee','admin','master')),
            password   TEXT NOT NULL DEFAULT '',
            blocked    INTEGER NOT NULL DEFAULT 0,
            deleted_at TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Ensure the `activity_log` audit table exists.
fn ensure_activity_log(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS activity_log (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            date    TEXT NOT NULL,
            action  TEXT NOT NULL,
            details TEXT NOT NULL DEFAULT '',
            actor   TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Check if `time_records` has a given column (for upgrades from older DBs).
fn records_has_column(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('time_records')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for c in cols {
        if c? == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Early databases predate the paid_leave flag; add it in place.
fn migrate_add_paid_leave(conn: &Connection) -> AppResult<()> {
    if !records_has_column(conn, "paid_leave")? {
        conn.execute_batch(
            "ALTER TABLE time_records ADD COLUMN paid_leave INTEGER NOT NULL DEFAULT 0;",
        )?;
    }
    Ok(())
}

/// Run all pending migrations. Safe to call on every start.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_time_records(conn)?;
    ensure_employees(conn)?;
    ensure_activity_log(conn)?;
    migrate_add_paid_leave(conn)?;
    Ok(())
}
