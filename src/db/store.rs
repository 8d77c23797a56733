//! Queries over the `time_records` punch log and the `employees` directory.
//! Every read filters soft-deleted rows (`deleted_at IS NULL`) and orders by
//! `timestamp, id` so equal timestamps sort consistently.

use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, Role};
use crate::models::punch_record::PunchRecord;
use crate::models::record_kind::RecordKind;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Canonical storage rendering of an instant: second precision, "Z" suffix,
/// so lexicographic order equals chronological order.
pub fn ts_to_db(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn ts_from_db(col: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                col,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(s.to_string())),
            )
        })
}

pub fn map_record(row: &Row) -> rusqlite::Result<PunchRecord> {
    let kind_str: String = row.get("kind")?;
    let kind = RecordKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidKind(kind_str.clone())),
        )
    })?;

    let ts_str: String = row.get("timestamp")?;
    let deleted_str: Option<String> = row.get("deleted_at")?;
    let deleted_at = match deleted_str {
        Some(s) => Some(ts_from_db(0, &s)?),
        None => None,
    };

    Ok(PunchRecord {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        employee_name: row.get("employee_name")?,
        kind,
        timestamp: ts_from_db(0, &ts_str)?,
        fecha: row.get("fecha")?,
        dia: row.get("dia")?,
        hora: row.get("hora")?,
        lunch_minutes: row.get("lunch_minutes")?,
        lunch_edited: row.get::<_, i64>("lunch_edited")? == 1,
        observation: row.get("observation")?,
        paid_leave: row.get::<_, i64>("paid_leave")? == 1,
        deleted_at,
    })
}

pub fn insert_record(conn: &Connection, rec: &PunchRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO time_records
            (employee_id, employee_name, kind, timestamp, fecha, dia, hora,
             lunch_minutes, lunch_edited, observation, paid_leave, deleted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            rec.employee_id,
            rec.employee_name,
            rec.kind.to_db_str(),
            ts_to_db(rec.timestamp),
            rec.fecha,
            rec.dia,
            rec.hora,
            rec.lunch_minutes,
            if rec.lunch_edited { 1 } else { 0 },
            rec.observation,
            if rec.paid_leave { 1 } else { 0 },
            rec.deleted_at.map(ts_to_db),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_record(conn: &Connection, id: i64) -> AppResult<Option<PunchRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_records WHERE id = ?1 AND deleted_at IS NULL",
    )?;
    Ok(stmt.query_row([id], map_record).optional()?)
}

/// Most recent active punch for one employee; drives the alternation rule.
pub fn latest_by_employee(conn: &Connection, employee_id: i64) -> AppResult<Option<PunchRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_records
         WHERE employee_id = ?1 AND deleted_at IS NULL
         ORDER BY timestamp DESC, id DESC
         LIMIT 1",
    )?;
    Ok(stmt.query_row([employee_id], map_record).optional()?)
}

/// Most recent active ENTRADA for one employee.
pub fn latest_entrada(conn: &Connection, employee_id: i64) -> AppResult<Option<PunchRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_records
         WHERE employee_id = ?1 AND kind = 'ENTRADA' AND deleted_at IS NULL
         ORDER BY timestamp DESC, id DESC
         LIMIT 1",
    )?;
    Ok(stmt.query_row([employee_id], map_record).optional()?)
}

pub fn list_by_employee_asc(conn: &Connection, employee_id: i64) -> AppResult<Vec<PunchRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_records
         WHERE employee_id = ?1 AND deleted_at IS NULL
         ORDER BY timestamp ASC, id ASC",
    )?;
    let rows = stmt.query_map([employee_id], map_record)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Recent records across all employees, newest first (admin dashboard view).
pub fn list_recent_desc(conn: &Connection, limit: u32) -> AppResult<Vec<PunchRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_records
         WHERE deleted_at IS NULL
         ORDER BY timestamp DESC, id DESC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map([limit], map_record)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Records within an inclusive UTC range, newest first.
pub fn list_range_desc(
    conn: &Connection,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> AppResult<Vec<PunchRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_records
         WHERE deleted_at IS NULL AND timestamp >= ?1 AND timestamp <= ?2
         ORDER BY timestamp DESC, id DESC",
    )?;
    let rows = stmt.query_map(params![ts_to_db(from), ts_to_db(to)], map_record)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Active ENTRADA rows with no later SALIDA for the same employee, newest
/// first. Candidates for the auto-closure sweep.
pub fn open_entradas(conn: &Connection) -> AppResult<Vec<PunchRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_records AS e
         WHERE e.kind = 'ENTRADA' AND e.deleted_at IS NULL
           AND NOT EXISTS (
               SELECT 1 FROM time_records AS s
               WHERE s.employee_id = e.employee_id
                 AND s.kind = 'SALIDA'
                 AND s.deleted_at IS NULL
                 AND s.timestamp > e.timestamp
           )
         ORDER BY e.timestamp DESC, e.id DESC",
    )?;
    let rows = stmt.query_map([], map_record)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// True if any active SALIDA exists for the employee after the instant.
pub fn has_salida_after(
    conn: &Connection,
    employee_id: i64,
    after: DateTime<Utc>,
) -> AppResult<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM time_records
         WHERE employee_id = ?1 AND kind = 'SALIDA'
           AND deleted_at IS NULL AND timestamp > ?2
         LIMIT 1",
    )?;
    Ok(stmt.exists(params![employee_id, ts_to_db(after)])?)
}

/// One-shot lunch write: succeeds only while lunch_edited is still false,
/// flipping it in the same statement. Returns false if the window is closed.
pub fn try_update_lunch(conn: &Connection, id: i64, minutes: i32) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE time_records
         SET lunch_minutes = ?1, lunch_edited = 1
         WHERE id = ?2 AND lunch_edited = 0 AND deleted_at IS NULL",
        params![minutes, id],
    )?;
    Ok(changed > 0)
}

/// Close the lunch-edit window without touching the stored minutes.
pub fn close_lunch_window(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE time_records SET lunch_edited = 1 WHERE id = ?1 AND deleted_at IS NULL",
        [id],
    )?;
    Ok(())
}

pub fn set_observation(conn: &Connection, id: i64, text: &str) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE time_records SET observation = ?1 WHERE id = ?2 AND deleted_at IS NULL",
        params![text, id],
    )?;
    Ok(changed > 0)
}

pub fn set_paid_leave(conn: &Connection, id: i64, flag: bool) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE time_records SET paid_leave = ?1 WHERE id = ?2 AND deleted_at IS NULL",
        params![if flag { 1 } else { 0 }, id],
    )?;
    Ok(changed > 0)
}

/// Soft delete: the row stays in the log, every read skips it from now on.
pub fn soft_delete(conn: &Connection, id: i64, at: DateTime<Utc>) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE time_records SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL",
        params![ts_to_db(at), id],
    )?;
    Ok(changed > 0)
}

// ---------------------------------------------------------------------------
// Employee directory
// ---------------------------------------------------------------------------

pub fn map_employee(row: &Row) -> rusqlite::Result<Employee> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Validation(format!("Rol inválido: {role_str}"))),
        )
    })?;
    let deleted_str: Option<String> = row.get("deleted_at")?;
    let deleted_at = match deleted_str {
        Some(s) => Some(ts_from_db(0, &s)?),
        None => None,
    };

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        cedula: row.get("cedula")?,
        role,
        blocked: row.get::<_, i64>("blocked")? == 1,
        deleted_at,
    })
}

pub fn insert_employee(
    conn: &Connection,
    name: &str,
    cedula: &str,
    role: Role,
    password: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (name, cedula, role, password) VALUES (?1, ?2, ?3, ?4)",
        params![name, cedula, role.to_db_str(), password],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_employee(conn: &Connection, id: i64) -> AppResult<Option<Employee>> {
    let mut stmt =
        conn.prepare("SELECT * FROM employees WHERE id = ?1 AND deleted_at IS NULL")?;
    Ok(stmt.query_row([id], map_employee).optional()?)
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt =
        conn.prepare("SELECT * FROM employees WHERE deleted_at IS NULL ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_employee)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_employee_blocked(conn: &Connection, id: i64, blocked: bool) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE employees SET blocked = ?1 WHERE id = ?2 AND deleted_at IS NULL",
        params![if blocked { 1 } else { 0 }, id],
    )?;
    Ok(changed > 0)
}

pub fn soft_delete_employee(conn: &Connection, id: i64, at: DateTime<Utc>) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE employees SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL",
        params![ts_to_db(at), id],
    )?;
    Ok(changed > 0)
}
