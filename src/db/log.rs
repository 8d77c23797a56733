//! Activity audit log. Writes are fire-and-forget: a failed audit insert
//! must never fail the operation that triggered it.

use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{Connection, params};

#[derive(Debug, Clone, Copy)]
pub enum LogAction {
    RegistroEntrada,
    RegistroSalida,
    AutoCierre,
    LunchUpdated,
    CommentAdded,
    RecordDeleted,
    PaidLeaveChanged,
    EmployeeAdded,
    EmployeeBlocked,
    EmployeeUnblocked,
    EmployeeDeleted,
    Export,
}

impl LogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogAction::RegistroEntrada => "REGISTRO_ENTRADA",
            LogAction::RegistroSalida => "REGISTRO_SALIDA",
            LogAction::AutoCierre => "AUTO_CIERRE",
            LogAction::LunchUpdated => "LUNCH_UPDATED",
            LogAction::CommentAdded => "COMMENT_ADDED",
            LogAction::RecordDeleted => "RECORD_DELETED",
            LogAction::PaidLeaveChanged => "PAID_LEAVE_CHANGED",
            LogAction::EmployeeAdded => "EMPLOYEE_ADDED",
            LogAction::EmployeeBlocked => "EMPLOYEE_BLOCKED",
            LogAction::EmployeeUnblocked => "EMPLOYEE_UNBLOCKED",
            LogAction::EmployeeDeleted => "EMPLOYEE_DELETED",
            LogAction::Export => "EXPORT",
        }
    }
}

fn write_entry(conn: &Connection, action: LogAction, details: &str, actor: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO activity_log (date, action, details, actor)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![
        Utc::now().to_rfc3339(),
        action.as_str(),
        details,
        actor
    ])?;
    Ok(())
}

/// Record an audit event, swallowing any store failure.
pub fn audit(conn: &Connection, action: LogAction, details: &str, actor: &str) {
    let _ = write_entry(conn, action, details, actor);
}

/// Rows for the `log --print` admin view, newest first.
pub fn load_activity(conn: &Connection) -> AppResult<Vec<(String, String, String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT date, action, details, actor FROM activity_log ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
        ))
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
