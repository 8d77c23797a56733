//! Lunch-edit guard: the deduction is tunable at most once per ENTRADA,
//! only while the pair is still editable, within the configured bound.

use crate::config::Config;
use crate::db::log::{self, LogAction};
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::utils::time::format_minutes;
use regex::Regex;
use rusqlite::Connection;
use std::sync::LazyLock;

static HHMM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-1][0-9]|2[0-3]):([0-5][0-9])$").unwrap());

/// Update an ENTRADA's lunch minutes from an "HH:MM" value.
///
/// Preconditions, first failure wins:
/// 1. record exists and is an ENTRADA;
/// 2. value parses as HH:MM within 0..=max;
/// 3. the lunch has not been edited before.
///
/// The write flips lunch_edited in the same statement, so the false→true
/// transition can never fire twice even under a concurrent edit.
pub fn update_lunch_minutes(
    conn: &Connection,
    cfg: &Config,
    record_id: i64,
    value: &str,
    actor: &str,
) -> AppResult<i32> {
    let rec = store::get_record(conn, record_id)?
        .ok_or_else(|| AppError::NotFound(format!("Registro {record_id} no encontrado")))?;

    if !rec.kind.is_entrada() {
        return Err(AppError::Validation(
            "Solo se puede editar en registros de ENTRADA".to_string(),
        ));
    }

    let caps = HHMM_RE
        .captures(value.trim())
        .ok_or_else(|| AppError::Validation("Formato inválido. Use HH:MM".to_string()))?;
    let hours: i32 = caps[1].parse().unwrap_or(0);
    let mins: i32 = caps[2].parse().unwrap_or(0);
    let total = hours * 60 + mins;

    if total > cfg.max_lunch_minutes {
        return Err(AppError::Validation(format!(
            "El tiempo debe estar entre 00:00 y {}",
            format_minutes(cfg.max_lunch_minutes as i64)
        )));
    }

    if rec.lunch_edited {
        return Err(AppError::Conflict(
            "El tiempo de almuerzo ya fue editado anteriormente".to_string(),
        ));
    }

    // Conditional write: loses against a concurrent first edit.
    if !store::try_update_lunch(conn, record_id, total)? {
        return Err(AppError::Conflict(
            "El tiempo de almuerzo ya fue editado anteriormente".to_string(),
        ));
    }

    log::audit(
        conn,
        LogAction::LunchUpdated,
        &format!("Almuerzo del registro {record_id} actualizado a {value}"),
        actor,
    );
    Ok(total)
}
