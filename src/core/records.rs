//! Record administration: the few in-place mutations the punch log allows
//! besides the lunch one-shot (observation, paid-leave flag, soft delete).

use crate::db::log::{self, LogAction};
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::utils::clock::Clock;
use rusqlite::Connection;

pub fn set_observation(
    conn: &Connection,
    record_id: i64,
    text: &str,
    actor: &str,
) -> AppResult<()> {
    if !store::set_observation(conn, record_id, text)? {
        return Err(AppError::NotFound(format!(
            "Registro {record_id} no encontrado"
        )));
    }
    log::audit(
        conn,
        LogAction::CommentAdded,
        &format!("Comentario en registro {record_id}"),
        actor,
    );
    Ok(())
}

pub fn set_paid_leave(
    conn: &Connection,
    record_id: i64,
    flag: bool,
    actor: &str,
) -> AppResult<()> {
    if !store::set_paid_leave(conn, record_id, flag)? {
        return Err(AppError::NotFound(format!(
            "Registro {record_id} no encontrado"
        )));
    }
    log::audit(
        conn,
        LogAction::PaidLeaveChanged,
        &format!("Licencia remunerada = {flag} en registro {record_id}"),
        actor,
    );
    Ok(())
}

/// Soft delete: the record drops out of every read but stays in the table
/// until an explicit admin purge (out of this core's scope).
pub fn soft_delete(
    conn: &Connection,
    clock: &dyn Clock,
    record_id: i64,
    actor: &str,
) -> AppResult<()> {
    if !store::soft_delete(conn, record_id, clock.now_utc())? {
        return Err(AppError::NotFound(format!(
            "Registro {record_id} no encontrado"
        )));
    }
    log::audit(
        conn,
        LogAction::RecordDeleted,
        &format!("Registro {record_id} eliminado"),
        actor,
    );
    Ok(())
}
