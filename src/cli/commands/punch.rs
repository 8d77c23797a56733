use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{employees, punch};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::record_kind::RecordKind;
use crate::ui::messages::{info, success};
use crate::utils::clock::SystemClock;
use chrono::{DateTime, Utc};

pub(crate) fn parse_at(at: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    match at {
        None => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|_| AppError::InvalidDate(s.clone())),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { employee, kind, at } = cmd {
        let requested =
            RecordKind::parse(kind).ok_or_else(|| AppError::InvalidKind(kind.clone()))?;
        let at = parse_at(at.as_ref())?;

        let pool = DbPool::new(&cfg.database)?;
        let employee = employees::get_employee(&pool.conn, *employee)?;

        let rec = punch::submit_punch(&pool.conn, &SystemClock, cfg, &employee, requested, at)?;

        success(format!(
            "{} registrada correctamente: {} {} a las {}",
            requested, employee.name, rec.fecha, rec.hora
        ));
        info(format!("Próxima acción: {}", requested.opposite()));
    }
    Ok(())
}
