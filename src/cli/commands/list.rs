use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::models::punch_record::PunchRecord;
use crate::ui::messages::info;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

/// Turn a local `YYYY-MM-DD` date into the UTC instant of its start (or end
/// with `end_of_day`) under the configured offset.
fn day_bound(date: &str, utc_offset_minutes: i32, end_of_day: bool) -> AppResult<DateTime<Utc>> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date.to_string()))?;
    let time = if end_of_day {
        NaiveTime::from_hms_opt(23, 59, 59).unwrap()
    } else {
        NaiveTime::from_hms_opt(0, 0, 0).unwrap()
    };
    let offset = FixedOffset::east_opt(utc_offset_minutes * 60)
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    let local = offset
        .from_local_datetime(&day.and_time(time))
        .single()
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    Ok(local.with_timezone(&Utc))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        employee,
        from,
        to,
        limit,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let mut rows: Vec<PunchRecord> = if from.is_some() || to.is_some() {
            let lo = match from {
                Some(d) => day_bound(d, cfg.utc_offset_minutes, false)?,
                None => Utc.timestamp_opt(0, 0).unwrap(),
            };
            let hi = match to {
                Some(d) => day_bound(d, cfg.utc_offset_minutes, true)?,
                None => Utc::now(),
            };
            store::list_range_desc(&pool.conn, lo, hi)?
        } else {
            store::list_recent_desc(&pool.conn, u32::MAX)?
        };

        if let Some(emp) = employee {
            rows.retain(|r| r.employee_id == *emp);
        }
        rows.truncate(*limit as usize);

        if rows.is_empty() {
            info("Sin registros.");
            return Ok(());
        }

        for r in &rows {
            println!(
                "#{:<5} {} {:<9} {} {:<7} {:<20} {}",
                r.id,
                r.fecha,
                r.dia,
                r.hora,
                r.kind,
                r.employee_name,
                r.observation,
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn day_bounds_honor_the_offset() {
        // Midnight in Bogotá (-300) is 05:00 UTC.
        let lo = day_bound("2025-06-02", -300, false).unwrap();
        assert_eq!(lo.hour(), 5);
        let hi = day_bound("2025-06-02", -300, true).unwrap();
        assert_eq!(hi.hour(), 4);
        assert!(lo < hi);
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(matches!(
            day_bound("02/06/2025", -300, false).unwrap_err(),
            AppError::InvalidDate(_)
        ));
    }
}
