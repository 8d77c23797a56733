//! Auto-closure sweep: find ENTRADAs left open past the configured
//! thresholds and synthesize a corrective SALIDA for each.
//!
//! Intended to run opportunistically while the system is in use, not as a
//! daemon; a failed pass writes nothing and is retried on the next run.

use crate::config::Config;
use crate::db::log::{self, LogAction};
use crate::db::store;
use crate::errors::AppResult;
use crate::models::punch_record::PunchRecord;
use crate::models::record_kind::RecordKind;
use crate::utils::clock::Clock;
use crate::utils::date::{calendar_fields, local_hour};
use chrono::Duration;
use rusqlite::Connection;

/// Shift segment by entry hour-of-day in the local zone.
pub fn shift_name(hour: u32) -> &'static str {
    match hour {
        13..=18 => "Tarde",
        19..=23 | 0..=5 => "Noche",
        _ => "Mañana",
    }
}

const DAY_CHANGE_OBSERVATION: &str =
    "Cierre de cambio de dia. Para correcciones contacte al administrador.";

fn forgotten_observation(jornada: &str) -> String {
    format!(
        "Cierre por olvido de marcacion de SALIDA de jornada {jornada}. Para correcciones contacte al administrador."
    )
}

/// Close abandoned open entries; returns how many closures were written.
///
/// An entry open for at least `day_change_hours` gets the day-change
/// closure; one open for at least `forgotten_punch_hours` (but less than a
/// day) gets the forgotten-punch closure naming its shift. Both synthesize
/// the SALIDA `auto_close_offset_hours` after the original entry. Every
/// candidate is re-checked for an existing later SALIDA inside the
/// transaction, so running the sweep twice closes nothing the second time,
/// and all closures of one pass commit atomically.
pub fn sweep(conn: &mut Connection, clock: &dyn Clock, cfg: &Config) -> AppResult<usize> {
    let now = clock.now_utc();
    let candidates = store::open_entradas(conn)?;
    if candidates.is_empty() {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    let mut closed = 0;

    for entry in &candidates {
        let hours_open = (now - entry.timestamp).num_hours();
        if hours_open < cfg.forgotten_punch_hours {
            continue;
        }
        // Idempotence: a previous pass (or a real punch) may have closed it.
        if store::has_salida_after(&tx, entry.employee_id, entry.timestamp)? {
            continue;
        }

        let observation = if hours_open >= cfg.day_change_hours {
            DAY_CHANGE_OBSERVATION.to_string()
        } else {
            let jornada = shift_name(local_hour(entry.timestamp, cfg.utc_offset_minutes));
            forgotten_observation(jornada)
        };

        let exit_ts = entry.timestamp + Duration::hours(cfg.auto_close_offset_hours);
        let fields = calendar_fields(exit_ts, cfg.utc_offset_minutes);
        let exit = PunchRecord {
            id: 0,
            employee_id: entry.employee_id,
            employee_name: entry.employee_name.clone(),
            kind: RecordKind::Salida,
            timestamp: exit_ts,
            fecha: fields.fecha,
            dia: fields.dia,
            hora: fields.hora,
            lunch_minutes: None,
            lunch_edited: false,
            observation,
            paid_leave: false,
            deleted_at: None,
        };
        store::insert_record(&tx, &exit)?;
        log::audit(
            &tx,
            LogAction::AutoCierre,
            &format!("Cierre automático de ENTRADA {} a las {}", entry.id, exit.hora),
            "sistema",
        );
        closed += 1;
    }

    tx.commit()?;
    Ok(closed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pairing::compute_pairs;
    use crate::db::initialize::init_db;
    use crate::utils::clock::FixedClock;
    use chrono::{DateTime, TimeZone, Utc};

    fn setup() -> (Connection, Config) {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        (conn, Config::default())
    }

    fn insert_entrada(conn: &Connection, cfg: &Config, employee_id: i64, ts: DateTime<Utc>) -> i64 {
        let fields = calendar_fields(ts, cfg.utc_offset_minutes);
        let rec = PunchRecord {
            id: 0,
            employee_id,
            employee_name: "Ana Pérez".to_string(),
            kind: RecordKind::Entrada,
            timestamp: ts,
            fecha: fields.fecha,
            dia: fields.dia,
            hora: fields.hora,
            lunch_minutes: Some(cfg.default_lunch_minutes),
            lunch_edited: false,
            observation: String::new(),
            paid_leave: false,
            deleted_at: None,
        };
        store::insert_record(conn, &rec).unwrap()
    }

    #[test]
    fn long_open_entry_gets_day_change_closure() {
        let (mut conn, cfg) = setup();
        let now = Utc.with_ymd_and_hms(2025, 6, 3, 18, 0, 0).unwrap();
        let entry_ts = now - Duration::hours(30);
        insert_entrada(&conn, &cfg, 1, entry_ts);

        let closed = sweep(&mut conn, &FixedClock(now), &cfg).unwrap();
        assert_eq!(closed, 1);

        let records = store::list_by_employee_asc(&conn, 1).unwrap();
        assert_eq!(records.len(), 2);
        let exit = &records[1];
        assert!(exit.kind.is_salida());
        assert_eq!(exit.timestamp, entry_ts + Duration::hours(4));
        assert!(exit.observation.contains("cambio de dia"));
    }

    #[test]
    fn forgotten_entry_gets_shift_closure() {
        let (mut conn, cfg) = setup();
        let now = Utc.with_ymd_and_hms(2025, 6, 3, 18, 0, 0).unwrap();
        // 9h ago -> 09:00 UTC -> 04:00 local (UTC-5) -> Noche
        let entry_ts = now - Duration::hours(9);
        insert_entrada(&conn, &cfg, 1, entry_ts);

        let closed = sweep(&mut conn, &FixedClock(now), &cfg).unwrap();
        assert_eq!(closed, 1);

        let records = store::list_by_employee_asc(&conn, 1).unwrap();
        let exit = &records[1];
        assert_eq!(exit.timestamp, entry_ts + Duration::hours(4));
        assert!(exit.observation.contains("jornada Noche"), "{}", exit.observation);
    }

    #[test]
    fn second_sweep_closes_nothing() {
        let (mut conn, cfg) = setup();
        let now = Utc.with_ymd_and_hms(2025, 6, 3, 18, 0, 0).unwrap();
        insert_entrada(&conn, &cfg, 1, now - Duration::hours(30));
        insert_entrada(&conn, &cfg, 2, now - Duration::hours(9));

        assert_eq!(sweep(&mut conn, &FixedClock(now), &cfg).unwrap(), 2);
        assert_eq!(sweep(&mut conn, &FixedClock(now), &cfg).unwrap(), 0);
    }

    #[test]
    fn recent_entry_is_left_alone() {
        let (mut conn, cfg) = setup();
        let now = Utc.with_ymd_and_hms(2025, 6, 3, 18, 0, 0).unwrap();
        insert_entrada(&conn, &cfg, 1, now - Duration::hours(3));

        assert_eq!(sweep(&mut conn, &FixedClock(now), &cfg).unwrap(), 0);
        assert_eq!(store::list_by_employee_asc(&conn, 1).unwrap().len(), 1);
    }

    #[test]
    fn closed_entry_still_pairs_normally() {
        let (mut conn, cfg) = setup();
        let now = Utc.with_ymd_and_hms(2025, 6, 3, 18, 0, 0).unwrap();
        insert_entrada(&conn, &cfg, 1, now - Duration::hours(30));
        sweep(&mut conn, &FixedClock(now), &cfg).unwrap();

        let records = store::list_by_employee_asc(&conn, 1).unwrap();
        let pairs = compute_pairs(&records);
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].is_complete());
        // 4h span minus the 2h default lunch
        assert_eq!(pairs[0].worked, "02:00");
    }

    #[test]
    fn shift_names_by_hour() {
        assert_eq!(shift_name(8), "Mañana");
        assert_eq!(shift_name(12), "Mañana");
        assert_eq!(shift_name(13), "Tarde");
        assert_eq!(shift_name(18), "Tarde");
        assert_eq!(shift_name(19), "Noche");
        assert_eq!(shift_name(2), "Noche");
        assert_eq!(shift_name(5), "Noche");
        assert_eq!(shift_name(6), "Mañana");
    }

    #[test]
    fn real_salida_preempts_closure() {
        let (mut conn, cfg) = setup();
        let now = Utc.with_ymd_and_hms(2025, 6, 3, 18, 0, 0).unwrap();
        let entry_ts = now - Duration::hours(9);
        insert_entrada(&conn, &cfg, 1, entry_ts);

        // employee punched out normally in the meantime
        let salida_ts = entry_ts + Duration::hours(8);
        let fields = calendar_fields(salida_ts, cfg.utc_offset_minutes);
        let salida = PunchRecord {
            id: 0,
            employee_id: 1,
            employee_name: "Ana Pérez".to_string(),
            kind: RecordKind::Salida,
            timestamp: salida_ts,
            fecha: fields.fecha,
            dia: fields.dia,
            hora: fields.hora,
            lunch_minutes: None,
            lunch_edited: false,
            observation: String::new(),
            paid_leave: false,
            deleted_at: None,
        };
        store::insert_record(&conn, &salida).unwrap();

        assert_eq!(sweep(&mut conn, &FixedClock(now), &cfg).unwrap(), 0);
    }
}
