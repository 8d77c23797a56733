//! Punch acceptance: the strict ENTRADA/SALIDA alternation state machine.
//!
//! The expected kind is always re-derived from the latest stored record at
//! submit time, so the same log always yields the same decision. Two truly
//! concurrent punches for one employee could still slip through (no locking,
//! same as the system this replaces); a single active session per employee
//! is assumed upstream.

use crate::config::Config;
use crate::db::log::{self, LogAction};
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::punch_record::PunchRecord;
use crate::models::record_kind::RecordKind;
use crate::utils::clock::Clock;
use crate::utils::date::calendar_fields;
use chrono::{DateTime, Utc};
use rusqlite::Connection;

/// Next required action for an employee: ENTRADA with an empty history,
/// otherwise the opposite of the latest punch.
pub fn decide_next_action(conn: &Connection, employee_id: i64) -> AppResult<RecordKind> {
    match store::latest_by_employee(conn, employee_id)? {
        None => Ok(RecordKind::Entrada),
        Some(last) => Ok(last.kind.opposite()),
    }
}

/// Accept or reject one punch request.
///
/// On acceptance the record is inserted with denormalized fecha/dia/hora
/// derived from the punch instant; an ENTRADA receives the configured
/// default lunch minutes, and a SALIDA permanently closes the lunch-edit
/// window of the ENTRADA it terminates. `at` backfills the punch instant
/// for administrative corrections; validation applies identically.
pub fn submit_punch(
    conn: &Connection,
    clock: &dyn Clock,
    cfg: &Config,
    employee: &Employee,
    requested: RecordKind,
    at: Option<DateTime<Utc>>,
) -> AppResult<PunchRecord> {
    if employee.blocked {
        return Err(AppError::Validation(
            "Usuario bloqueado. Contacte al administrador".to_string(),
        ));
    }

    let expected = decide_next_action(conn, employee.id)?;
    if requested != expected {
        return Err(AppError::Sequence { expected });
    }

    let now = at.unwrap_or_else(|| clock.now_utc());

    // A SALIDA against an ENTRADA forgotten for days would create a
    // multi-day pair; require an administrator instead.
    let open_entrada = if requested.is_salida() {
        let entrada = store::latest_entrada(conn, employee.id)?;
        if let Some(ref e) = entrada {
            let days = (now - e.timestamp).num_days();
            if days > 1 {
                return Err(AppError::Conflict(format!(
                    "Última ENTRADA fue hace {days} días ({}). Por favor contacte administrador para corregir.",
                    e.fecha
                )));
            }
        }
        entrada
    } else {
        None
    };

    let fields = calendar_fields(now, cfg.utc_offset_minutes);
    let mut rec = PunchRecord {
        id: 0,
        employee_id: employee.id,
        employee_name: employee.name.clone(),
        kind: requested,
        timestamp: now,
        fecha: fields.fecha,
        dia: fields.dia,
        hora: fields.hora,
        lunch_minutes: requested
            .is_entrada()
            .then_some(cfg.default_lunch_minutes),
        lunch_edited: false,
        observation: String::new(),
        paid_leave: false,
        deleted_at: None,
    };
    rec.id = store::insert_record(conn, &rec)?;

    // Lunch stays tunable only while the day is still open.
    if let Some(entrada) = open_entrada {
        store::close_lunch_window(conn, entrada.id)?;
    }

    let action = match requested {
        RecordKind::Entrada => LogAction::RegistroEntrada,
        RecordKind::Salida => LogAction::RegistroSalida,
    };
    log::audit(
        conn,
        action,
        &format!("Marcación {requested} registrada a las {}", rec.hora),
        &employee.name,
    );

    Ok(rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::models::employee::Role;
    use crate::utils::clock::FixedClock;
    use chrono::{Duration, TimeZone};

    fn setup() -> (Connection, Config, Employee) {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        let id = store::insert_employee(&conn, "Ana Pérez", "1234567", Role::Employee, "").unwrap();
        let employee = store::get_employee(&conn, id).unwrap().unwrap();
        (conn, Config::default(), employee)
    }

    fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    }

    #[test]
    fn empty_history_expects_entrada() {
        let (conn, _, employee) = setup();
        assert_eq!(
            decide_next_action(&conn, employee.id).unwrap(),
            RecordKind::Entrada
        );
    }

    #[test]
    fn accepted_punch_flips_expected_kind() {
        let (conn, cfg, employee) = setup();
        let clock = clock_at(2025, 6, 2, 13, 0);

        submit_punch(&conn, &clock, &cfg, &employee, RecordKind::Entrada, None).unwrap();
        assert_eq!(
            decide_next_action(&conn, employee.id).unwrap(),
            RecordKind::Salida
        );

        let later = FixedClock(clock.0 + Duration::hours(8));
        submit_punch(&conn, &later, &cfg, &employee, RecordKind::Salida, None).unwrap();
        assert_eq!(
            decide_next_action(&conn, employee.id).unwrap(),
            RecordKind::Entrada
        );
    }

    #[test]
    fn wrong_kind_is_rejected_naming_expected() {
        let (conn, cfg, employee) = setup();
        let clock = clock_at(2025, 6, 2, 13, 0);

        let err = submit_punch(&conn, &clock, &cfg, &employee, RecordKind::Salida, None)
            .unwrap_err();
        match err {
            AppError::Sequence { expected } => assert_eq!(expected, RecordKind::Entrada),
            other => panic!("expected Sequence error, got {other:?}"),
        }
        // nothing was inserted
        assert!(store::latest_by_employee(&conn, employee.id).unwrap().is_none());
    }

    #[test]
    fn entrada_gets_default_lunch() {
        let (conn, cfg, employee) = setup();
        let clock = clock_at(2025, 6, 2, 13, 0);
        let rec =
            submit_punch(&conn, &clock, &cfg, &employee, RecordKind::Entrada, None).unwrap();
        assert_eq!(rec.lunch_minutes, Some(120));
        assert!(!rec.lunch_edited);
    }

    #[test]
    fn salida_closes_lunch_window_of_its_entrada() {
        let (conn, cfg, employee) = setup();
        let clock = clock_at(2025, 6, 2, 13, 0);
        let entrada =
            submit_punch(&conn, &clock, &cfg, &employee, RecordKind::Entrada, None).unwrap();

        let later = FixedClock(clock.0 + Duration::hours(9));
        submit_punch(&conn, &later, &cfg, &employee, RecordKind::Salida, None).unwrap();

        let stored = store::get_record(&conn, entrada.id).unwrap().unwrap();
        assert!(stored.lunch_edited);
    }

    #[test]
    fn stale_entrada_blocks_salida() {
        let (conn, cfg, employee) = setup();
        let clock = clock_at(2025, 6, 2, 13, 0);
        submit_punch(&conn, &clock, &cfg, &employee, RecordKind::Entrada, None).unwrap();

        let three_days = FixedClock(clock.0 + Duration::days(3));
        let err = submit_punch(&conn, &three_days, &cfg, &employee, RecordKind::Salida, None)
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        // the SALIDA was not inserted, the state machine still awaits it
        assert_eq!(
            decide_next_action(&conn, employee.id).unwrap(),
            RecordKind::Salida
        );
    }

    #[test]
    fn denormalized_fields_follow_local_zone() {
        let (conn, cfg, employee) = setup();
        // 02:30 UTC is 21:30 the previous day in UTC-5
        let clock = clock_at(2025, 5, 13, 2, 30);
        let rec =
            submit_punch(&conn, &clock, &cfg, &employee, RecordKind::Entrada, None).unwrap();
        assert_eq!(rec.fecha, "12/05/2025");
        assert_eq!(rec.dia, "lunes");
        assert_eq!(rec.hora, "21:30:00");
    }
}
