//! Pair reconciliation: reduce an employee's full punch stream into ordered
//! ENTRADA/SALIDA couples with derived worked hours.
//!
//! Matching walks the stream in timestamp order: every ENTRADA opens a pair
//! and a SALIDA closes the last still-open one. Matching is never grouped by
//! calendar date — an employee who punches in late at night and out after
//! midnight still produces one pair.

use crate::core::hours::compute_worked_hours;
use crate::db::cache::RecordCache;
use crate::db::store;
use crate::errors::AppResult;
use crate::models::pair::Pair;
use crate::models::punch_record::PunchRecord;
use crate::models::record_kind::RecordKind;
use rusqlite::Connection;

/// Build pairs from records sorted ascending by timestamp.
///
/// - ENTRADA always opens a new pair.
/// - SALIDA closes the nearest preceding unmatched ENTRADA; with none open
///   it becomes an orphan-exit pair (data anomaly, zero hours, no crash).
/// - Two ENTRADAs in a row leave the first as an open pair; matching resumes
///   from the second.
pub fn compute_pairs(records: &[PunchRecord]) -> Vec<Pair> {
    let mut pairs: Vec<Pair> = Vec::new();

    for rec in records {
        match rec.kind {
            RecordKind::Entrada => {
                pairs.push(Pair::open(rec.clone()));
            }
            RecordKind::Salida => {
                if let Some(last) = pairs.last_mut()
                    && last.is_open()
                {
                    last.exit = Some(rec.clone());
                    continue;
                }
                pairs.push(Pair::orphan_exit(rec.clone()));
            }
        }
    }

    for pair in pairs.iter_mut().filter(|p| p.is_complete()) {
        let entry = pair.entry.as_ref().unwrap();
        let exit = pair.exit.as_ref().unwrap();
        if let Ok(w) =
            compute_worked_hours(&entry.hora, &exit.hora, entry.lunch_minutes.unwrap_or(0))
        {
            pair.worked_minutes = w.minutes;
            pair.worked = w.formatted;
            pair.decimal_hours = w.decimal_hours;
        }
    }

    pairs
}

/// Most recent pairs for one employee, newest first, truncated to `limit`.
///
/// Reads fall back to the JSON snapshot when the store is unreadable; the
/// snapshot is refreshed after every successful read. Writes never use it.
pub fn employee_pairs(
    conn: &Connection,
    cache: &RecordCache,
    employee_id: i64,
    limit: usize,
) -> AppResult<Vec<Pair>> {
    let records = match store::list_by_employee_asc(conn, employee_id) {
        Ok(records) => {
            let _ = cache.save(employee_id, &records);
            records
        }
        Err(store_err) => cache.load(employee_id).map_err(|_| store_err)?,
    };

    let mut pairs = compute_pairs(&records);
    pairs.reverse();
    pairs.truncate(limit);
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record_kind::RecordKind;
    use chrono::{TimeZone, Utc};

    fn rec(id: i64, kind: RecordKind, hour: u32, min: u32) -> PunchRecord {
        let ts = Utc.with_ymd_and_hms(2025, 6, 2, hour, min, 0).unwrap();
        PunchRecord {
            id,
            employee_id: 7,
            employee_name: "Ana".to_string(),
            kind,
            timestamp: ts,
            fecha: "02/06/2025".to_string(),
            dia: "lunes".to_string(),
            hora: format!("{hour:02}:{min:02}:00"),
            lunch_minutes: kind.is_entrada().then_some(0),
            lunch_edited: false,
            observation: String::new(),
            paid_leave: false,
            deleted_at: None,
        }
    }

    #[test]
    fn entrada_salida_makes_one_complete_pair() {
        let records = vec![
            rec(1, RecordKind::Entrada, 8, 0),
            rec(2, RecordKind::Salida, 17, 0),
        ];
        let pairs = compute_pairs(&records);
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].is_complete());
        assert_eq!(pairs[0].worked, "09:00");
        assert_eq!(pairs[0].decimal_hours, 9.00);
    }

    #[test]
    fn forgotten_salida_leaves_first_entrada_open() {
        // ENTRADA@08:00, ENTRADA@08:05, SALIDA@17:00
        let records = vec![
            rec(1, RecordKind::Entrada, 8, 0),
            rec(2, RecordKind::Entrada, 8, 5),
            rec(3, RecordKind::Salida, 17, 0),
        ];
        let pairs = compute_pairs(&records);
        assert_eq!(pairs.len(), 2);

        assert!(pairs[0].is_open());
        assert_eq!(pairs[0].entry.as_ref().unwrap().hora, "08:00:00");
        assert_eq!(pairs[0].worked_minutes, 0);

        assert!(pairs[1].is_complete());
        assert_eq!(pairs[1].entry.as_ref().unwrap().hora, "08:05:00");
        assert_eq!(pairs[1].exit.as_ref().unwrap().hora, "17:00:00");
    }

    #[test]
    fn lone_salida_is_an_orphan_exit() {
        let records = vec![rec(1, RecordKind::Salida, 9, 0)];
        let pairs = compute_pairs(&records);
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].is_orphan_exit());
        assert_eq!(pairs[0].worked_minutes, 0);
        assert_eq!(pairs[0].decimal_hours, 0.0);
    }

    #[test]
    fn salida_after_closed_pair_is_orphan() {
        let records = vec![
            rec(1, RecordKind::Entrada, 8, 0),
            rec(2, RecordKind::Salida, 12, 0),
            rec(3, RecordKind::Salida, 13, 0),
        ];
        let pairs = compute_pairs(&records);
        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].is_complete());
        assert!(pairs[1].is_orphan_exit());
    }

    #[test]
    fn lunch_minutes_of_entry_are_deducted() {
        let mut entry = rec(1, RecordKind::Entrada, 8, 0);
        entry.lunch_minutes = Some(120);
        let records = vec![entry, rec(2, RecordKind::Salida, 17, 0)];
        let pairs = compute_pairs(&records);
        assert_eq!(pairs[0].worked, "07:00");
        assert_eq!(pairs[0].decimal_hours, 7.00);
    }

    #[test]
    fn empty_history_yields_no_pairs() {
        assert!(compute_pairs(&[]).is_empty());
    }
}
