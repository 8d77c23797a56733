//! Worked-hours arithmetic for one ENTRADA/SALIDA couple.

use crate::errors::AppResult;
use crate::utils::time::{format_minutes, parse_hhmm};

#[derive(Debug, Clone, PartialEq)]
pub struct WorkedHours {
    /// Net minutes after the lunch deduction, clamped at zero.
    pub minutes: i64,
    /// Zero-padded "HH:MM".
    pub formatted: String,
    /// minutes / 60 rounded to exactly 2 decimals. Payroll displays rely on
    /// this value bit-for-bit (8h30m is 8.5, never 8.5000001).
    pub decimal_hours: f64,
}

/// Compute the net worked time between two local times of day.
///
/// An exit earlier than the entry means the shift crossed midnight, so a
/// full day is added before deducting lunch. A lunch longer than the worked
/// span clamps to zero rather than going negative.
pub fn compute_worked_hours(
    entry_time: &str,
    exit_time: &str,
    lunch_minutes: i32,
) -> AppResult<WorkedHours> {
    let entry = parse_hhmm(entry_time)? as i64;
    let exit = parse_hhmm(exit_time)? as i64;

    let mut diff = exit - entry;
    if diff < 0 {
        diff += 24 * 60;
    }
    diff -= lunch_minutes as i64;
    if diff < 0 {
        diff = 0;
    }

    Ok(WorkedHours {
        minutes: diff,
        formatted: format_minutes(diff),
        decimal_hours: round2(diff as f64 / 60.0),
    })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_hhmm;

    #[test]
    fn lunch_deduction() {
        let w = compute_worked_hours("08:00", "17:00", 60).unwrap();
        assert_eq!(w.formatted, "08:00");
        assert_eq!(w.minutes, 480);
        assert_eq!(w.decimal_hours, 8.00);
    }

    #[test]
    fn midnight_wraparound() {
        let w = compute_worked_hours("23:00", "01:00", 0).unwrap();
        assert_eq!(w.minutes, 120);
        assert_eq!(w.formatted, "02:00");
        assert_eq!(w.decimal_hours, 2.00);
    }

    #[test]
    fn lunch_exceeding_span_clamps_to_zero() {
        let w = compute_worked_hours("08:00", "08:30", 60).unwrap();
        assert_eq!(w.minutes, 0);
        assert_eq!(w.formatted, "00:00");
        assert_eq!(w.decimal_hours, 0.00);
    }

    #[test]
    fn decimal_is_two_place_rounding_of_minutes() {
        // 8h30m -> 8.50
        let w = compute_worked_hours("08:00", "18:30", 120).unwrap();
        assert_eq!(w.minutes, 510);
        assert_eq!(w.decimal_hours, 8.50);
        // 7h50m -> 7.83 (470/60 = 7.8333...)
        let w = compute_worked_hours("08:10", "16:00", 0).unwrap();
        assert_eq!(w.minutes, 470);
        assert_eq!(w.decimal_hours, 7.83);
    }

    #[test]
    fn formatted_output_round_trips_to_minutes() {
        for (e, x, l) in [("08:00", "17:00", 60), ("22:15", "06:45", 30), ("09:00", "09:00", 0)] {
            let w = compute_worked_hours(e, x, l).unwrap();
            assert_eq!(parse_hhmm(&w.formatted).unwrap() as i64, w.minutes);
        }
    }

    #[test]
    fn accepts_seconds_in_input() {
        let w = compute_worked_hours("08:00:12", "17:00:45", 60).unwrap();
        assert_eq!(w.formatted, "08:00");
    }
}
