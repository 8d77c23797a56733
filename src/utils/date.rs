//! Local calendar fields derived from UTC instants.
//!
//! Every denormalized fecha/dia/hora triple in the store comes from
//! [`calendar_fields`], so the display columns can never drift from the
//! timestamp that produced them.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc, Weekday};

/// Denormalized display fields for one instant, in the configured zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFields {
    pub fecha: String, // "DD/MM/YYYY"
    pub dia: String,   // Spanish weekday, lowercase
    pub hora: String,  // "HH:MM:SS"
}

fn to_local(ts: DateTime<Utc>, utc_offset_minutes: i32) -> DateTime<FixedOffset> {
    // Offsets come from config and are validated there; fall back to UTC if
    // something unrepresentable sneaks in.
    let offset =
        FixedOffset::east_opt(utc_offset_minutes * 60).unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
    ts.with_timezone(&offset)
}

/// Derive fecha/dia/hora for an instant in the zone given by the offset.
pub fn calendar_fields(ts: DateTime<Utc>, utc_offset_minutes: i32) -> CalendarFields {
    let local = to_local(ts, utc_offset_minutes);
    CalendarFields {
        fecha: local.format("%d/%m/%Y").to_string(),
        dia: spanish_weekday(local.weekday()).to_string(),
        hora: local.format("%H:%M:%S").to_string(),
    }
}

/// Hour-of-day (0..24) of an instant in the configured zone.
pub fn local_hour(ts: DateTime<Utc>, utc_offset_minutes: i32) -> u32 {
    to_local(ts, utc_offset_minutes).hour()
}

pub fn spanish_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}
