use super::record_kind::RecordKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One physical punch, as stored in the `time_records` table.
///
/// Immutable after insert except for lunch_minutes + lunch_edited (one-shot),
/// observation, paid_leave and deleted_at. The fecha/dia/hora columns are
/// denormalized display fields, always derived from `timestamp` through
/// `utils::date::calendar_fields` and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub kind: RecordKind,
    /// UTC instant, the only ordering key.
    pub timestamp: DateTime<Utc>,
    pub fecha: String, // "DD/MM/YYYY", local zone
    pub dia: String,   // Spanish weekday name, lowercase
    pub hora: String,  // "HH:MM:SS", local zone
    /// Minutes deducted for lunch; meaningful only on ENTRADA rows.
    pub lunch_minutes: Option<i32>,
    /// Once true, lunch_minutes is permanently frozen for this row.
    pub lunch_edited: bool,
    pub observation: String,
    pub paid_leave: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}
