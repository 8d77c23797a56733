use super::punch_record::PunchRecord;
use serde::Serialize;

/// One reconciled work session: an ENTRADA/SALIDA couple or an unmatched
/// half. Derived on every read, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Pair {
    pub entry: Option<PunchRecord>,
    pub exit: Option<PunchRecord>,
    /// Net minutes after the lunch deduction; zero for open/orphan pairs.
    pub worked_minutes: i64,
    /// "HH:MM" rendering of worked_minutes.
    pub worked: String,
    /// worked_minutes / 60 rounded to 2 decimals, payroll contract.
    pub decimal_hours: f64,
}

impl Pair {
    pub fn open(entry: PunchRecord) -> Self {
        Pair {
            entry: Some(entry),
            exit: None,
            worked_minutes: 0,
            worked: "00:00".to_string(),
            decimal_hours: 0.0,
        }
    }

    pub fn orphan_exit(exit: PunchRecord) -> Self {
        Pair {
            entry: None,
            exit: Some(exit),
            worked_minutes: 0,
            worked: "00:00".to_string(),
            decimal_hours: 0.0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.entry.is_some() && self.exit.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.entry.is_some() && self.exit.is_none()
    }

    pub fn is_orphan_exit(&self) -> bool {
        self.entry.is_none()
    }
}
