//! Read-only fallback snapshot of punch records.
//!
//! Two-tier precedence: the SQLite store is authoritative; after every
//! successful read the employee's records are mirrored to a JSON sidecar
//! file, and only when a store read fails is the snapshot consulted.
//! Writes never land here — accepting punches against a cache would corrupt
//! the log.

use crate::errors::{AppError, AppResult};
use crate::models::punch_record::PunchRecord;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub struct RecordCache {
    path: PathBuf,
}

type Snapshot = HashMap<String, Vec<PunchRecord>>;

impl RecordCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_snapshot(&self) -> Snapshot {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Mirror one employee's records after a successful store read.
    pub fn save(&self, employee_id: i64, records: &[PunchRecord]) -> AppResult<()> {
        let mut snapshot = self.read_snapshot();
        snapshot.insert(employee_id.to_string(), records.to_vec());
        let json = serde_json::to_string(&snapshot)
            .map_err(|e| AppError::Other(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Last known records for one employee, ascending timestamp order.
    pub fn load(&self, employee_id: i64) -> AppResult<Vec<PunchRecord>> {
        self.read_snapshot()
            .remove(&employee_id.to_string())
            .ok_or_else(|| {
                AppError::NotFound(format!("no cached records for employee {employee_id}"))
            })
    }
}
