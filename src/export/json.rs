use super::PairRow;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Write pair rows as pretty-printed JSON.
pub(crate) fn write_json(path: &Path, rows: &[PairRow]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
