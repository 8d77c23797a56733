use super::{HEADERS, PairRow, path_str};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write pair rows as CSV with a header line.
pub(crate) fn write_csv(path: &Path, rows: &[PairRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path_str(path)?)?;

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.write_record(row.values())?;
    }

    wtr.flush()?;
    Ok(())
}
