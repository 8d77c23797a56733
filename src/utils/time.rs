//! Time utilities: parsing HH:MM / HH:MM:SS, formatting minute counts.

use crate::errors::{AppError, AppResult};

/// Parse "HH:MM" or "HH:MM:SS" (seconds ignored) into minutes since
/// midnight. Rejects out-of-range components.
pub fn parse_hhmm(s: &str) -> AppResult<i32> {
    let mut it = s.trim().split(':');
    let h: i32 = it
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    let m: i32 = it
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    if let Some(sec) = it.next() {
        let sec: i32 = sec
            .parse()
            .map_err(|_| AppError::InvalidTime(s.to_string()))?;
        if !(0..60).contains(&sec) {
            return Err(AppError::InvalidTime(s.to_string()));
        }
    }
    if it.next().is_some() {
        return Err(AppError::InvalidTime(s.to_string()));
    }

    if !(0..24).contains(&h) || !(0..60).contains(&m) {
        return Err(AppError::InvalidTime(s.to_string()));
    }
    Ok(h * 60 + m)
}

/// Format a non-negative minute count as zero-padded "HH:MM".
pub fn format_minutes(mins: i64) -> String {
    let m = mins.max(0);
    format!("{:02}:{:02}", m / 60, m % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hhmm_and_hhmmss() {
        assert_eq!(parse_hhmm("08:30").unwrap(), 510);
        assert_eq!(parse_hhmm("08:30:59").unwrap(), 510);
        assert_eq!(parse_hhmm("00:00").unwrap(), 0);
        assert_eq!(parse_hhmm("23:59").unwrap(), 1439);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_hhmm("24:00").is_err());
        assert!(parse_hhmm("12:60").is_err());
        assert!(parse_hhmm("12").is_err());
        assert!(parse_hhmm("ab:cd").is_err());
        assert!(parse_hhmm("12:00:00:00").is_err());
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(510), "08:30");
        assert_eq!(format_minutes(-5), "00:00");
    }
}
