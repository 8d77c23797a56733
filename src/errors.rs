//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent across the crate.

use crate::models::record_kind::RecordKind;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid record kind: {0}")]
    InvalidKind(String),

    // ---------------------------
    // Business rule errors
    // ---------------------------
    /// User input failed a validation rule. Recoverable, no retry.
    #[error("{0}")]
    Validation(String),

    /// Wrong punch kind for the employee's current state. The caller must
    /// surface the expected kind, never coerce to it.
    #[error("No puedes marcar ahora. Debes marcar {expected}")]
    Sequence { expected: RecordKind },

    /// Terminal for the current request, requires administrator action.
    #[error("{0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
