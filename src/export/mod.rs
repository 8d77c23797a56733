//! Pair report exports: CSV, XLSX and JSON renderings of an employee's
//! reconciled ENTRADA/SALIDA pairs.

mod csv;
mod json;
mod xlsx;

use crate::errors::{AppError, AppResult};
use crate::models::pair::Pair;
use crate::utils::time::format_minutes;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// One flattened report row, the shape shared by all three writers.
#[derive(Debug, Clone, Serialize)]
pub struct PairRow {
    pub fecha: String,
    pub dia: String,
    pub entrada: String,
    pub salida: String,
    pub almuerzo: String,
    pub total_horas: String,
    pub total_decimal: String,
    pub observaciones: String,
}

pub(crate) const HEADERS: [&str; 8] = [
    "Fecha",
    "Día",
    "Entrada",
    "Salida",
    "Almuerzo",
    "Total horas",
    "Total decimal",
    "Observaciones",
];

impl PairRow {
    pub fn from_pair(pair: &Pair) -> Self {
        let anchor = pair.entry.as_ref().or(pair.exit.as_ref());
        let lunch = pair
            .entry
            .as_ref()
            .and_then(|e| e.lunch_minutes)
            .unwrap_or(0);
        let observaciones = pair
            .entry
            .as_ref()
            .map(|e| e.observation.clone())
            .filter(|o| !o.is_empty())
            .or_else(|| pair.exit.as_ref().map(|x| x.observation.clone()))
            .unwrap_or_default();

        PairRow {
            fecha: anchor.map(|r| r.fecha.clone()).unwrap_or_default(),
            dia: anchor.map(|r| r.dia.clone()).unwrap_or_default(),
            entrada: pair
                .entry
                .as_ref()
                .map(|r| r.hora.clone())
                .unwrap_or_else(|| "--".to_string()),
            salida: pair
                .exit
                .as_ref()
                .map(|r| r.hora.clone())
                .unwrap_or_else(|| "--".to_string()),
            almuerzo: format_minutes(lunch as i64),
            total_horas: pair.worked.clone(),
            total_decimal: format!("{:.2}", pair.decimal_hours),
            observaciones,
        }
    }

    pub(crate) fn values(&self) -> [&str; 8] {
        [
            &self.fecha,
            &self.dia,
            &self.entrada,
            &self.salida,
            &self.almuerzo,
            &self.total_horas,
            &self.total_decimal,
            &self.observaciones,
        ]
    }
}

/// Write pairs to `path` in the requested format.
pub fn export_pairs(pairs: &[Pair], format: &ExportFormat, path: &Path) -> AppResult<()> {
    let rows: Vec<PairRow> = pairs.iter().map(PairRow::from_pair).collect();
    match format {
        ExportFormat::Csv => csv::write_csv(path, &rows),
        ExportFormat::Json => json::write_json(path, &rows),
        ExportFormat::Xlsx => xlsx::write_xlsx(path, &rows),
    }
}

pub(crate) fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))
}
