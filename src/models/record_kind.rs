use serde::{Deserialize, Serialize};
use std::fmt;

/// Punch kind: clock-in or clock-out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordKind {
    Entrada,
    Salida,
}

impl RecordKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RecordKind::Entrada => "ENTRADA",
            RecordKind::Salida => "SALIDA",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ENTRADA" => Some(RecordKind::Entrada),
            "SALIDA" => Some(RecordKind::Salida),
            _ => None,
        }
    }

    /// Parse user input (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ENTRADA" => Some(RecordKind::Entrada),
            "SALIDA" => Some(RecordKind::Salida),
            _ => None,
        }
    }

    /// The kind required after a punch of this kind was accepted.
    pub fn opposite(&self) -> Self {
        match self {
            RecordKind::Entrada => RecordKind::Salida,
            RecordKind::Salida => RecordKind::Entrada,
        }
    }

    pub fn is_entrada(&self) -> bool {
        matches!(self, RecordKind::Entrada)
    }

    pub fn is_salida(&self) -> bool {
        matches!(self, RecordKind::Salida)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
