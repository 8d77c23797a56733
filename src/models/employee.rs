use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Employee directory row. The attendance core only needs id → name; the
/// rest supports the admin account-management commands.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub cedula: String,
    pub role: Role,
    pub blocked: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Role {
    Employee,
    Admin,
    Master,
}

impl Role {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Admin => "admin",
            Role::Master => "master",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "employee" => Some(Role::Employee),
            "admin" => Some(Role::Admin),
            "master" => Some(Role::Master),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
