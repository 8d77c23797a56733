use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Application configuration, stored as YAML under the user config dir.
/// Every tunable the business rules depend on lives here so components
/// receive it explicitly instead of reading ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Lunch minutes applied to every new ENTRADA (editable once later).
    #[serde(default = "default_lunch_minutes")]
    pub default_lunch_minutes: i32,
    /// Upper bound for a lunch edit, in minutes.
    #[serde(default = "default_max_lunch_minutes")]
    pub max_lunch_minutes: i32,
    /// Open entries older than this get the forgotten-punch closure.
    #[serde(default = "default_forgotten_punch_hours")]
    pub forgotten_punch_hours: i64,
    /// Open entries older than this get the day-change closure instead.
    #[serde(default = "default_day_change_hours")]
    pub day_change_hours: i64,
    /// Synthesized exits land this many hours after the original entry.
    #[serde(default = "default_auto_close_offset_hours")]
    pub auto_close_offset_hours: i64,
    /// Local zone as minutes east of UTC. Colombia is -300.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

fn default_lunch_minutes() -> i32 {
    120
}
fn default_max_lunch_minutes() -> i32 {
    120
}
fn default_forgotten_punch_hours() -> i64 {
    8
}
fn default_day_change_hours() -> i64 {
    24
}
fn default_auto_close_offset_hours() -> i64 {
    4
}
fn default_utc_offset_minutes() -> i32 {
    -300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_lunch_minutes: default_lunch_minutes(),
            max_lunch_minutes: default_max_lunch_minutes(),
            forgotten_punch_hours: default_forgotten_punch_hours(),
            day_change_hours: default_day_change_hours(),
            auto_close_offset_hours: default_auto_close_offset_hours(),
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("timeclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timeclock.sqlite")
    }

    /// Sidecar JSON snapshot used as a read-only fallback when the
    /// database cannot be read.
    pub fn cache_file_for(database: &str) -> PathBuf {
        PathBuf::from(format!("{database}.cache.json"))
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> Self {
        let path = Self::config_file();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files.
    /// In test mode the user config file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                fs::create_dir_all(&dir)?;
                dir.join(p)
            }
        } else {
            fs::create_dir_all(&dir)?;
            Self::database_file()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if !db_path.exists() {
            if let Some(parent) = db_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
