use crate::errors::AppResult;
use crate::models::Schema;
use crate::utils::path::resolve_path;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "ATTENDLOG_HOME";

const DEFAULT_TABLE: &str = "attendance.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Table path; relative paths are resolved against `config_dir()`.
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_schema")]
    pub schema: Schema,
    /// Unset → the schema default (allowed for daily/schedule, denied for activity).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_duplicate_open_sessions: Option<bool>,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
    /// chrono format for default login/logout times; unset → schema default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
}

fn default_table() -> String {
    Config::config_dir()
        .join(DEFAULT_TABLE)
        .to_string_lossy()
        .to_string()
}
fn default_schema() -> Schema {
    Schema::Activity
}
fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: default_table(),
            schema: default_schema(),
            allow_duplicate_open_sessions: None,
            show_weekday: default_show_weekday(),
            time_format: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = env::var_os(HOME_ENV) {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("attendlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".attendlog")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("attendlog.conf")
    }

    /// Load the configuration file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save(&self) -> AppResult<PathBuf> {
        let path = Self::config_file();
        fs::create_dir_all(Self::config_dir())?;
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(path)
    }

    pub fn table_path(&self) -> PathBuf {
        resolve_path(&self.table, &Self::config_dir())
    }

    pub fn allows_duplicates(&self) -> bool {
        self.allow_duplicate_open_sessions
            .unwrap_or_else(|| self.schema.default_allow_duplicates())
    }

    pub fn time_format(&self) -> &str {
        self.time_format
            .as_deref()
            .unwrap_or_else(|| self.schema.default_time_format())
    }
}
