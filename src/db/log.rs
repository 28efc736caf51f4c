use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

const LOG_COLUMNS: [&str; 4] = ["date", "operation", "target", "message"];

/// One line of the internal operation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// The log lives next to the table: `attendance.csv` → `attendance.csv.log`.
///
/// The suffix is appended to the full file name, so the log never
/// coincides with the table whatever its extension.
pub fn log_path_for(table: &Path) -> PathBuf {
    let mut name = table.as_os_str().to_os_string();
    name.push(".log");
    PathBuf::from(name)
}

/// Append a line to the internal log, creating it with a header if needed.
pub fn ttlog(log_path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let fresh = fs::metadata(log_path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if fresh {
        wtr.write_record(LOG_COLUMNS)?;
    }

    wtr.serialize(LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })?;

    wtr.flush()?;
    Ok(())
}

pub fn read_log(log_path: &Path) -> AppResult<Vec<LogEntry>> {
    if !log_path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::Reader::from_path(log_path)?;
    let mut entries = Vec::new();
    for entry in rdr.deserialize() {
        entries.push(entry?);
    }

    Ok(entries)
}
