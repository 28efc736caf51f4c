use crate::db::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::{Schema, SessionRecord};
use crate::ui::messages::warning;
use crate::utils::date::{in_bounds, period_bounds};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the table (optionally restricted to `range`) to `file`.
    ///
    /// `range` accepts the same expressions as `list --period`.
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if path.exists() && !force {
            confirm_overwrite(path, io::stdin().lock())?;
        }

        let mut records = store.load_all()?;
        if let Some(r) = range {
            let bounds = period_bounds(r)?;
            records.retain(|rec| in_bounds(&rec.date, bounds));
        }

        if records.is_empty() {
            warning("No records found for the selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&records, store.schema(), path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path, records.len());
        store.audit(
            "export",
            &path.display().to_string(),
            &format!("{} record(s) as {}", records.len(), format.as_str()),
        );
        Ok(())
    }
}

/// Ask before replacing an existing export target. Only `y`/`yes` proceeds.
fn confirm_overwrite(path: &Path, mut input: impl BufRead) -> AppResult<()> {
    print!("'{}' exists, replace it with the export? [y/N]: ", path.display());
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::ExportCancelled(path.display().to_string())),
    }
}

/// Same column layout as the table itself.
fn export_csv(records: &[SessionRecord], schema: Schema, path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(schema.columns())?;
    for rec in records {
        wtr.write_record(rec.to_row(schema))?;
    }
    wtr.flush()?;
    Ok(())
}

fn export_json(records: &[SessionRecord], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(records)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}
