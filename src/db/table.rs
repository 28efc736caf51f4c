//! Whole-file CSV persistence of the attendance table.

use crate::errors::{AppError, AppResult};
use crate::models::{Schema, SessionRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// True when the table has never been written (missing or zero bytes).
pub fn is_blank(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    }
}

/// Read every row in file order.
pub fn read_table(path: &Path, schema: Schema) -> AppResult<Vec<SessionRecord>> {
    if is_blank(path) {
        return Ok(Vec::new());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    if !headers.iter().eq(schema.columns().iter().copied()) {
        return Err(AppError::SchemaMismatch {
            path: path.display().to_string(),
            schema: schema.to_string(),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        records.push(SessionRecord::from_row(schema, &row?));
    }

    Ok(records)
}

/// Replace the table with `records`.
///
/// The new content goes to a temp file in the same directory which is then
/// renamed over `path`, so readers see either the old or the new table.
pub fn write_table(path: &Path, schema: Schema, records: &[SessionRecord]) -> AppResult<()> {
    let dir = parent_dir(path);
    fs::create_dir_all(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    {
        let mut wtr = csv::Writer::from_writer(tmp.as_file_mut());
        wtr.write_record(schema.columns())?;
        for rec in records {
            wtr.write_record(rec.to_row(schema))?;
        }
        wtr.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| AppError::Io(e.error))?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
