use crate::db::table::{is_blank, write_table};
use crate::errors::AppResult;
use crate::models::Schema;
use std::path::Path;

/// Create the table with an empty header when it does not exist yet.
///
/// Returns `true` when the file was created, `false` when it was already
/// initialized (in which case nothing is touched).
pub fn init_table(path: &Path, schema: Schema) -> AppResult<bool> {
    if !is_blank(path) {
        return Ok(false);
    }

    write_table(path, schema, &[])?;
    Ok(true)
}
