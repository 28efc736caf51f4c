pub mod config;
pub mod log;
pub mod login;
pub mod logout;
pub mod remark;

use crate::errors::{AppError, AppResult};
use crate::models::{Schema, activity};

/// Trimmed value, or a validation error naming `field` when blank.
pub(crate) fn required<'a>(value: &'a str, field: &str) -> AppResult<&'a str> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(v)
}

/// Trimmed value, `None` when missing or blank.
pub(crate) fn selected(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Canonical activity spelling for schemas with a fixed list; unknown names
/// are returned as typed so lookups simply miss.
pub(crate) fn lookup_activity(schema: Schema, name: &str) -> String {
    if schema.uses_fixed_activities() {
        activity::canonical(name).unwrap_or(name).to_string()
    } else {
        name.to_string()
    }
}
