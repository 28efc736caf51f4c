//! Time utilities: current wall-clock time in the configured format.

use chrono::format::{Item, StrftimeItems};

/// Current local time formatted with `fmt` (falls back to `HH:MM` when the
/// format string is not a valid chrono format).
pub fn now_formatted(fmt: &str) -> String {
    let now = chrono::Local::now();
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return now.format("%H:%M").to_string();
    }
    now.format(fmt).to_string()
}
