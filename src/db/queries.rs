//! Linear scans over the in-memory table. Every lookup returns the first
//! match in file order.

use crate::models::{SessionKey, SessionRecord};

/// First record matching `key`, open or closed.
pub fn find_first(records: &[SessionRecord], key: &SessionKey) -> Option<usize> {
    records.iter().position(|r| key.matches(r))
}

/// First open record matching `key`.
pub fn find_open(records: &[SessionRecord], key: &SessionKey) -> Option<usize> {
    records.iter().position(|r| r.is_open() && key.matches(r))
}

pub fn open_records(records: &[SessionRecord]) -> Vec<SessionRecord> {
    records.iter().filter(|r| r.is_open()).cloned().collect()
}

pub fn records_for_date(records: &[SessionRecord], date: &str) -> Vec<SessionRecord> {
    records.iter().filter(|r| r.date == date).cloned().collect()
}
