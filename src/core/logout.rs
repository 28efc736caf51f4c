use crate::core::{lookup_activity, required};
use crate::db::queries::{find_first, find_open};
use crate::errors::{AppError, AppResult};
use crate::models::{Schema, SessionKey, SessionRecord};

pub struct LogoutLogic;

impl LogoutLogic {
    /// Close the first open record matching the key and return it.
    ///
    /// - a matching record exists but none is open → `AlreadyLoggedOut`
    /// - nothing matches → `NoOpenSession`
    pub fn apply(
        records: &mut [SessionRecord],
        schema: Schema,
        date: &str,
        activity: Option<&str>,
        logout_time: &str,
    ) -> AppResult<SessionRecord> {
        let date = required(date, "date")?;
        let logout_time = required(logout_time, "logout time")?;

        let activity = if schema.keys_by_activity() {
            let name = required(activity.unwrap_or_default(), "activity")?;
            Some(lookup_activity(schema, name))
        } else {
            None
        };

        let key = SessionKey {
            date: date.to_string(),
            activity,
        };

        if let Some(idx) = find_open(records, &key) {
            records[idx].logout_time = logout_time.to_string();
            return Ok(records[idx].clone());
        }

        if find_first(records, &key).is_some() {
            Err(AppError::AlreadyLoggedOut {
                key: key.to_string(),
            })
        } else {
            Err(AppError::NoOpenSession {
                key: key.to_string(),
            })
        }
    }
}
