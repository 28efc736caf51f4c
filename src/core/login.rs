use crate::core::required;
use crate::db::queries::find_first;
use crate::errors::{AppError, AppResult};
use crate::models::{Schema, SessionKey, SessionRecord, activity};
use crate::utils::date::weekday_name;

/// Input of a login action.
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub date: String,
    pub activity: String,
    pub login_time: String,
    /// Kept only by the schedule schema.
    pub scheduled_time: Option<String>,
}

impl LoginRequest {
    pub fn new(date: &str, activity: &str, login_time: &str) -> Self {
        Self {
            date: date.to_string(),
            activity: activity.to_string(),
            login_time: login_time.to_string(),
            scheduled_time: None,
        }
    }

    pub fn scheduled(mut self, label: &str) -> Self {
        self.scheduled_time = Some(label.to_string());
        self
    }
}

pub struct LoginLogic;

impl LoginLogic {
    /// Append an open record for `req` and return it.
    ///
    /// With `allow_duplicates == false` any existing record (open or closed)
    /// for the same key turns the login into `AlreadyLoggedIn`.
    pub fn apply(
        records: &mut Vec<SessionRecord>,
        schema: Schema,
        allow_duplicates: bool,
        req: &LoginRequest,
    ) -> AppResult<SessionRecord> {
        let date = required(&req.date, "date")?;
        let activity_name = required(&req.activity, "activity")?;
        let login_time = required(&req.login_time, "login time")?;

        let activity_name = if schema.uses_fixed_activities() {
            activity::canonical(activity_name).ok_or_else(|| {
                AppError::Validation(format!(
                    "unknown activity '{}' (see `attendlog activities`)",
                    activity_name
                ))
            })?
        } else {
            activity_name
        };

        let day = weekday_name(date)?;

        if !allow_duplicates {
            let key = SessionKey::for_schema(schema, date, activity_name);
            if find_first(records, &key).is_some() {
                return Err(AppError::AlreadyLoggedIn {
                    date: date.to_string(),
                    activity: activity_name.to_string(),
                });
            }
        }

        let scheduled_time = if schema.has_scheduled_time() {
            req.scheduled_time
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        } else {
            None
        };

        let rec = SessionRecord::open(date, &day, activity_name, login_time, scheduled_time);
        records.push(rec.clone());
        Ok(rec)
    }
}
