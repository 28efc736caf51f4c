use super::schema::{
    COL_ACTIVITY, COL_DATE, COL_DAY, COL_LOGIN_TIME, COL_LOGOUT_TIME, COL_REMARKS,
    COL_SCHEDULED_TIME, Schema,
};
use csv::StringRecord;
use serde::Serialize;
use std::fmt;

/// One row of the attendance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub date: String,                   // ⇔ Date ("YYYY-MM-DD")
    pub day: String,                    // ⇔ Day (weekday name, derived from date)
    pub scheduled_time: Option<String>, // ⇔ ScheduledTime (schedule schema only)
    pub activity: String,               // ⇔ Activity
    pub login_time: String,             // ⇔ LoginTime
    pub logout_time: String,            // ⇔ LogoutTime ("" while open)
    pub remarks: Option<String>,        // ⇔ Remarks (activity schema only)
}

impl SessionRecord {
    /// A freshly logged-in, still open record.
    pub fn open(
        date: &str,
        day: &str,
        activity: &str,
        login_time: &str,
        scheduled_time: Option<String>,
    ) -> Self {
        Self {
            date: date.to_string(),
            day: day.to_string(),
            scheduled_time,
            activity: activity.to_string(),
            login_time: login_time.to_string(),
            logout_time: String::new(),
            remarks: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.logout_time.trim().is_empty()
    }

    /// Serialize to a CSV row following `schema.columns()`.
    pub fn to_row(&self, schema: Schema) -> Vec<String> {
        schema
            .columns()
            .iter()
            .map(|col| match *col {
                COL_DATE => self.date.clone(),
                COL_DAY => self.day.clone(),
                COL_SCHEDULED_TIME => self.scheduled_time.clone().unwrap_or_default(),
                COL_ACTIVITY => self.activity.clone(),
                COL_LOGIN_TIME => self.login_time.clone(),
                COL_LOGOUT_TIME => self.logout_time.clone(),
                COL_REMARKS => self.remarks.clone().unwrap_or_default(),
                _ => String::new(),
            })
            .collect()
    }

    /// Build from a CSV row whose header has already been checked against `schema`.
    pub fn from_row(schema: Schema, row: &StringRecord) -> Self {
        let mut rec = SessionRecord {
            date: String::new(),
            day: String::new(),
            scheduled_time: None,
            activity: String::new(),
            login_time: String::new(),
            logout_time: String::new(),
            remarks: None,
        };

        for (col, value) in schema.columns().iter().zip(row.iter()) {
            match *col {
                COL_DATE => rec.date = value.to_string(),
                COL_DAY => rec.day = value.to_string(),
                COL_SCHEDULED_TIME => rec.scheduled_time = non_empty(value),
                COL_ACTIVITY => rec.activity = value.to_string(),
                COL_LOGIN_TIME => rec.login_time = value.to_string(),
                COL_LOGOUT_TIME => rec.logout_time = value.to_string(),
                COL_REMARKS => rec.remarks = non_empty(value),
                _ => {}
            }
        }

        rec
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Lookup key used to find the session a logout (or remark) applies to.
///
/// `activity` is `None` for schemas that key by date alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKey {
    pub date: String,
    pub activity: Option<String>,
}

impl SessionKey {
    pub fn for_schema(schema: Schema, date: &str, activity: &str) -> Self {
        Self {
            date: date.to_string(),
            activity: schema.keys_by_activity().then(|| activity.to_string()),
        }
    }

    pub fn matches(&self, rec: &SessionRecord) -> bool {
        rec.date == self.date
            && self
                .activity
                .as_deref()
                .is_none_or(|a| rec.activity == a)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.activity {
            Some(a) => write!(f, "{} on {}", a, self.date),
            None => write!(f, "{}", self.date),
        }
    }
}
