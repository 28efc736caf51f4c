use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const COL_DATE: &str = "Date";
pub const COL_DAY: &str = "Day";
pub const COL_SCHEDULED_TIME: &str = "ScheduledTime";
pub const COL_ACTIVITY: &str = "Activity";
pub const COL_LOGIN_TIME: &str = "LoginTime";
pub const COL_LOGOUT_TIME: &str = "LogoutTime";
pub const COL_REMARKS: &str = "Remarks";

/// Column layout of one attendance table.
///
/// A store instance is bound to exactly one schema; a file written with one
/// layout is never read with another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// Free-text activity, one closeable session per date.
    Daily,
    /// Like `Daily` with a scheduled-time label and free-form times.
    Schedule,
    /// Fixed activity list, one record per (date, activity), remarks.
    Activity,
}

impl Schema {
    pub fn as_str(&self) -> &'static str {
        match self {
            Schema::Daily => "daily",
            Schema::Schedule => "schedule",
            Schema::Activity => "activity",
        }
    }

    /// Header row, in file order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Schema::Daily => &[
                COL_DATE,
                COL_DAY,
                COL_ACTIVITY,
                COL_LOGIN_TIME,
                COL_LOGOUT_TIME,
            ],
            Schema::Schedule => &[
                COL_DATE,
                COL_DAY,
                COL_SCHEDULED_TIME,
                COL_ACTIVITY,
                COL_LOGIN_TIME,
                COL_LOGOUT_TIME,
            ],
            Schema::Activity => &[
                COL_DATE,
                COL_DAY,
                COL_ACTIVITY,
                COL_LOGIN_TIME,
                COL_LOGOUT_TIME,
                COL_REMARKS,
            ],
        }
    }

    /// True when sessions are keyed by (date, activity) instead of date alone.
    pub fn keys_by_activity(&self) -> bool {
        matches!(self, Schema::Activity)
    }

    pub fn has_scheduled_time(&self) -> bool {
        matches!(self, Schema::Schedule)
    }

    pub fn has_remarks(&self) -> bool {
        matches!(self, Schema::Activity)
    }

    /// Activity must be one of `models::activity::ACTIVITIES`.
    pub fn uses_fixed_activities(&self) -> bool {
        matches!(self, Schema::Activity)
    }

    /// Duplicate-login policy used when the configuration does not set one.
    pub fn default_allow_duplicates(&self) -> bool {
        !matches!(self, Schema::Activity)
    }

    /// chrono format used for default login/logout times.
    pub fn default_time_format(&self) -> &'static str {
        match self {
            Schema::Schedule => "%I:%M %p",
            _ => "%H:%M",
        }
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
