//! The record store: a schema-fixed CSV table with login/logout tracking.
//!
//! Every mutation is a full read-modify-write of the table. The file is
//! assumed to be owned by a single process; two instances writing the same
//! table concurrently may lose updates (last writer wins).

use crate::config::Config;
use crate::core::login::{LoginLogic, LoginRequest};
use crate::core::logout::LogoutLogic;
use crate::core::remark::RemarkLogic;
use crate::db::{initialize, log, table};
use crate::errors::AppResult;
use crate::models::{Schema, SessionRecord};
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    schema: Schema,
    allow_duplicate_open_sessions: bool,
}

impl RecordStore {
    /// Store over `path` using the schema's default duplicate-login policy.
    pub fn new(path: impl Into<PathBuf>, schema: Schema) -> Self {
        Self {
            path: path.into(),
            schema,
            allow_duplicate_open_sessions: schema.default_allow_duplicates(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.table_path(), cfg.schema).with_duplicate_policy(cfg.allows_duplicates())
    }

    /// `true`: every login appends a row. `false`: a login for a key that
    /// already has any record is rejected with `AlreadyLoggedIn`.
    pub fn with_duplicate_policy(mut self, allow_duplicate_open_sessions: bool) -> Self {
        self.allow_duplicate_open_sessions = allow_duplicate_open_sessions;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn allows_duplicates(&self) -> bool {
        self.allow_duplicate_open_sessions
    }

    pub fn log_path(&self) -> PathBuf {
        log::log_path_for(&self.path)
    }

    /// Write the empty header if the table does not exist yet. Idempotent.
    pub fn initialize(&self) -> AppResult<()> {
        if initialize::init_table(&self.path, self.schema)? {
            self.audit(
                "init",
                &self.path.display().to_string(),
                &format!("Created {} table", self.schema),
            );
        }
        Ok(())
    }

    /// All rows in file order.
    pub fn load_all(&self) -> AppResult<Vec<SessionRecord>> {
        self.initialize()?;
        table::read_table(&self.path, self.schema)
    }

    pub fn record_login(&self, req: &LoginRequest) -> AppResult<Vec<SessionRecord>> {
        let mut records = self.load_all()?;
        let rec = LoginLogic::apply(
            &mut records,
            self.schema,
            self.allow_duplicate_open_sessions,
            req,
        )?;
        self.save(&records)?;

        self.audit(
            "login",
            &format!("{} {}", rec.date, rec.activity),
            &format!("Logged in at {}", rec.login_time),
        );
        Ok(records)
    }

    /// `activity` is only part of the key for schemas that key by activity.
    pub fn record_logout(
        &self,
        date: &str,
        activity: Option<&str>,
        logout_time: &str,
    ) -> AppResult<Vec<SessionRecord>> {
        let mut records = self.load_all()?;
        let rec = LogoutLogic::apply(&mut records, self.schema, date, activity, logout_time)?;
        self.save(&records)?;

        self.audit(
            "logout",
            &format!("{} {}", rec.date, rec.activity),
            &format!("Logged out at {} (login {})", rec.logout_time, rec.login_time),
        );
        Ok(records)
    }

    pub fn add_remark(
        &self,
        date: Option<&str>,
        activity: Option<&str>,
        remark: Option<&str>,
    ) -> AppResult<Vec<SessionRecord>> {
        let mut records = self.load_all()?;
        let rec = RemarkLogic::apply(&mut records, self.schema, date, activity, remark)?;
        self.save(&records)?;

        self.audit(
            "remark",
            &format!("{} {}", rec.date, rec.activity),
            rec.remarks.as_deref().unwrap_or_default(),
        );
        Ok(records)
    }

    fn save(&self, records: &[SessionRecord]) -> AppResult<()> {
        table::write_table(&self.path, self.schema, records)
    }

    /// Internal log write; never fails the calling operation.
    pub(crate) fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = log::ttlog(&self.log_path(), operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}
