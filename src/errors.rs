//! Unified application error type.
//! The record store, the config layer and the CLI handlers all return
//! AppError, including the user-facing notices (already logged in, no open
//! session, ...) which the CLI renders according to their severity.

use std::io;
use thiserror::Error;

/// How the presentation layer should surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// UI-level precondition not met: abort quietly.
    Silent,
    /// Idempotency notice: the action was a no-op.
    Info,
    /// The user must correct the input or perform a prior action.
    Warning,
    /// Storage or configuration failure.
    Fatal,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Table '{path}' does not match the {schema} schema (header: {found})")]
    SchemaMismatch {
        path: String,
        schema: String,
        found: String,
    },

    // ---------------------------
    // Input
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Session notices
    // ---------------------------
    #[error("Already logged in for {activity} on {date}")]
    AlreadyLoggedIn { date: String, activity: String },

    #[error("Already logged out for {key}")]
    AlreadyLoggedOut { key: String },

    #[error("No open session for {key}: please login first")]
    NoOpenSession { key: String },

    #[error("No record found for {activity} on {date}")]
    RecordNotFound { date: String, activity: String },

    #[error("No record selected")]
    NoSelection,

    #[error("Empty remark, nothing saved")]
    EmptyRemark,

    #[error("Export cancelled, '{0}' left untouched")]
    ExportCancelled(String),

    #[error("Operation not supported by the {0}")]
    Unsupported(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,
}

impl AppError {
    pub fn severity(&self) -> Severity {
        match self {
            AppError::NoSelection | AppError::EmptyRemark | AppError::ExportCancelled(_) => {
                Severity::Silent
            }
            AppError::AlreadyLoggedIn { .. } | AppError::AlreadyLoggedOut { .. } => Severity::Info,
            AppError::Validation(_)
            | AppError::InvalidDate(_)
            | AppError::NoOpenSession { .. }
            | AppError::RecordNotFound { .. } => Severity::Warning,
            _ => Severity::Fatal,
        }
    }

    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            Severity::Silent | Severity::Info => 0,
            Severity::Warning => 2,
            Severity::Fatal => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
