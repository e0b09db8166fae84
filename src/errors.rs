//! Unified application error type.
//! All modules (core, cli, export, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Cannot format '{0}' as date")]
    InvalidDate(String),

    #[error("Cannot format '{0}' as duration")]
    InvalidDuration(String),

    #[error("Invalid rate of pay: {0}")]
    InvalidRate(String),

    #[error("Invalid timesheet name: {0}")]
    InvalidName(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Timesheet errors
    // ---------------------------
    #[error("No timesheet named '{0}'")]
    SheetNotFound(String),

    #[error("A timesheet named '{0}' already exists")]
    SheetExists(String),

    #[error("No timesheet selected: use --sheet <NAME> or `tsheet open <NAME>`")]
    NoActiveSheet,

    #[error("No entry with id {0}")]
    EntryNotFound(usize),

    #[error("Row {row}: {reason}")]
    InvalidEntry { row: usize, reason: String },

    #[error("Empty field: {0}")]
    EmptyField(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
