//! Unified application error type.
//! All modules (api, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Reporting window
    // ---------------------------
    #[error("Invalid reporting range: {0}")]
    InvalidRange(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Record integrity
    // ---------------------------
    #[error("Malformed time record: {0}")]
    MalformedRecord(String),

    // ---------------------------
    // Remote collaborator
    // ---------------------------
    #[error("Reporting API unavailable for workspace {workspace} [{since}..{until}]: {reason}")]
    CollaboratorUnavailable {
        workspace: String,
        since: String,
        until: String,
        reason: String,
    },

    #[error("Reporting API error: {0}")]
    Api(String),

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
