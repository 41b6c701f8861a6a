//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Coarse classification used at the CLI boundary to decide how an error
/// is presented to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Access,
    Config,
    Storage,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Employee name must not be empty")]
    EmptyName,

    #[error("Please select a valid employee name")]
    NoSelection,

    #[error("Unknown or inactive employee: {0}")]
    UnknownEmployee(String),

    #[error("Invalid task category: {0}")]
    InvalidCategory(String),

    #[error("Invalid action type: {0}")]
    InvalidAction(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    // ---------------------------
    // Access gate
    // ---------------------------
    #[error("Admin access denied: wrong secret")]
    Unauthorized,

    #[error("Admin secret not provided (use --secret or RWORKLOG_ADMIN_SECRET)")]
    MissingSecret,

    #[error("Admin secret is not configured (run `config --set-admin-secret`)")]
    AdminSecretNotSet,

    #[error("Stored admin secret hash is malformed")]
    MalformedSecretHash,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Io(_) | AppError::Db(_) | AppError::Migration(_) | AppError::Export(_) => {
                ErrorKind::Storage
            }
            AppError::EmptyName
            | AppError::NoSelection
            | AppError::UnknownEmployee(_)
            | AppError::InvalidCategory(_)
            | AppError::InvalidAction(_)
            | AppError::InvalidDate(_)
            | AppError::InvalidRange(_)
            | AppError::InvalidTimezone(_) => ErrorKind::Validation,
            AppError::Unauthorized
            | AppError::MissingSecret
            | AppError::MalformedSecretHash => ErrorKind::Access,
            AppError::AdminSecretNotSet
            | AppError::Config(_)
            | AppError::ConfigLoad
            | AppError::ConfigSave => ErrorKind::Config,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
