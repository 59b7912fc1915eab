//! Unified application error type.
//! All modules (store, storage, cli, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    // ---------------------------
    // Capture validation
    // ---------------------------
    #[error("Invalid well-being score '{0}': expected an integer between 1 and 10")]
    InvalidScore(i64),

    #[error("No medications given: provide at least one label, e.g. --meds \"Vitamin D, Aspirin\"")]
    EmptyMedications,

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No entry found with id {0}")]
    EntryNotFound(String),

    #[error("No entries recorded for medication '{0}'")]
    UnknownMedication(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
