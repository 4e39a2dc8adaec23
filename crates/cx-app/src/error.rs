//! Error types for the cx-app service layer.

use std::path::PathBuf;

/// Application error type shared by the CLI and the desktop UI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read data file: {path}")]
    DataFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid data file {path}: {message}")]
    DataFile { path: PathBuf, message: String },

    #[error("No entries loaded")]
    NoEntries,

    #[error("Filter error: {0}")]
    Filter(#[from] cx_expr::ExprError),

    #[error("Failed to read preset file: {path}")]
    PresetFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write preset file: {path}")]
    PresetFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Preset error: {0}")]
    Preset(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cx-app operations.
pub type AppResult<T> = Result<T, AppError>;