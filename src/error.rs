//! Error types for loading, configuring and exporting benchmark tables.
//!
//! Chart-data derivation never fails: inapplicable metrics are skipped.
//! Only file-level problems surface as errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Path does not exist
    #[error("File '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    /// Path exists but is a directory or something else
    #[error("File '{}' is not a file.", .0.display())]
    NotAFile(PathBuf),

    /// Header parsed but no data rows
    #[error("File '{}' is corrupted (no data rows)", .0.display())]
    EmptyTable(PathBuf),

    #[error("Column '{0}' not found")]
    MissingColumn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error),

    /// Window could not be created or the event loop failed
    #[error("GUI error: {0}")]
    Gui(String),
}

impl From<eframe::Error> for Error {
    fn from(e: eframe::Error) -> Self {
        Error::Gui(e.to_string())
    }
}
