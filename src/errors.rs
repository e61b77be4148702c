//! Unified application error type.
//! Loader, config, cleaner and CLI all return AppError so that both binaries
//! can report failures the same way and exit with status 1.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Input loading
    // ---------------------------
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to load CSV: {0}")]
    LoadFailure(String),

    // ---------------------------
    // IO / CSV writing
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // User interaction
    // ---------------------------
    #[error("{0}")]
    Cancelled(String),
}

pub type AppResult<T> = Result<T, AppError>;
