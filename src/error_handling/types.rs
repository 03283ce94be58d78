//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for input consumption.
///
/// The run is strictly fail-fast: the first invalid entry (or the first read
/// failure) terminates it, and any tree state built so far is discarded.
#[derive(Error, Debug)]
pub enum InputError {
    /// A non-skippable line failed domain validation. Reported once; input
    /// processing stops at the offending line.
    #[error("input contains invalid entries (line {line_number})")]
    InvalidEntry {
        /// 1-based line number of the first invalid entry.
        line_number: usize,
    },

    /// The underlying stream failed mid-read.
    #[error("Error reading input: {0}")]
    Read(#[from] std::io::Error),
}

/// Error types for report serialization and rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The domain tree could not be encoded as JSON.
    #[error("Error encoding domain tree: {0}")]
    Encode(#[from] serde_json::Error),

    /// The report directory or file could not be written.
    #[error("Error writing report: {0}")]
    Write(#[from] std::io::Error),
}
