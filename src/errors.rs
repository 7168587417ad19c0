//! Defines application-specific error types.
//!
//! This module provides the [`Error`] enum, which categorizes the errors that
//! can occur during a run, offering more context than generic I/O errors.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `files2md`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration (bad root directory, output path conflict, ...).
    ///
    /// Configuration errors are fatal and are raised before any file is
    /// processed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A `git ls-files` invocation failed.
    #[error("git listing failed in '{root}': {reason}")]
    GitListing {
        /// The repository root the command ran in.
        root: String,
        /// What went wrong (exit status or stderr excerpt).
        reason: String,
    },
}

/// Helper to create an [`Error::Io`] with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
