//! Word loader error module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a word source.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The word file does not exist.
    #[error("Word file not found: {0}")]
    FileNotFound(PathBuf),

    /// The word source could not be read.
    #[error("Failed to read words from {source_name}: {source}")]
    Read {
        /// File path or other description of the source
        source_name: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The word source is not valid UTF-8.
    #[error("Word source {0} is not valid UTF-8")]
    InvalidUtf8(String),
}
