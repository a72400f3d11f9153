//! Error types for the zcount-core library.
//!
//! A file that cannot be opened or read is reported and skipped. An
//! unparsable limit aborts the run before any source is scanned. A broken
//! output stream mutes the report but leaves the tally intact.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for zcount operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all zcount operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A limit argument is not a complete non-negative integer literal
    #[error("'{arg}' is not a non-negative integer")]
    InvalidNumber {
        /// The argument exactly as given on the command line
        arg: String,
    },

    /// Failed to open an input file
    #[error("{}: {}", .path.display(), describe_io(.source))]
    Open {
        /// Path to the file that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed while reading an already opened source
    #[error("{label}: {}", describe_io(.source))]
    Read {
        /// Label of the source (file name or `stdin`)
        label: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a report line
    #[error("failed to write report: {0}")]
    Write(#[source] std::io::Error),
}

impl Error {
    /// Creates a new invalid number error
    pub fn invalid_number(arg: impl Into<String>) -> Self {
        Self::InvalidNumber { arg: arg.into() }
    }

    /// Creates a new file open error
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Creates a new read error
    pub fn read(label: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            label: label.into(),
            source,
        }
    }
}

/// OS error text without the trailing `(os error N)` that `io::Error` appends.
fn describe_io(err: &std::io::Error) -> String {
    let text = err.to_string();
    match text.rfind(" (os error ") {
        Some(pos) if err.raw_os_error().is_some() => text[..pos].to_string(),
        _ => text,
    }
}
