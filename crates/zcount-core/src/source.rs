//! Input sources: named files or standard input.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Where zero-bytes are counted from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input, used when no file arguments are given
    Stdin,
    /// A file named on the command line
    File(PathBuf),
}

impl Source {
    /// Creates a file source
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Label used in diagnostics
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Self::Stdin => Cow::Borrowed("stdin"),
            Self::File(path) => path.to_string_lossy(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
