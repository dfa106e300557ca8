//! Typed data-loading errors.

use std::path::PathBuf;

/// Failure while loading a data directory.
#[derive(Debug)]
pub enum DataError {
    /// A CSV file could not be opened.
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A row could not be parsed or deserialized.
    Csv { path: PathBuf, source: csv::Error },
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "malformed row in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}
