//! Error types and definitions for multierror
//!
//! These are the failures of loading a stored error report. The aggregated
//! validation errors themselves are carried by [`MultiError`].

use std::path::PathBuf;
use thiserror::Error;

use crate::multi_error::MultiError;

/// Main error type for multierror operations
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error report read errors
    #[error("Error reading report {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error report in TOML form could not be parsed
    #[error("Error parsing TOML report {path}: {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Error report in JSON form could not be parsed
    #[error("Error parsing JSON report {path}: {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Error report parsed but its contents are malformed
    #[error("Invalid report {path}: {errors}")]
    InvalidReport { path: PathBuf, errors: MultiError },
}

impl ReportError {
    /// Create a read error for the given report path
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Read {
            path: path.into(),
            source,
        }
    }

    /// The report the failure refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            ReportError::Read { path, .. }
            | ReportError::ParseToml { path, .. }
            | ReportError::ParseJson { path, .. }
            | ReportError::InvalidReport { path, .. } => path,
        }
    }
}

/// Result type alias for multierror operations
pub type Result<T> = std::result::Result<T, ReportError>;
