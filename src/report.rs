//! Stored error reports
//!
//! A report is a [`MultiError`] saved as a TOML or JSON document:
//!
//! ```toml
//! errors = ["name is required", ["port must be positive"]]
//! ```
//!
//! Strings are plain errors, arrays are nested collectors. Every loaded
//! report is checked for empty messages before it is handed back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::multi_error::{ErrorEntry, MultiError};
use crate::validate::Validate;

/// An error report document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    #[serde(default)]
    pub errors: MultiError,
}

/// Serialization format of a report document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Toml,
    Json,
}

impl ReportFormat {
    /// `.toml` files are TOML, everything else is read as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ReportFormat::Toml,
            _ => ReportFormat::Json,
        }
    }
}

impl ErrorReport {
    /// Wrap a collector as a report
    pub fn new(errors: MultiError) -> Self {
        Self { errors }
    }

    /// Consume the report and return its collector
    pub fn into_errors(self) -> MultiError {
        self.errors
    }

    /// Load a report file, picking the format from its extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading report {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| ReportError::read_error(path, e))?;

        Self::parse(&content, ReportFormat::from_path(path), path)
    }

    /// Parse report content in the given format. `path` is only used for error context.
    pub fn parse<P: AsRef<Path>>(content: &str, format: ReportFormat, path: P) -> Result<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();

        let report: ErrorReport = match format {
            ReportFormat::Toml => toml::from_str(content).map_err(|e| ReportError::ParseToml {
                path: path.clone(),
                source: e,
            })?,
            ReportFormat::Json => serde_json::from_str(content).map_err(|e| ReportError::ParseJson {
                path: path.clone(),
                source: e,
            })?,
        };

        report
            .check()
            .map_err(|errors| ReportError::InvalidReport { path, errors })?;

        debug!("Parsed report with {} top-level errors", report.errors.len());
        Ok(report)
    }
}

impl Validate for ErrorReport {
    fn validate(&self) -> MultiError {
        let mut problems = MultiError::new();
        find_empty_messages(&self.errors, "errors", &mut problems);
        problems
    }
}

fn find_empty_messages(errors: &MultiError, path: &str, problems: &mut MultiError) {
    for (i, entry) in errors.iter().enumerate() {
        let entry_path = format!("{}[{}]", path, i);
        match entry {
            ErrorEntry::Plain(message) if message.trim().is_empty() => {
                problems.add(format!("{}: empty error message", entry_path));
            }
            ErrorEntry::Plain(_) => {}
            ErrorEntry::Nested(inner) => find_empty_messages(inner, &entry_path, problems),
        }
    }
}
