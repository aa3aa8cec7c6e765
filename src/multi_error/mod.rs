//! Aggregation of validation errors
//!
//! This module provides [`MultiError`], a collector that accumulates the errors
//! found during a validation pass and renders them as a single, indented
//! report. Collectors can be nested inside each other to mirror the shape of
//! the validated data.

mod render;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// A single entry held by a [`MultiError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorEntry {
    /// A leaf error with only a text message
    Plain(String),
    /// A nested collector, rendered as an indented block
    Nested(MultiError),
}

impl ErrorEntry {
    /// Returns true if this entry is a nested collector
    pub fn is_nested(&self) -> bool {
        matches!(self, ErrorEntry::Nested(_))
    }

    /// Convert this entry into a plain entry with `prefix` glued to the front
    /// of its rendered text.
    ///
    /// No separator is inserted. For a nested collector only the header line
    /// receives the prefix, the lines below keep their original text.
    pub fn prefixed(self, prefix: &str) -> ErrorEntry {
        match self {
            ErrorEntry::Plain(message) => ErrorEntry::Plain(format!("{}{}", prefix, message)),
            ErrorEntry::Nested(inner) => ErrorEntry::Plain(format!("{}{}", prefix, inner)),
        }
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorEntry::Plain(message) => f.write_str(message),
            ErrorEntry::Nested(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl From<String> for ErrorEntry {
    fn from(message: String) -> Self {
        ErrorEntry::Plain(message)
    }
}

impl From<&str> for ErrorEntry {
    fn from(message: &str) -> Self {
        ErrorEntry::Plain(message.to_string())
    }
}

impl From<MultiError> for ErrorEntry {
    fn from(errors: MultiError) -> Self {
        ErrorEntry::Nested(errors)
    }
}

/// Collects the errors of a validation pass.
///
/// Entries keep their insertion order, which is also the order they are
/// rendered in. A `MultiError` is itself an error, so a validation routine can
/// return one and its caller can nest it with [`MultiError::add`] or merge it
/// with [`MultiError::add_with_prefix`].
///
/// ```
/// use multierror::MultiError;
///
/// let mut inner = MultiError::new();
/// inner.add("port must be positive");
///
/// let mut errors = MultiError::new();
/// errors.add("name is required");
/// errors.add_with_prefix(inner, "server.");
///
/// assert_eq!(
///     errors.to_string(),
///     "encountered 2 errors during validation:\n    * name is required\n    * server.port must be positive"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiError {
    errors: Vec<ErrorEntry>,
}

impl MultiError {
    /// Create an empty collector
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an entry to the collection.
    ///
    /// A `MultiError` passed here is kept as a single nested entry and renders
    /// one level deeper than its parent.
    pub fn add(&mut self, entry: impl Into<ErrorEntry>) {
        self.errors.push(entry.into());
    }

    /// Add any displayable error as a plain entry
    pub fn add_error(&mut self, error: impl fmt::Display) {
        self.errors.push(ErrorEntry::Plain(error.to_string()));
    }

    /// Add an entry with `prefix` prepended to its text. The prefix can be empty.
    ///
    /// A nested collector is flattened by one level: each of its direct
    /// entries is prefixed and appended to `self` individually.
    pub fn add_with_prefix(&mut self, entry: impl Into<ErrorEntry>, prefix: &str) {
        match entry.into() {
            ErrorEntry::Nested(inner) => {
                trace!(count = inner.len(), prefix, "flattening nested errors");
                self.errors
                    .extend(inner.errors.into_iter().map(|e| e.prefixed(prefix)));
            }
            plain => self.errors.push(plain.prefixed(prefix)),
        }
    }

    /// Returns true if at least one error has been collected
    pub fn has_any(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of direct entries
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The direct entries in insertion order
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// Iterate over the direct entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorEntry> {
        self.errors.iter()
    }

    /// Consume the collector and return its direct entries
    pub fn into_errors(self) -> Vec<ErrorEntry> {
        self.errors
    }

    /// `Ok(())` when nothing was collected, otherwise `Err(self)`
    pub fn into_result(self) -> std::result::Result<(), MultiError> {
        if self.has_any() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::header(self.errors.len()))?;
        for entry in &self.errors {
            f.write_str("\n")?;
            f.write_str(&render::bullet_block(&entry.to_string()))?;
        }
        Ok(())
    }
}

impl std::error::Error for MultiError {}

impl From<Vec<ErrorEntry>> for MultiError {
    fn from(errors: Vec<ErrorEntry>) -> Self {
        Self { errors }
    }
}

impl Extend<ErrorEntry> for MultiError {
    fn extend<I: IntoIterator<Item = ErrorEntry>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<ErrorEntry> for MultiError {
    fn from_iter<I: IntoIterator<Item = ErrorEntry>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MultiError {
    type Item = ErrorEntry;
    type IntoIter = std::vec::IntoIter<ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a ErrorEntry;
    type IntoIter = std::slice::Iter<'a, ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
