//! Error handling for the multierror crate
//!
//! This module provides the operational error type, result alias and helpers
//! that record failures in a [`crate::MultiError`].

pub mod context;
pub mod types;

pub use context::{CollectExt, collect_nested};
pub use types::{ReportError, Result};
