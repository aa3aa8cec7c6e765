//! multierror - aggregate validation errors into one indented report
//!
//! The heart of this crate is [`MultiError`], a collector that gathers every
//! problem found during a validation pass instead of stopping at the first.
//! Collectors nest, so a validation routine for a sub-object can return its
//! own `MultiError` and the parent can keep it as an indented block or merge
//! it under a prefix.
//!
//! Collected errors can also be stored as TOML or JSON documents and loaded
//! back with the [`report`] module.

pub mod error;
pub mod multi_error;
pub mod report;
pub mod validate;

// Re-export commonly used types
pub use error::{CollectExt, ReportError, Result, collect_nested};
pub use multi_error::{ErrorEntry, MultiError};
pub use report::ErrorReport;
pub use validate::Validate;
