//! Helpers for funnelling fallible results into a collector
//!
//! Validation code often runs many independent checks that each produce a
//! `Result`. These extension traits let it keep going after a failure and
//! record the error instead of returning early.

use std::fmt::Display;

use crate::multi_error::MultiError;

/// Extension trait for Result to record errors in a [`MultiError`]
pub trait CollectExt<T> {
    /// Record the error's text in `errors` and return `None` on failure
    fn collect_err(self, errors: &mut MultiError) -> Option<T>;

    /// Record the error's text with `prefix` prepended and return `None` on failure
    fn collect_err_with_prefix(self, errors: &mut MultiError, prefix: &str) -> Option<T>;
}

impl<T, E> CollectExt<T> for std::result::Result<T, E>
where
    E: Display,
{
    fn collect_err(self, errors: &mut MultiError) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                errors.add_error(err);
                None
            }
        }
    }

    fn collect_err_with_prefix(self, errors: &mut MultiError, prefix: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                errors.add_with_prefix(err.to_string(), prefix);
                None
            }
        }
    }
}

/// Keep a failed child validation as one nested block of `errors`
pub fn collect_nested<T>(
    result: std::result::Result<T, MultiError>,
    errors: &mut MultiError,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(nested) => {
            errors.add(nested);
            None
        }
    }
}
