//! Validation of values that report every problem at once

use crate::multi_error::MultiError;

/// A value that can check itself and report all of its problems.
///
/// Implementors return a collector instead of stopping at the first failure.
/// A parent validation can keep a child's report as a nested block with
/// [`MultiError::add`] or merge it under a field prefix with
/// [`MultiError::add_with_prefix`].
pub trait Validate {
    /// Collect every problem with this value
    fn validate(&self) -> MultiError;

    /// `Ok(())` if [`Validate::validate`] found nothing
    fn check(&self) -> Result<(), MultiError> {
        self.validate().into_result()
    }
}
