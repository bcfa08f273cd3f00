//! Stillwater `Validation` interop.

use crate::core::Expected;
use stillwater::validation::Validation;

impl<T, E> From<Validation<T, E>> for Expected<T, E> {
    fn from(validation: Validation<T, E>) -> Self {
        match validation {
            Validation::Success(value) => Expected::Value(value),
            Validation::Failure(error) => Expected::Error(error),
        }
    }
}

impl<T, E> From<Expected<T, E>> for Validation<T, E> {
    fn from(expected: Expected<T, E>) -> Self {
        match expected {
            Expected::Value(value) => Validation::Success(value),
            Expected::Error(error) => Validation::Failure(error),
        }
    }
}

/// Hand an `Expected` to Stillwater's accumulating validation.
///
/// # Example
///
/// ```rust
/// use expected::interop::into_validation;
/// use expected::Expected;
/// use stillwater::validation::Validation;
///
/// let checked: Expected<u8, String> = Expected::value(7);
/// assert!(matches!(into_validation(checked), Validation::Success(7)));
/// ```
pub fn into_validation<T, E>(expected: Expected<T, E>) -> Validation<T, E> {
    expected.into()
}

/// Resume fail-fast composition from a finished validation.
pub fn from_validation<T, E>(validation: Validation<T, E>) -> Expected<T, E> {
    validation.into()
}
