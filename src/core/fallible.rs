//! Type-level access to an `Expected`'s payload types.
//!
//! Generic code that builds a new container on the same error type (bind's
//! and map's return types) names it through these aliases instead of
//! spelling out both parameters.

use super::expected::Expected;

/// Exposes the success and error types of a fallible container.
///
/// # Example
///
/// ```rust
/// use expected::{Expected, Fallible, Rebind};
///
/// type Parsed = Expected<i32, String>;
///
/// fn describe(_: <Parsed as Fallible>::Value) {}
/// describe(42);
///
/// // Same error type, new success type
/// let rebound: Rebind<Parsed, Vec<i32>> = Expected::value(vec![42]);
/// assert!(rebound.is_valid());
/// ```
pub trait Fallible {
    /// The success payload type
    type Value;

    /// The error payload type
    type Error;
}

impl<T, E> Fallible for Expected<T, E> {
    type Value = T;
    type Error = E;
}

/// A container with success type `U` and the error type of `R`.
pub type Rebind<R, U> = Expected<U, <R as Fallible>::Error>;
