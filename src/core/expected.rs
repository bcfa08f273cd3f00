//! The `Expected` container.
//!
//! `Expected<T, E>` is a native sum type, so the "exactly one payload is
//! live" rule is enforced by the compiler rather than by a hand-maintained
//! discriminant.

use super::error::AccessError;
use serde::{Deserialize, Serialize};

/// A value that is either a success payload `T` or an error payload `E`.
///
/// The state is fixed at construction. Combinators consume the receiver and
/// produce a new `Expected`; nothing mutates a live payload's state in place.
///
/// # Construction
///
/// Each way of building an `Expected` is only available when the payload
/// types support it:
///
/// - `Default` needs `T: Default` and `E: Default`, and yields a value
/// - `Clone`/`Copy` need both payloads to be `Clone`/`Copy`
/// - `Expected::value` and `Expected::error` place no bounds on either payload
///
/// A missing capability is a compile error, not a runtime failure:
///
/// ```rust,compile_fail
/// use expected::Expected;
///
/// struct NoDefault;
///
/// let _ = Expected::<NoDefault, String>::default();
/// ```
///
/// ```rust,compile_fail
/// use expected::Expected;
///
/// struct NoDefault;
///
/// let _ = Expected::<i32, NoDefault>::default();
/// ```
///
/// ```rust,compile_fail
/// use expected::Expected;
///
/// struct NoClone;
///
/// let original: Expected<NoClone, String> = Expected::value(NoClone);
/// let _ = original.clone();
/// ```
///
/// Constructing from a bare payload only needs that payload:
///
/// ```rust
/// use expected::Expected;
///
/// struct NoDefault;
///
/// assert!(Expected::<i32, NoDefault>::value(3).is_valid());
/// assert!(!Expected::<i32, NoDefault>::error(NoDefault).is_valid());
/// ```
///
/// `T` and `E` may be the same type. Every constructor names its variant,
/// so `Expected<String, String>` is never ambiguous and is accepted.
///
/// # Example
///
/// ```rust
/// use expected::Expected;
///
/// let ok: Expected<i32, String> = Expected::value(1337);
/// assert!(ok.is_valid());
///
/// let failed: Expected<i32, String> = Expected::error("nope".to_string());
/// assert!(!failed.is_valid());
///
/// let defaulted: Expected<i32, String> = Expected::default();
/// assert_eq!(defaulted.get(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expected<T, E> {
    /// The computation succeeded
    Value(T),

    /// The computation failed
    Error(E),
}

impl<T, E> Default for Expected<T, E>
where
    T: Default,
    E: Default,
{
    fn default() -> Self {
        Expected::Value(T::default())
    }
}

impl<T, E> Expected<T, E> {
    /// Wrap a success payload.
    pub fn value(value: T) -> Self {
        Expected::Value(value)
    }

    /// Wrap an error payload.
    pub fn error(error: E) -> Self {
        Expected::Error(error)
    }

    /// Monadic unit. Same as [`Expected::value`].
    pub fn pure(value: T) -> Self {
        Expected::Value(value)
    }

    /// Returns `true` iff the success payload is live.
    pub fn is_valid(&self) -> bool {
        matches!(self, Expected::Value(_))
    }

    /// Returns `true` iff the error payload is live.
    pub fn is_error(&self) -> bool {
        !self.is_valid()
    }

    /// Take the success payload without checking.
    ///
    /// Callers are expected to check [`is_valid`](Self::is_valid) first.
    ///
    /// # Panics
    ///
    /// Panics with [`AccessError::ErrorState`] if the error payload is live.
    /// This is a caller bug, not a domain failure.
    ///
    /// ```rust,should_panic
    /// use expected::Expected;
    ///
    /// let failed: Expected<i32, &str> = Expected::error("cannot divide by zero");
    /// failed.get();
    /// ```
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Expected::Value(value) => value,
            Expected::Error(_) => panic!("{}", AccessError::ErrorState),
        }
    }

    /// Borrow the success payload without checking.
    ///
    /// # Panics
    ///
    /// Panics with [`AccessError::ErrorState`] if the error payload is live.
    #[track_caller]
    pub fn get_ref(&self) -> &T {
        match self {
            Expected::Value(value) => value,
            Expected::Error(_) => panic!("{}", AccessError::ErrorState),
        }
    }

    /// Take the error payload without checking.
    ///
    /// # Panics
    ///
    /// Panics with [`AccessError::ValueState`] if the success payload is live.
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Expected::Value(_) => panic!("{}", AccessError::ValueState),
            Expected::Error(error) => error,
        }
    }

    /// Take the success payload, reporting misuse as an error value.
    ///
    /// The error payload is dropped when the access fails.
    pub fn try_get(self) -> Result<T, AccessError> {
        match self {
            Expected::Value(value) => Ok(value),
            Expected::Error(_) => Err(AccessError::ErrorState),
        }
    }

    /// The success payload, if live.
    pub fn ok(self) -> Option<T> {
        match self {
            Expected::Value(value) => Some(value),
            Expected::Error(_) => None,
        }
    }

    /// The error payload, if live.
    pub fn err(self) -> Option<E> {
        match self {
            Expected::Value(_) => None,
            Expected::Error(error) => Some(error),
        }
    }

    /// Borrow the live payload.
    pub fn as_ref(&self) -> Expected<&T, &E> {
        match self {
            Expected::Value(value) => Expected::Value(value),
            Expected::Error(error) => Expected::Error(error),
        }
    }

    /// Mutably borrow the live payload.
    pub fn as_mut(&mut self) -> Expected<&mut T, &mut E> {
        match self {
            Expected::Value(value) => Expected::Value(value),
            Expected::Error(error) => Expected::Error(error),
        }
    }

    /// Convert into a standard `Result`, so `?` can be used at the boundary.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Expected<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Expected::Value(value),
            Err(error) => Expected::Error(error),
        }
    }
}

impl<T, E> From<Expected<T, E>> for Result<T, E> {
    fn from(expected: Expected<T, E>) -> Self {
        match expected {
            Expected::Value(value) => Ok(value),
            Expected::Error(error) => Err(error),
        }
    }
}
