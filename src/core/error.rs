//! Access error types.

use thiserror::Error;

/// Errors raised when a payload is requested from the wrong state.
///
/// The unchecked accessors panic with this error's display text; `try_get`
/// returns it as a value.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The success payload was requested but the error payload is live
    #[error("bad access: Expected holds an error, not a value")]
    ErrorState,

    /// The error payload was requested but the success payload is live
    #[error("bad access: Expected holds a value, not an error")]
    ValueState,
}
