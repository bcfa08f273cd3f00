//! Faults: panics that carry a typed payload.
//!
//! Domain errors normally travel as `Expected::Error` values. A fault is the
//! unwinding path: [`raise`] panics with an arbitrary payload, and `map`
//! turns faults whose payload is the container's error type back into an
//! error value.
//!
//! Capture relies on unwinding. Under `panic = "abort"` every fault is fatal.

#[cfg(feature = "tracing")]
use std::any::type_name;
use std::panic::{self, AssertUnwindSafe};

/// Raise a fault carrying `error` as its payload.
///
/// Inside a function passed to `map`, a fault whose payload has the
/// container's error type becomes that container's error state. Anywhere
/// else it behaves like any other panic.
///
/// The panic hook runs before `map` recovers the payload. With the default
/// hook every raised fault prints `thread '..' panicked at` to stderr, even
/// when it ends up as an error value.
///
/// # Example
///
/// ```rust
/// use expected::{fmap, raise, Expected};
///
/// #[derive(Debug, PartialEq)]
/// struct LogicError(&'static str);
///
/// let start: Expected<i32, LogicError> = Expected::value(1337);
/// let result = fmap(|_: i32| -> i32 { raise(LogicError("bad times")) }, start);
///
/// assert!(!result.is_valid());
/// assert_eq!(result.into_error(), LogicError("bad times"));
/// ```
#[track_caller]
pub fn raise<E: Send + 'static>(error: E) -> ! {
    panic::panic_any(error)
}

/// Run `f`, catching a fault whose payload is `E`.
///
/// Faults with any other payload are resumed unchanged.
pub(crate) fn capture<R, E: 'static>(f: impl FnOnce() -> R) -> Result<R, E> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(output) => Ok(output),
        Err(payload) => match payload.downcast::<E>() {
            Ok(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    error_type = type_name::<E>(),
                    "converted fault into error payload"
                );
                Err(*error)
            }
            Err(foreign) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    expected_type = type_name::<E>(),
                    "resuming fault with foreign payload"
                );
                panic::resume_unwind(foreign)
            }
        },
    }
}
