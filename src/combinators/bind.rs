//! Monadic bind.

use crate::core::{Expected, Rebind};

impl<T, E> Expected<T, E> {
    /// Chain a step that itself returns an `Expected`.
    ///
    /// An error short-circuits: `f` is never invoked and the error is carried
    /// into the result. A value is handed to `f` and its result is returned
    /// as is. Faults raised by `f` are not caught.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let to_vector = |val: i32| -> Expected<Vec<i32>, String> { Expected::value(vec![val; 128]) };
    ///
    /// let expected_vec = Expected::value(1337).bind(to_vector);
    /// assert!(expected_vec.is_valid());
    /// assert_eq!(expected_vec.get().len(), 128);
    /// ```
    pub fn bind<U, F>(self, f: F) -> Rebind<Self, U>
    where
        F: FnOnce(T) -> Expected<U, E>,
    {
        match self {
            Expected::Value(value) => f(value),
            Expected::Error(error) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("bind short-circuited on error");
                Expected::Error(error)
            }
        }
    }
}

/// Free-function form of [`Expected::bind`].
///
/// # Example
///
/// ```rust
/// use expected::{bind, Expected};
///
/// fn safe_divide_27(x: i32) -> Expected<i32, String> {
///     if x != 0 {
///         Expected::value(27 / x)
///     } else {
///         Expected::error("cannot divide by zero".into())
///     }
/// }
///
/// assert_eq!(bind(Expected::value(3), safe_divide_27).get(), 9);
/// assert!(!bind(Expected::value(0), safe_divide_27).is_valid());
/// ```
pub fn bind<T, U, E, F>(r: Expected<T, E>, f: F) -> Expected<U, E>
where
    F: FnOnce(T) -> Expected<U, E>,
{
    r.bind(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::raise;
    use std::cell::Cell;
    use std::panic;

    #[derive(Debug, Clone, PartialEq)]
    struct LogicError(&'static str);

    type TestExpected = Expected<i32, LogicError>;

    fn safe_divide_27(x: i32) -> TestExpected {
        if x != 0 {
            Expected::value(27 / x)
        } else {
            Expected::error(LogicError("cannot divide by zero"))
        }
    }

    #[test]
    fn bind_hands_value_to_continuation() {
        assert_eq!(bind(TestExpected::value(3), safe_divide_27), Expected::Value(9));
    }

    #[test]
    fn bind_returns_continuation_error() {
        let expected = TestExpected::value(0).bind(safe_divide_27);
        assert!(!expected.is_valid());
        assert_eq!(expected.err(), Some(LogicError("cannot divide by zero")));
    }

    #[test]
    fn bind_short_circuits_on_error() {
        let called = Cell::new(false);
        let expected = TestExpected::error(LogicError("first")).bind(|x| {
            called.set(true);
            safe_divide_27(x)
        });

        assert!(!called.get());
        assert_eq!(expected, Expected::Error(LogicError("first")));
    }

    #[test]
    fn bind_can_change_value_type() {
        let expected = TestExpected::value(1337).bind(|val| Expected::value(vec![val; 128]));
        assert!(expected.is_valid());
        assert!(expected.get().iter().all(|&v| v == 1337));
    }

    #[test]
    fn bind_does_not_catch_faults() {
        let outcome = panic::catch_unwind(|| {
            TestExpected::value(1).bind(|_| -> TestExpected { raise(LogicError("escaped")) })
        });

        let payload = outcome.expect_err("bind must not capture faults");
        assert_eq!(
            payload.downcast_ref::<LogicError>(),
            Some(&LogicError("escaped"))
        );
    }
}
