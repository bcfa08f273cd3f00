//! Functor map.

use crate::core::{Expected, Rebind};
use crate::fault;

impl<T, E: 'static> Expected<T, E> {
    /// Transform the success payload, leaving an error untouched.
    ///
    /// `f` is only invoked when the value is live. If `f` raises a fault
    /// whose payload is `E` (see [`raise`](crate::fault::raise)), the fault
    /// is caught and becomes the error payload of the result. Faults with
    /// any other payload propagate to the caller.
    ///
    /// A captured fault is still reported by the panic hook, so the default
    /// hook prints a `thread '..' panicked at` line to stderr even though
    /// `map` recovers. Install a quieter hook with `std::panic::set_hook` if
    /// that output matters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expected::Expected;
    ///
    /// let start: Expected<i32, String> = Expected::value(1337);
    /// assert_eq!(start.map(|x| x + 1), Expected::value(1338));
    ///
    /// let failed: Expected<i32, String> = Expected::error("nope".into());
    /// assert_eq!(failed.map(|x| x + 1), Expected::error("nope".into()));
    /// ```
    pub fn map<U, F>(self, f: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Expected::Value(value) => match fault::capture::<U, E>(move || f(value)) {
                Ok(output) => Expected::Value(output),
                Err(error) => Expected::Error(error),
            },
            Expected::Error(error) => Expected::Error(error),
        }
    }
}

impl<T, E> Expected<T, E> {
    /// Transform the error payload, leaving a value untouched.
    ///
    /// No fault capture happens here; a panic in `f` propagates.
    pub fn map_err<G, F>(self, f: F) -> Expected<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Expected::Value(value) => Expected::Value(value),
            Expected::Error(error) => Expected::Error(f(error)),
        }
    }
}

/// Free-function form of [`Expected::map`], written `f <$> r` elsewhere.
///
/// # Example
///
/// ```rust
/// use expected::{fmap, Expected};
///
/// let add_one = |x: i32| x + 1;
/// let r: Expected<i32, String> = Expected::value(2);
/// assert_eq!(fmap(add_one, r).get(), 3);
/// ```
pub fn fmap<F, T, U, E>(f: F, r: Expected<T, E>) -> Rebind<Expected<T, E>, U>
where
    F: FnOnce(T) -> U,
    E: 'static,
{
    r.map(f)
}
