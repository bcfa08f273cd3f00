//! Expected: a discriminated result container
//!
//! An [`Expected<T, E>`](core::Expected) holds exactly one of a success value
//! or an error value. Fallible steps are composed declaratively instead of
//! through early returns or unwinding.
//!
//! # Core Concepts
//!
//! - **Container**: `Expected::Value(T)` or `Expected::Error(E)`, never both
//! - **Map**: transform the success payload, pass errors through untouched
//! - **Bind**: chain a step that itself returns an `Expected`, stopping at
//!   the first error
//! - **Faults**: misuse (unwrapping an error) panics; map additionally turns
//!   panics carrying an `E` into the error state
//! - **Same payload types**: `Expected<String, String>` is allowed; every
//!   constructor names its variant, so the two states never get confused
//!
//! # Example
//!
//! ```rust
//! use expected::{bind, fmap, Expected};
//!
//! fn safe_divide(a: i32, b: i32) -> Expected<i32, String> {
//!     if b != 0 {
//!         Expected::value(a / b)
//!     } else {
//!         Expected::error("cannot divide by zero".to_string())
//!     }
//! }
//!
//! let add_one = |x: i32| x + 1;
//!
//! let nine = bind(fmap(add_one, safe_divide(14, 7)), |x| safe_divide(27, x));
//! assert!(nine.is_valid());
//! assert_eq!(nine.get(), 9);
//!
//! let broken = Expected::value(0).bind(|x| safe_divide(27, x));
//! assert!(!broken.is_valid());
//! ```

pub mod combinators;
pub mod core;
pub mod fault;
pub mod interop;

// Re-export commonly used types
pub use crate::combinators::{bind, fmap};
pub use crate::core::{AccessError, Expected, Fallible, Rebind};
pub use crate::fault::raise;
