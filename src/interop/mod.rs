//! Conversions between `Expected` and neighbouring result types.
//!
//! `std::result::Result` conversions live next to the container in `core`.
//! This module covers Stillwater's `Validation`, so an `Expected` produced
//! by fail-fast composition can join an accumulating validation pass, and a
//! finished validation can be chained with `bind` again.

mod validation;

pub use validation::{from_validation, into_validation};
