//! Core container types.
//!
//! This module contains the data side of the crate:
//! - The `Expected` sum type and its construction rules
//! - Checked and unchecked access to the payload
//! - Type-level aliases used to derive combinator return types
//!
//! Nothing in here runs user code; composition lives in `combinators`.

mod error;
mod expected;
mod fallible;

pub use error::AccessError;
pub use expected::Expected;
pub use fallible::{Fallible, Rebind};
