//! Composition of `Expected` values.
//!
//! - **Map**: functor map over the success payload, with fault capture
//! - **Bind**: monadic chaining of steps that return `Expected`
//!
//! Both are available as methods and as free functions. The free `fmap`
//! stands in for an infix `<$>`; Rust has no user-defined operators.
//!
//! Map and bind treat faults differently on purpose: map converts a fault
//! carrying the error type into the error state, bind lets every fault from
//! its continuation propagate.

mod bind;
mod map;

pub use bind::bind;
pub use map::fmap;
