//! Test utilities and helpers
//!
//! Builders for channel and community fixtures plus list assertions, shared
//! by unit tests and the integration suites under `tests/`.

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
