//! Integration tests for moji-validator.
//!
//! Exercises the public API the way a consumer would: through the crate
//! root, the prelude and the global registry.

mod concurrency;
mod scenarios;
