//! Combinators for composing validators
//!
//! [`And`] chains two validators with first-failure semantics. For an
//! ordered list of any length, use [`Policy`](crate::policy::Policy).

pub mod and;

pub use and::{And, and};
