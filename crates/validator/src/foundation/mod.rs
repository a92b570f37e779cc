//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Outcome**: [`ValidationOutcome`]
//! - **Errors**: [`ErrorDetail`], [`RegistryError`]
//!
//! Everything here is an immutable value type. Validators hold no state
//! between calls, so the same validator can be shared across threads and
//! called any number of times with identical results.

pub mod error;
pub mod outcome;
pub mod traits;

pub use error::{ErrorDetail, RegistryError};
pub use outcome::ValidationOutcome;
pub use traits::{Validate, ValidateExt};

/// A validation result carrying the single error that decided it.
pub type ValidationResult<T> = Result<T, ErrorDetail>;
