//! Prelude module for convenient imports.
//!
//! `use moji_validator::prelude::*;` brings in the traits, outcome and
//! error types, every rule constructor, and the policy types.
//!
//! # Examples
//!
//! ```rust
//! use moji_validator::prelude::*;
//!
//! let zip = Policy::new("zip", empty()).rule(length(7, 7)).rule(half_width_numeric());
//! assert!(zip.validate("1000001").is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits, outcome, errors
// ============================================================================

pub use crate::foundation::{
    ErrorDetail, RegistryError, Validate, ValidateExt, ValidationOutcome, ValidationResult,
};

// ============================================================================
// CLASSIFIER
// ============================================================================

pub use crate::classify::{CharacterClass, classify};

// ============================================================================
// RULES
// ============================================================================

pub use crate::rules::{
    CharacterClassRule, EmptyRule, LengthRule, class, email_format, empty, full_width,
    half_width_alphabetic, half_width_alphanumeric, half_width_numeric, hiragana, katakana,
    length, phone_number,
};

// ============================================================================
// COMPOSITION
// ============================================================================

pub use crate::combinators::{And, and};
pub use crate::policy::Policy;
pub use crate::registry::{PolicyName, PolicyRegistry};
