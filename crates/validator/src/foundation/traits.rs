//! Core traits for the validation system
//!
//! This module defines the one capability shared by atomic rules and
//! composite policies, plus the extension trait that adds combinators.

use std::borrow::Cow;
use std::sync::Arc;

use crate::foundation::{ErrorDetail, ValidationOutcome};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The capability every validator has: judge a whole string.
///
/// Atomic rules and composite policies implement the same trait, so a
/// policy can contain other policies without any special casing.
///
/// Implementors provide [`check`](Validate::check); callers usually want
/// [`validate`](Validate::validate), which packages the result as a
/// [`ValidationOutcome`].
///
/// # Examples
///
/// ```rust
/// use moji_validator::foundation::{ErrorDetail, Validate};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     fn check(&self, input: &str) -> Result<(), ErrorDetail> {
///         if input.contains(' ') {
///             Err(ErrorDetail::NotHalfWidthAlphanumeric)
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_valid());
/// assert!(NoSpaces.validate("a b").is_invalid());
/// ```
pub trait Validate {
    /// Checks the input.
    ///
    /// Returns `Err` with the one error that describes why the input was
    /// rejected. Never panics for invalid input.
    fn check(&self, input: &str) -> Result<(), ErrorDetail>;

    /// Validates the input and returns the outcome.
    ///
    /// On success the outcome carries an owned copy of `input`.
    fn validate(&self, input: &str) -> ValidationOutcome {
        match self.check(input) {
            Ok(()) => ValidationOutcome::Valid(input.to_owned()),
            Err(error) => ValidationOutcome::Invalid(error),
        }
    }

    /// A short label for listings and logs, e.g. `length(1..=20)`.
    ///
    /// Defaults to the bare type name.
    fn describe(&self) -> Cow<'static, str> {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        Cow::Borrowed(base.rsplit("::").next().unwrap_or(base))
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn check(&self, input: &str) -> Result<(), ErrorDetail> {
        (**self).check(input)
    }

    fn describe(&self) -> Cow<'static, str> {
        (**self).describe()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn check(&self, input: &str) -> Result<(), ErrorDetail> {
        (**self).check(input)
    }

    fn describe(&self) -> Cow<'static, str> {
        (**self).describe()
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn check(&self, input: &str) -> Result<(), ErrorDetail> {
        (**self).check(input)
    }

    fn describe(&self) -> Cow<'static, str> {
        (**self).describe()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement [`Validate`].
///
/// # Examples
///
/// ```rust
/// use moji_validator::prelude::*;
///
/// let validator = empty().and(half_width_numeric());
/// assert!(validator.validate("0120").is_valid());
/// assert_eq!(validator.validate("").error(), Some(&ErrorDetail::Empty));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with first-failure semantics.
    ///
    /// `self` runs first; `other` runs only if `self` passed.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
    {
        And::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;

// ============================================================================
// TESTS
// ============================================================================
