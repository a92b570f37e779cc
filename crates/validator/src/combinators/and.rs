//! AND combinator - first-failure conjunction of two validators
//!
//! # Examples
//!
//! ```rust
//! use moji_validator::combinators::And;
//! use moji_validator::prelude::*;
//!
//! let validator = And::new(empty(), length(1, 5));
//! assert!(validator.validate("hello").is_valid());
//! assert_eq!(validator.validate("").error(), Some(&ErrorDetail::Empty));
//! ```

use std::borrow::Cow;

use crate::foundation::{ErrorDetail, Validate};

/// Combines two validators with logical AND.
///
/// The left validator runs first. If it fails, its error is returned and
/// the right validator is not evaluated.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn check(&self, input: &str) -> Result<(), ErrorDetail> {
        self.left.check(input)?;
        self.right.check(input)?;
        Ok(())
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
            "{} and {}",
            self.left.describe(),
            self.right.describe()
        ))
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}
