//! The result of running a validator over a piece of text.

use serde::Serialize;

use crate::foundation::ErrorDetail;

/// Outcome of a validation run.
///
/// `Valid` carries the validated text so callers can use the validator's
/// output without going back to the raw input. `Invalid` carries the single
/// error that decided the outcome.
///
/// Serializes as `{"status": "valid", "detail": "<text>"}` or
/// `{"status": "invalid", "detail": {"kind": "<code>", ...}}`.
///
/// # Examples
///
/// ```rust
/// use moji_validator::foundation::{ErrorDetail, ValidationOutcome};
///
/// let ok = ValidationOutcome::Valid("田中太郎".to_string());
/// assert_eq!(ok.text(), Some("田中太郎"));
///
/// let err = ValidationOutcome::Invalid(ErrorDetail::Empty);
/// assert_eq!(err.error(), Some(&ErrorDetail::Empty));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
#[must_use = "a validation outcome must be inspected"]
pub enum ValidationOutcome {
    /// Every rule passed; holds the validated text.
    Valid(String),
    /// The first failing rule's error.
    Invalid(ErrorDetail),
}

impl ValidationOutcome {
    /// Returns `true` for [`ValidationOutcome::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for [`ValidationOutcome::Invalid`].
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The validated text, if valid.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Valid(text) => Some(text),
            Self::Invalid(_) => None,
        }
    }

    /// The error, if invalid.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorDetail> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<String, ErrorDetail> {
        match self {
            Self::Valid(text) => Ok(text),
            Self::Invalid(error) => Err(error),
        }
    }
}

impl From<Result<String, ErrorDetail>> for ValidationOutcome {
    fn from(result: Result<String, ErrorDetail>) -> Self {
        match result {
            Ok(text) => Self::Valid(text),
            Err(error) => Self::Invalid(error),
        }
    }
}
