//! Error types for validation failures
//!
//! Validation failures are data, not faults: every rule reports its
//! failure as an [`ErrorDetail`] value and callers branch on it. The only
//! fault in the crate is [`RegistryError`], raised when code asks for a
//! policy that was never registered.

use serde::Serialize;

// ============================================================================
// ERROR DETAIL
// ============================================================================

/// The reason a piece of text failed validation.
///
/// The set is closed. Each kind carries only the data its message needs,
/// and its `Display` output is the one fixed, user-facing message for that
/// kind.
///
/// # Examples
///
/// ```rust
/// use moji_validator::foundation::ErrorDetail;
///
/// let error = ErrorDetail::LengthOutOfRange { min: 1, max: 20 };
/// assert_eq!(error.code(), "length_out_of_range");
/// assert_eq!(error.message(), "文字数を1文字以上、20文字以下で入力してください");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorDetail {
    /// The text has zero length.
    #[error("文字を入力してください")]
    Empty,

    /// The character count is outside `[min, max]`.
    #[error("文字数を{min}文字以上、{max}文字以下で入力してください")]
    LengthOutOfRange {
        /// Minimum character count (inclusive).
        min: usize,
        /// Maximum character count (inclusive).
        max: usize,
    },

    /// A character outside ASCII `[A-Za-z0-9]` was found.
    #[error("全て半角英数字で入力してください")]
    NotHalfWidthAlphanumeric,

    /// A character outside ASCII `[0-9]` was found.
    #[error("全て半角数字で入力してください")]
    NotHalfWidthNumeric,

    /// A character outside ASCII `[A-Za-z]` was found.
    #[error("全て半角英字で入力してください")]
    NotHalfWidthAlphabetic,

    /// A character outside ASCII `[A-Z]` was found.
    #[error("全て半角英大文字で入力してください")]
    NotHalfWidthUppercase,

    /// A character outside ASCII `[a-z]` was found.
    #[error("全て半角英小文字で入力してください")]
    NotHalfWidthLowercase,

    /// A half-width character (ASCII printable or half-width katakana) was found.
    #[error("全て全角文字で入力してください")]
    NotFullWidth,

    /// A character outside the Hiragana block was found.
    #[error("全てひらがなで入力してください")]
    NotHiragana,

    /// A character outside the Katakana block was found.
    #[error("全てカタカナで入力してください")]
    NotKatakana,

    /// The text is not shaped like `local@domain.tld`.
    #[error("メールアドレスの形式で入力してください")]
    InvalidEmailFormat,

    /// The text contains something other than ASCII upper-case letters, digits and `-`.
    #[error("20桁以下の値、かつ　全て半角英大文字・半角数字・半角ハイフンで入力してください")]
    InvalidPhoneNumberFormat,
}

impl ErrorDetail {
    /// Returns the fixed human-readable message for this kind.
    ///
    /// Same text as the `Display` implementation.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns a stable machine-readable code for this kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::LengthOutOfRange { .. } => "length_out_of_range",
            Self::NotHalfWidthAlphanumeric => "not_half_width_alphanumeric",
            Self::NotHalfWidthNumeric => "not_half_width_numeric",
            Self::NotHalfWidthAlphabetic => "not_half_width_alphabetic",
            Self::NotHalfWidthUppercase => "not_half_width_uppercase",
            Self::NotHalfWidthLowercase => "not_half_width_lowercase",
            Self::NotFullWidth => "not_full_width",
            Self::NotHiragana => "not_hiragana",
            Self::NotKatakana => "not_katakana",
            Self::InvalidEmailFormat => "invalid_email_format",
            Self::InvalidPhoneNumberFormat => "invalid_phone_number_format",
        }
    }
}

// ============================================================================
// REGISTRY ERROR
// ============================================================================

/// Errors raised when looking up policies.
///
/// Referencing a policy that does not exist is a programming error, so it
/// is reported as a `Result::Err` at lookup time rather than folded into a
/// [`ValidationOutcome`](crate::foundation::ValidationOutcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No policy is registered under this name.
    #[error("unknown policy: {name}")]
    UnknownPolicy {
        /// The name that was looked up.
        name: String,
    },
}

impl RegistryError {
    /// Convenience constructor for [`RegistryError::UnknownPolicy`].
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        Self::UnknownPolicy { name: name.into() }
    }
}

// ============================================================================
// TESTS
// ============================================================================
