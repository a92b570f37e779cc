//! Character classification
//!
//! Whole-string predicates: a string belongs to a class only if every one
//! of its characters does. A single non-conforming character anywhere
//! rejects the whole string.
//!
//! Set classes accept the empty string (there is no offending character
//! in it). [`CharacterClass::EmailFormat`] is a pattern, not a set, and
//! rejects it. Shipped policies run an empty check first, so this only
//! matters to callers that use the classifier directly.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::foundation::ErrorDetail;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$").unwrap()
});

/// ASCII printable range, space through tilde.
const ASCII_PRINTABLE: std::ops::RangeInclusive<char> = ' '..='~';
/// Halfwidth Katakana block, `｡` (U+FF61) through `ﾟ` (U+FF9F).
const HALF_WIDTH_KATAKANA: std::ops::RangeInclusive<char> = '\u{FF61}'..='\u{FF9F}';
/// Hiragana block.
const HIRAGANA: std::ops::RangeInclusive<char> = '\u{3040}'..='\u{309F}';
/// Katakana block, including the prolonged sound mark `ー`.
const KATAKANA: std::ops::RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';

// ============================================================================
// CHARACTER CLASS
// ============================================================================

/// A named set of strings defined by an exact membership rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// ASCII `[A-Za-z0-9]`.
    HalfWidthAlphanumeric,
    /// ASCII `[0-9]`.
    HalfWidthNumeric,
    /// ASCII `[A-Za-z]`.
    HalfWidthAlphabetic,
    /// ASCII `[A-Z]`.
    HalfWidthUppercase,
    /// ASCII `[a-z]`.
    HalfWidthLowercase,
    /// Anything outside ASCII printable and outside the half-width katakana block.
    FullWidth,
    /// The Hiragana block, U+3040 to U+309F.
    FullWidthHiragana,
    /// The Katakana block, U+30A0 to U+30FF.
    FullWidthKatakana,
    /// `local@domain.tld` with a 2 to 6 letter final label.
    EmailFormat,
    /// ASCII `[A-Z0-9-]`.
    PhoneNumber,
}

impl CharacterClass {
    /// Every class, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::HalfWidthAlphanumeric,
        Self::HalfWidthNumeric,
        Self::HalfWidthAlphabetic,
        Self::HalfWidthUppercase,
        Self::HalfWidthLowercase,
        Self::FullWidth,
        Self::FullWidthHiragana,
        Self::FullWidthKatakana,
        Self::EmailFormat,
        Self::PhoneNumber,
    ];

    /// Snake-case name of the class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HalfWidthAlphanumeric => "half_width_alphanumeric",
            Self::HalfWidthNumeric => "half_width_numeric",
            Self::HalfWidthAlphabetic => "half_width_alphabetic",
            Self::HalfWidthUppercase => "half_width_uppercase",
            Self::HalfWidthLowercase => "half_width_lowercase",
            Self::FullWidth => "full_width",
            Self::FullWidthHiragana => "full_width_hiragana",
            Self::FullWidthKatakana => "full_width_katakana",
            Self::EmailFormat => "email_format",
            Self::PhoneNumber => "phone_number",
        }
    }

    /// The error a rule for this class reports unless told otherwise.
    #[must_use]
    pub const fn default_error(self) -> ErrorDetail {
        match self {
            Self::HalfWidthAlphanumeric => ErrorDetail::NotHalfWidthAlphanumeric,
            Self::HalfWidthNumeric => ErrorDetail::NotHalfWidthNumeric,
            Self::HalfWidthAlphabetic => ErrorDetail::NotHalfWidthAlphabetic,
            Self::HalfWidthUppercase => ErrorDetail::NotHalfWidthUppercase,
            Self::HalfWidthLowercase => ErrorDetail::NotHalfWidthLowercase,
            Self::FullWidth => ErrorDetail::NotFullWidth,
            Self::FullWidthHiragana => ErrorDetail::NotHiragana,
            Self::FullWidthKatakana => ErrorDetail::NotKatakana,
            Self::EmailFormat => ErrorDetail::InvalidEmailFormat,
            Self::PhoneNumber => ErrorDetail::InvalidPhoneNumberFormat,
        }
    }

    /// Per-character membership test, for classes that are character sets.
    ///
    /// `None` for [`CharacterClass::EmailFormat`], which is a pattern.
    #[must_use]
    pub fn char_predicate(self) -> Option<fn(char) -> bool> {
        let predicate: fn(char) -> bool = match self {
            Self::HalfWidthAlphanumeric => |c| c.is_ascii_alphanumeric(),
            Self::HalfWidthNumeric => |c| c.is_ascii_digit(),
            Self::HalfWidthAlphabetic => |c| c.is_ascii_alphabetic(),
            Self::HalfWidthUppercase => |c| c.is_ascii_uppercase(),
            Self::HalfWidthLowercase => |c| c.is_ascii_lowercase(),
            Self::FullWidth => is_full_width_char,
            Self::FullWidthHiragana => |c| HIRAGANA.contains(&c),
            Self::FullWidthKatakana => |c| KATAKANA.contains(&c),
            Self::PhoneNumber => |c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-',
            Self::EmailFormat => return None,
        };
        Some(predicate)
    }

    /// Returns `true` if the whole of `text` belongs to this class.
    #[must_use]
    pub fn matches(self, text: &str) -> bool {
        match self.char_predicate() {
            Some(predicate) => text.chars().all(predicate),
            None => EMAIL_REGEX.is_match(text),
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_full_width_char(c: char) -> bool {
    !ASCII_PRINTABLE.contains(&c) && !HALF_WIDTH_KATAKANA.contains(&c)
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Returns `true` if every character of `text` belongs to `class`.
///
/// # Examples
///
/// ```rust
/// use moji_validator::classify::{CharacterClass, classify};
///
/// assert!(classify("田中太郎", CharacterClass::FullWidth));
/// assert!(!classify("田中ﾀﾛｳ", CharacterClass::FullWidth));
/// assert!(classify("hoge@google.jp", CharacterClass::EmailFormat));
/// ```
#[must_use]
pub fn classify(text: &str, class: CharacterClass) -> bool {
    class.matches(text)
}

/// ASCII letters and digits only.
#[must_use]
pub fn is_half_width_alphanumeric(text: &str) -> bool {
    CharacterClass::HalfWidthAlphanumeric.matches(text)
}

/// ASCII digits only.
#[must_use]
pub fn is_half_width_numeric(text: &str) -> bool {
    CharacterClass::HalfWidthNumeric.matches(text)
}

/// No ASCII printable and no half-width katakana characters.
#[must_use]
pub fn is_full_width(text: &str) -> bool {
    CharacterClass::FullWidth.matches(text)
}

/// Hiragana block only.
#[must_use]
pub fn is_hiragana(text: &str) -> bool {
    CharacterClass::FullWidthHiragana.matches(text)
}

/// Katakana block only.
#[must_use]
pub fn is_katakana(text: &str) -> bool {
    CharacterClass::FullWidthKatakana.matches(text)
}

/// Shaped like `local@domain.tld`.
#[must_use]
pub fn is_email(text: &str) -> bool {
    CharacterClass::EmailFormat.matches(text)
}

// ============================================================================
// TESTS
// ============================================================================
