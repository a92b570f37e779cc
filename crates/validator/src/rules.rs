//! Atomic rules
//!
//! Each rule checks one concern and reports one error kind. Rules are
//! value objects: they hold only their configuration, never state, and
//! can be freely copied, shared, or rebuilt.

use crate::classify::CharacterClass;
use crate::foundation::ErrorDetail;

// ============================================================================
// EMPTY
// ============================================================================

crate::rule! {
    /// Fails with [`ErrorDetail::Empty`] when the text has zero length.
    ///
    /// Whitespace is not empty.
    pub EmptyRule;
    rule(input) { !input.is_empty() }
    error(input) { ErrorDetail::Empty }
    describe "empty";
    fn empty();
}

// ============================================================================
// LENGTH
// ============================================================================

crate::rule! {
    /// Fails with [`ErrorDetail::LengthOutOfRange`] when the character count
    /// falls outside `[min, max]` (both inclusive).
    ///
    /// Length is measured in Unicode scalar values, so `"田中"` has length 2
    /// even though it is six bytes long.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LengthRule {
        /// Minimum character count (inclusive).
        min: usize,
        /// Maximum character count (inclusive).
        max: usize,
    };
    rule(self, input) { (self.min..=self.max).contains(&input.chars().count()) }
    error(self, input) { ErrorDetail::LengthOutOfRange { min: self.min, max: self.max } }
    describe(self) { format!("length({}..={})", self.min, self.max) }
    new(min: usize, max: usize) {
        debug_assert!(min <= max, "LengthRule requires min <= max");
        Self { min, max }
    }
    fn length(min: usize, max: usize);
}

// ============================================================================
// CHARACTER CLASS
// ============================================================================

crate::rule! {
    /// Fails with `error` unless the whole text belongs to `class`.
    ///
    /// See [`crate::classify`] for the exact membership rules.
    #[derive(PartialEq, Eq, Hash)]
    pub CharacterClassRule {
        /// Class every character must belong to.
        class: CharacterClass,
        /// Error reported on mismatch.
        error: ErrorDetail,
    };
    rule(self, input) { self.class.matches(input) }
    error(self, input) { self.error.clone() }
    describe(self) { format!("class({})", self.class) }
    new(class: CharacterClass, error: ErrorDetail) { Self { class, error } }
    fn class(class: CharacterClass, error: ErrorDetail);
}

impl CharacterClassRule {
    /// A rule for `class` reporting the class's default error.
    #[must_use]
    pub fn of(class: CharacterClass) -> Self {
        Self::new(class, class.default_error())
    }
}

/// Full-width characters only; reports [`ErrorDetail::NotFullWidth`].
#[must_use]
pub fn full_width() -> CharacterClassRule {
    CharacterClassRule::of(CharacterClass::FullWidth)
}

/// ASCII letters and digits only; reports [`ErrorDetail::NotHalfWidthAlphanumeric`].
#[must_use]
pub fn half_width_alphanumeric() -> CharacterClassRule {
    CharacterClassRule::of(CharacterClass::HalfWidthAlphanumeric)
}

/// ASCII digits only; reports [`ErrorDetail::NotHalfWidthNumeric`].
#[must_use]
pub fn half_width_numeric() -> CharacterClassRule {
    CharacterClassRule::of(CharacterClass::HalfWidthNumeric)
}

/// ASCII letters only; reports [`ErrorDetail::NotHalfWidthAlphabetic`].
#[must_use]
pub fn half_width_alphabetic() -> CharacterClassRule {
    CharacterClassRule::of(CharacterClass::HalfWidthAlphabetic)
}

/// Hiragana only; reports [`ErrorDetail::NotHiragana`].
#[must_use]
pub fn hiragana() -> CharacterClassRule {
    CharacterClassRule::of(CharacterClass::FullWidthHiragana)
}

/// Katakana only; reports [`ErrorDetail::NotKatakana`].
#[must_use]
pub fn katakana() -> CharacterClassRule {
    CharacterClassRule::of(CharacterClass::FullWidthKatakana)
}

/// `local@domain.tld`; reports [`ErrorDetail::InvalidEmailFormat`].
#[must_use]
pub fn email_format() -> CharacterClassRule {
    CharacterClassRule::of(CharacterClass::EmailFormat)
}

/// ASCII upper-case letters, digits and `-`; reports
/// [`ErrorDetail::InvalidPhoneNumberFormat`].
#[must_use]
pub fn phone_number() -> CharacterClassRule {
    CharacterClassRule::of(CharacterClass::PhoneNumber)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidationOutcome};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_rule() {
        assert_eq!(empty().check(""), Err(ErrorDetail::Empty));
        assert!(empty().check(" ").is_ok());
        assert!(empty().check("a").is_ok());
    }

    #[test]
    fn test_length_boundaries() {
        let rule = length(1, 20);
        let error = Err(ErrorDetail::LengthOutOfRange { min: 1, max: 20 });

        assert_eq!(rule.check(""), error);
        assert!(rule.check("a").is_ok());
        assert!(rule.check(&"a".repeat(20)).is_ok());
        assert_eq!(rule.check(&"a".repeat(21)), error);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let rule = length(1, 4);
        // 4 chars, 12 bytes
        assert!(rule.check("田中太郎").is_ok());
        assert!(rule.check("田中太郎さ").is_err());
    }

    #[test]
    fn test_length_counts_combining_marks_separately() {
        // か + combining voiced mark renders as one glyph but is two chars
        let decomposed = "か\u{3099}".repeat(10);
        assert_eq!(decomposed.chars().count(), 20);
        assert!(length(1, 20).check(&decomposed).is_ok());
        assert!(length(1, 20).check(&format!("{decomposed}か\u{3099}")).is_err());
    }

    #[test]
    fn test_length_zero_width_window() {
        let rule = length(3, 3);
        assert!(rule.check("abc").is_ok());
        assert!(rule.check("ab").is_err());
        assert!(rule.check("abcd").is_err());
    }

    #[test]
    fn test_class_rule_uses_given_error() {
        let rule = class(CharacterClass::HalfWidthUppercase, ErrorDetail::NotHalfWidthAlphanumeric);
        assert_eq!(rule.check("abc"), Err(ErrorDetail::NotHalfWidthAlphanumeric));
        assert!(rule.check("ABC").is_ok());
    }

    #[test]
    fn test_class_shortcuts_report_default_errors() {
        assert_eq!(full_width().check("abc"), Err(ErrorDetail::NotFullWidth));
        assert_eq!(email_format().check("abc"), Err(ErrorDetail::InvalidEmailFormat));
        assert_eq!(
            half_width_alphanumeric().check("あ"),
            Err(ErrorDetail::NotHalfWidthAlphanumeric)
        );
        assert_eq!(half_width_numeric().check("a"), Err(ErrorDetail::NotHalfWidthNumeric));
        assert_eq!(half_width_alphabetic().check("1"), Err(ErrorDetail::NotHalfWidthAlphabetic));
        assert_eq!(hiragana().check("ア"), Err(ErrorDetail::NotHiragana));
        assert_eq!(katakana().check("あ"), Err(ErrorDetail::NotKatakana));
        assert_eq!(phone_number().check("abc"), Err(ErrorDetail::InvalidPhoneNumberFormat));
    }

    #[test]
    fn test_letter_case_classes_name_their_own_error() {
        let upper = CharacterClassRule::of(CharacterClass::HalfWidthUppercase);
        let lower = CharacterClassRule::of(CharacterClass::HalfWidthLowercase);

        // all half-width letters, but the wrong case
        assert_eq!(
            upper.validate("abc"),
            ValidationOutcome::Invalid(ErrorDetail::NotHalfWidthUppercase)
        );
        assert_eq!(
            lower.validate("ABC"),
            ValidationOutcome::Invalid(ErrorDetail::NotHalfWidthLowercase)
        );
        assert_ne!(
            upper.check("abc").unwrap_err().message(),
            half_width_alphabetic().check("1").unwrap_err().message()
        );
        assert!(upper.validate("ABC").is_valid());
        assert!(lower.validate("abc").is_valid());
    }

    #[test]
    fn test_validate_returns_text() {
        assert_eq!(
            full_width().validate("田中太郎"),
            ValidationOutcome::Valid("田中太郎".into())
        );
    }

    #[test]
    fn test_rules_are_value_objects() {
        assert_eq!(length(1, 20), LengthRule::new(1, 20));
        assert_eq!(full_width(), full_width().clone());
        assert_eq!(EmptyRule, empty());
    }

    #[test]
    fn test_describe() {
        assert_eq!(empty().describe(), "empty");
        assert_eq!(length(1, 254).describe(), "length(1..=254)");
        assert_eq!(email_format().describe(), "class(email_format)");
    }
}
