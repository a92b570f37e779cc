//! End-to-end scenarios for the shipped policies.

use moji_validator::prelude::*;
use pretty_assertions::assert_eq;

fn valid(text: &str) -> ValidationOutcome {
    ValidationOutcome::Valid(text.to_string())
}

fn invalid(error: ErrorDetail) -> ValidationOutcome {
    ValidationOutcome::Invalid(error)
}

// ============================================================================
// NAME: empty, length(1..=20), full-width
// ============================================================================

#[test]
fn name_accepts_full_width_name() {
    assert_eq!(moji_validator::validate("name", "田中太郎").unwrap(), valid("田中太郎"));
}

#[test]
fn name_rejects_empty() {
    assert_eq!(moji_validator::validate("name", "").unwrap(), invalid(ErrorDetail::Empty));
}

#[test]
fn name_rejects_21_full_width_characters() {
    let input = "あ".repeat(21);
    assert_eq!(
        moji_validator::validate("name", &input).unwrap(),
        invalid(ErrorDetail::LengthOutOfRange { min: 1, max: 20 })
    );
}

#[test]
fn name_accepts_exactly_20_full_width_characters() {
    let input = "ア".repeat(20);
    assert_eq!(moji_validator::validate("name", &input).unwrap(), valid(&input));
}

#[test]
fn name_rejects_half_width_letters() {
    assert_eq!(
        moji_validator::validate("name", "korehahankakudesu").unwrap(),
        invalid(ErrorDetail::NotFullWidth)
    );
}

#[test]
fn name_rejects_half_width_katakana() {
    assert_eq!(
        moji_validator::validate("name", "ﾀﾅｶﾀﾛｳ").unwrap(),
        invalid(ErrorDetail::NotFullWidth)
    );
}

// ============================================================================
// EMAIL: empty, length(1..=254), email format
// ============================================================================

#[test]
fn email_accepts_address() {
    assert_eq!(
        moji_validator::validate("email", "hoge@google.jp").unwrap(),
        valid("hoge@google.jp")
    );
}

#[test]
fn email_rejects_empty() {
    assert_eq!(moji_validator::validate("email", "").unwrap(), invalid(ErrorDetail::Empty));
}

#[test]
fn email_rejects_missing_at() {
    assert_eq!(
        moji_validator::validate("email", "hogehogehoge").unwrap(),
        invalid(ErrorDetail::InvalidEmailFormat)
    );
}

#[test]
fn email_length_masks_format() {
    // too long AND not an address: length is reported because it runs first
    let input = "x".repeat(255);
    assert_eq!(
        moji_validator::validate("email", &input).unwrap(),
        invalid(ErrorDetail::LengthOutOfRange { min: 1, max: 254 })
    );
}

#[test]
fn email_length_boundary_at_254() {
    let domain = "@example.com";
    let at_limit = format!("{}{domain}", "a".repeat(254 - domain.len()));
    assert_eq!(at_limit.chars().count(), 254);
    assert_eq!(moji_validator::validate("email", &at_limit).unwrap(), valid(&at_limit));

    let over_limit = format!("a{at_limit}");
    assert_eq!(
        moji_validator::validate("email", &over_limit).unwrap(),
        invalid(ErrorDetail::LengthOutOfRange { min: 1, max: 254 })
    );
}

// ============================================================================
// PASSWORD: empty
// ============================================================================

#[test]
fn password_rejects_only_empty() {
    assert_eq!(moji_validator::validate("password", "").unwrap(), invalid(ErrorDetail::Empty));
    for input in ["a", " ", "パスワード", "p@ss w0rd!"] {
        assert_eq!(moji_validator::validate("password", input).unwrap(), valid(input));
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

#[test]
fn unknown_policy_is_an_error_not_an_outcome() {
    let err = moji_validator::validate("nickname", "taro").unwrap_err();
    assert_eq!(err, RegistryError::unknown_policy("nickname"));
    assert_eq!(err.to_string(), "unknown policy: nickname");
}

#[test]
fn typed_names_agree_with_string_lookup() {
    for name in PolicyName::ALL {
        let by_type = name.policy().validate("田中");
        let by_str = PolicyRegistry::global().validate(name.as_str(), "田中").unwrap();
        assert_eq!(by_type, by_str, "policy {name}");
    }
}

#[test]
fn shipped_policy_nests_inside_custom_policy() {
    let signup = Policy::new("signup_email", email_policy_from_registry())
        .rule(CharacterClassRule::of(CharacterClass::HalfWidthLowercase));

    // email passes, lowercase check runs next and fails on '@'
    assert_eq!(
        signup.validate("hoge@google.jp"),
        invalid(ErrorDetail::NotHalfWidthLowercase)
    );
    assert_eq!(signup.validate(""), invalid(ErrorDetail::Empty));
}

fn email_policy_from_registry() -> Policy {
    PolicyRegistry::global().get("email").unwrap()
}

#[test]
fn error_messages_are_fixed_per_kind() {
    let outcome = moji_validator::validate("name", "abc").unwrap();
    let error = outcome.error().unwrap();
    assert_eq!(error.message(), "全て全角文字で入力してください");
    assert_eq!(error.code(), "not_full_width");
}
