//! Named policies
//!
//! This is the one place where each input kind's rule composition is
//! declared. The registry is built once, never changes afterwards, and
//! hands out a freshly constructed [`Policy`] on every lookup.
//!
//! | Policy | Rules |
//! |---|---|
//! | `name` | empty, length 1–20, full-width |
//! | `email` | empty, length 1–254, email format |
//! | `password` | empty |
//! | `phone` | empty, length 1–20, `[A-Z0-9-]` |

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;

use crate::foundation::{RegistryError, Validate, ValidationOutcome};
use crate::policy::Policy;
use crate::rules::{email_format, empty, full_width, length, phone_number};

static GLOBAL: LazyLock<PolicyRegistry> = LazyLock::new(PolicyRegistry::builtin);

// ============================================================================
// POLICY CONSTRUCTORS
// ============================================================================

/// Person name: non-empty, 1 to 20 characters, full-width only.
#[must_use]
pub fn name_policy() -> Policy {
    Policy::new(PolicyName::Name.as_str(), empty())
        .rule(length(1, 20))
        .rule(full_width())
}

/// Email address: non-empty, 1 to 254 characters, `local@domain.tld`.
#[must_use]
pub fn email_policy() -> Policy {
    Policy::new(PolicyName::Email.as_str(), empty())
        .rule(length(1, 254))
        .rule(email_format())
}

/// Password: non-empty.
#[must_use]
pub fn password_policy() -> Policy {
    Policy::new(PolicyName::Password.as_str(), empty())
}

/// Phone number: non-empty, 1 to 20 characters, ASCII upper-case letters,
/// digits and `-`.
#[must_use]
pub fn phone_policy() -> Policy {
    Policy::new(PolicyName::Phone.as_str(), empty())
        .rule(length(1, 20))
        .rule(phone_number())
}

// ============================================================================
// POLICY NAME
// ============================================================================

/// The closed set of registered policy names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyName {
    /// See [`name_policy`].
    Name,
    /// See [`email_policy`].
    Email,
    /// See [`password_policy`].
    Password,
    /// See [`phone_policy`].
    Phone,
}

impl PolicyName {
    /// Every policy name, in registration order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Password, Self::Phone];

    /// The string a caller uses to look the policy up.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Phone => "phone",
        }
    }

    /// Builds a fresh instance of this policy.
    #[must_use]
    pub fn policy(self) -> Policy {
        self.constructor()()
    }

    fn constructor(self) -> fn() -> Policy {
        match self {
            Self::Name => name_policy,
            Self::Email => email_policy,
            Self::Password => password_policy,
            Self::Phone => phone_policy,
        }
    }
}

impl fmt::Display for PolicyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyName {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| RegistryError::unknown_policy(s))
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Maps policy names to constructors.
///
/// Read-only after construction, so a shared reference can be used from
/// any number of threads without locking.
///
/// # Examples
///
/// ```rust
/// use moji_validator::foundation::{ErrorDetail, RegistryError};
/// use moji_validator::registry::PolicyRegistry;
///
/// let registry = PolicyRegistry::global();
/// let outcome = registry.validate("email", "hogehogehoge")?;
/// assert_eq!(outcome.error(), Some(&ErrorDetail::InvalidEmailFormat));
///
/// assert!(registry.get("zip_code").is_err());
/// # Ok::<(), RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PolicyRegistry {
    entries: Vec<(&'static str, fn() -> Policy)>,
}

impl PolicyRegistry {
    /// A registry holding every [`PolicyName`].
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: PolicyName::ALL
                .into_iter()
                .map(|name| (name.as_str(), name.constructor()))
                .collect(),
        }
    }

    /// The process-wide registry, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Builds a fresh instance of the named policy.
    pub fn get(&self, name: &str) -> Result<Policy, RegistryError> {
        match self.entries.iter().find(|(key, _)| *key == name) {
            Some((_, constructor)) => Ok(constructor()),
            None => {
                tracing::warn!(policy = name, "unknown policy requested");
                Err(RegistryError::unknown_policy(name))
            }
        }
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Looks up `name` and validates `text` against it.
    pub fn validate(&self, name: &str, text: &str) -> Result<ValidationOutcome, RegistryError> {
        Ok(self.get(name)?.validate(text))
    }
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorDetail;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::name_valid("name", "田中太郎", Ok(()))]
    #[case::name_empty("name", "", Err(ErrorDetail::Empty))]
    #[case::name_too_long("name", "田中太郎田中太郎田中太郎田中太郎田中太郎田", Err(ErrorDetail::LengthOutOfRange { min: 1, max: 20 }))]
    #[case::name_half_width("name", "korehahankakudesu", Err(ErrorDetail::NotFullWidth))]
    #[case::email_valid("email", "hoge@google.jp", Ok(()))]
    #[case::email_empty("email", "", Err(ErrorDetail::Empty))]
    #[case::email_format("email", "hogehogehoge", Err(ErrorDetail::InvalidEmailFormat))]
    #[case::password_empty("password", "", Err(ErrorDetail::Empty))]
    #[case::password_anything("password", "a b\u{3000}ｶﾅ", Ok(()))]
    #[case::phone_valid("phone", "090-1234-5678", Ok(()))]
    #[case::phone_lower("phone", "090-abcd", Err(ErrorDetail::InvalidPhoneNumberFormat))]
    #[case::phone_too_long("phone", "090-1234-5678-9012-34", Err(ErrorDetail::LengthOutOfRange { min: 1, max: 20 }))]
    fn test_shipped_policies(
        #[case] policy: &str,
        #[case] input: &str,
        #[case] expected: Result<(), ErrorDetail>,
    ) {
        let outcome = PolicyRegistry::global().validate(policy, input).unwrap();
        let expected = match expected {
            Ok(()) => ValidationOutcome::Valid(input.to_string()),
            Err(error) => ValidationOutcome::Invalid(error),
        };
        assert_eq!(outcome, expected);
    }

    #[test]
    fn test_unknown_policy() {
        let err = PolicyRegistry::global().get("zip_code").unwrap_err();
        assert_eq!(err, RegistryError::unknown_policy("zip_code"));
        assert!(!PolicyRegistry::global().contains("zip_code"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(PolicyRegistry::global().get("Name").is_err());
        assert!("EMAIL".parse::<PolicyName>().is_err());
    }

    #[test]
    fn test_names_in_registration_order() {
        let names: Vec<_> = PolicyRegistry::builtin().names().collect();
        assert_eq!(names, vec!["name", "email", "password", "phone"]);
    }

    #[test]
    fn test_policy_name_round_trip() {
        for name in PolicyName::ALL {
            assert_eq!(name.to_string().parse::<PolicyName>().unwrap(), name);
            assert_eq!(name.policy().name(), name.as_str());
        }
    }

    #[test]
    fn test_get_returns_fresh_instances() {
        let registry = PolicyRegistry::default();
        let a = registry.get("name").unwrap();
        let b = registry.get("name").unwrap();
        assert_eq!(a.rule_labels(), b.rule_labels());
    }

    #[test]
    fn test_shipped_compositions() {
        assert_eq!(
            name_policy().rule_labels(),
            vec!["empty", "length(1..=20)", "class(full_width)"]
        );
        assert_eq!(
            email_policy().rule_labels(),
            vec!["empty", "length(1..=254)", "class(email_format)"]
        );
        assert_eq!(password_policy().rule_labels(), vec!["empty"]);
        assert_eq!(
            phone_policy().rule_labels(),
            vec!["empty", "length(1..=20)", "class(phone_number)"]
        );
    }
}
