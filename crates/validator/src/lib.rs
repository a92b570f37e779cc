//! # moji-validator
//!
//! Composable text validation: independent atomic rules (emptiness,
//! length bounds, character-class membership, format matching) combined
//! into named policies and evaluated uniformly.
//!
//! ## Quick Start
//!
//! ```rust
//! use moji_validator::prelude::*;
//!
//! // Look up a shipped policy by name
//! let outcome = moji_validator::validate("name", "田中太郎")?;
//! assert_eq!(outcome, ValidationOutcome::Valid("田中太郎".into()));
//!
//! // Or compose your own; the first failing rule decides the error
//! let kana = Policy::new("kana", empty()).rule(length(1, 10)).rule(katakana());
//! assert_eq!(kana.validate("たなか").error(), Some(&ErrorDetail::NotKatakana));
//! # Ok::<(), RegistryError>(())
//! ```
//!
//! ## Building blocks
//!
//! - **Classifier**: [`classify`](classify::classify) and [`CharacterClass`](classify::CharacterClass)
//! - **Rules**: [`EmptyRule`](rules::EmptyRule), [`LengthRule`](rules::LengthRule),
//!   [`CharacterClassRule`](rules::CharacterClassRule)
//! - **Composition**: [`Policy`](policy::Policy), [`And`](combinators::And)
//! - **Registry**: [`PolicyRegistry`](registry::PolicyRegistry)
//!
//! Validation failures are values ([`ValidationOutcome::Invalid`](foundation::ValidationOutcome)),
//! never panics. The only error is asking for a policy that does not exist.

pub mod classify;
pub mod combinators;
pub mod foundation;
mod macros;
pub mod policy;
pub mod prelude;
pub mod registry;
pub mod rules;

use foundation::{RegistryError, ValidationOutcome};

/// Validates `raw_text` against the registered policy called `policy_name`.
///
/// The text is checked as given; trimming or other normalization is up to
/// the caller.
///
/// # Examples
///
/// ```rust
/// use moji_validator::foundation::ErrorDetail;
///
/// let outcome = moji_validator::validate("password", "").unwrap();
/// assert_eq!(outcome.error(), Some(&ErrorDetail::Empty));
///
/// assert!(moji_validator::validate("nickname", "x").is_err());
/// ```
pub fn validate(policy_name: &str, raw_text: &str) -> Result<ValidationOutcome, RegistryError> {
    registry::PolicyRegistry::global().validate(policy_name, raw_text)
}
