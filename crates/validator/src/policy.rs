//! Composite validators
//!
//! A [`Policy`] is a named, ordered, non-empty list of validators. Rules
//! run in declared order and the first failure decides the outcome; later
//! rules are never evaluated. This lets a later rule rely on what earlier
//! rules established (a class check need not special-case `""` when an
//! empty check precedes it), and the caller sees one error at a time.
//!
//! A policy is itself a [`Validate`], so policies nest.
//!
//! # Examples
//!
//! ```rust
//! use moji_validator::prelude::*;
//!
//! let name = Policy::new("name", empty())
//!     .rule(length(1, 20))
//!     .rule(full_width());
//!
//! assert_eq!(name.validate("田中太郎"), ValidationOutcome::Valid("田中太郎".into()));
//! assert_eq!(name.validate("").error(), Some(&ErrorDetail::Empty));
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{ErrorDetail, Validate};

type BoxedRule = Box<dyn Validate + Send + Sync>;

/// A named, ordered sequence of validators evaluated with first-failure
/// precedence.
///
/// Non-empty by construction: [`Policy::new`] takes the first rule.
/// The policy owns its rules and never mutates them after construction.
pub struct Policy {
    name: Cow<'static, str>,
    rules: Vec<BoxedRule>,
}

impl Policy {
    /// Creates a policy whose first rule is `first`.
    pub fn new<V>(name: impl Into<Cow<'static, str>>, first: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            rules: vec![Box::new(first)],
        }
    }

    /// Appends a rule, evaluated after every rule already present.
    pub fn rule<V>(mut self, rule: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// The policy's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rules, always at least one.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &(dyn Validate + Send + Sync)> + '_ {
        self.rules.iter().map(|rule| &**rule)
    }

    /// Labels of the rules in evaluation order.
    #[must_use]
    pub fn rule_labels(&self) -> Vec<Cow<'static, str>> {
        self.rules().map(|rule| rule.describe()).collect()
    }
}

impl Validate for Policy {
    fn check(&self, input: &str) -> Result<(), ErrorDetail> {
        for (index, rule) in self.rules.iter().enumerate() {
            if let Err(error) = rule.check(input) {
                tracing::debug!(
                    policy = %self.name,
                    rule_index = index,
                    code = error.code(),
                    "validation failed"
                );
                return Err(error);
            }
        }
        tracing::trace!(policy = %self.name, "validation passed");
        Ok(())
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("policy({})", self.name))
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("name", &self.name)
            .field("rules", &self.rule_labels())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
