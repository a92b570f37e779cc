//! Macros for declaring rules with minimal boilerplate.
//!
//! - [`rule!`]: create a complete rule (struct + `Validate` impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use moji_validator::rule;
//! use moji_validator::foundation::ErrorDetail;
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub EmptyRule;
//!     rule(input) { !input.is_empty() }
//!     error(input) { ErrorDetail::Empty }
//!     describe "empty";
//!     fn empty();
//! }
//!
//! // Rule with configuration
//! rule! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub LengthRule { min: usize, max: usize };
//!     rule(self, input) { (self.min..=self.max).contains(&input.chars().count()) }
//!     error(self, input) { ErrorDetail::LengthOutOfRange { min: self.min, max: self.max } }
//!     describe(self) { format!("length({}..={})", self.min, self.max) }
//!     new(min: usize, max: usize) { Self { min, max } }
//!     fn length(min: usize, max: usize);
//! }
//! ```

/// Creates a complete rule: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// Unit rules always derive `Debug, Clone, Copy, Default, PartialEq, Eq, Hash`.
/// Rules with fields always derive `Debug, Clone`; add more via `#[derive(...)]`.
/// Fields are public and immutable once constructed.
#[macro_export]
macro_rules! rule {
    // ── Unit rule (no fields) + factory fn ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        describe $desc:literal;
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn check(&self, $inp: &str) -> $crate::foundation::ValidationResult<()> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn describe(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed($desc)
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Rule with fields + custom new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($(#[$fmeta:meta])* $field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        describe($self3:ident) $desc:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($(#[$fmeta])* pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn check(&$self_, $inp: &str) -> $crate::foundation::ValidationResult<()> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn describe(&$self_) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::from($desc)
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
