//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`] - Create a leaf validator (struct + Validate impl + factory fn)
//! - [`compose!`] - AND-chain multiple validators
//! - [`any_of!`] - OR-chain multiple validators
//! - [`one_of!`] - XOR-chain multiple validators
//! - [`all_of!`] - exhaustive AND that reports only failing validators
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::validator;
//! use verity_validator::foundation::ValidationError;
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub NonEmpty;
//!     rule(input) { input.as_str().is_some_and(|s| !s.is_empty()) }
//!     error { ValidationError::new("non_empty", "Expected non-empty string") }
//!     fn non_empty();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq)]
//!     pub AtLeast { min: f64 };
//!     rule(self, input) { input.as_f64().is_some_and(|n| n >= self.min) }
//!     error(self) { format!("Expected at least {}", self.min) }
//!     fn at_least(min: f64);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete leaf validator: struct definition, `Validate`
/// implementation, constructor, and factory function.
///
/// The `error` block is the validator's failure shape: anything that converts
/// into a [`Failure`](crate::foundation::Failure). The rule may name a second
/// parameter to receive the [`Ancestors`](crate::foundation::Ancestors).
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub IsNull;
///     rule(input) { input.is_null() }
///     error { "Expected null" }
///     fn nul();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub MatchesPeer { key: String };
///     rule(self, input, ancestors) { ancestors.parent().is_some_and(|p| p.get(&self.key) == Some(input)) }
///     error(self) { format!("Expected to match {}", self.key) }
///     fn match_peer(key: String);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub Length { min: usize, max: usize };
///     rule(self, input) { ... }
///     error(self) { ... }
///     new(min: usize, max: usize) { Self { min, max } }
///     fn length(min: usize, max: usize);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub Pattern { regex: Regex };
///     rule(self, input) { ... }
///     error(self) { ... }
///     new(source: &str) -> ConfigError { ... }
///     fn pattern(source: &str) -> ConfigError;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Internal: Validate impl for struct variants ─────────────────────
    (
        @impl $name:ident;
        rule($self_:ident, $inp:ident $(, $anc:ident)?) $rule:block
        error($self2:ident) $err:block
    ) => {
        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate_with(
                &$self_,
                $inp: &$crate::Value,
                __ancestors: &$crate::foundation::Ancestors<'_>,
            ) -> $crate::foundation::Outcome {
                $(let $anc = __ancestors;)?
                if $rule {
                    None
                } else {
                    Some($crate::foundation::Validate::describe($self_))
                }
            }

            fn describe(&$self2) -> $crate::foundation::Failure {
                $crate::foundation::Failure::from($err)
            }
        }
    };

    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident $(, $anc:ident)?) $rule:block
        error $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp $(, $anc)?) $rule
            error $err
        }

        #[must_use]
        #[doc = concat!("Creates a [`", stringify!($name), "`] validator.")]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident $(, $anc:ident)?) $rule:block
        error $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate_with(
                &self,
                $inp: &$crate::Value,
                __ancestors: &$crate::foundation::Ancestors<'_>,
            ) -> $crate::foundation::Outcome {
                $(let $anc = __ancestors;)?
                if $rule {
                    None
                } else {
                    Some($crate::foundation::Validate::describe(self))
                }
            }

            fn describe(&self) -> $crate::foundation::Failure {
                $crate::foundation::Failure::from($err)
            }
        }
    };

    // ── Variant 3a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident $(, $anc:ident)?) $rule:block
        error($self2:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp $(, $anc)?) $rule
            error($self2) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        #[doc = concat!("Creates a [`", stringify!($name), "`] validator.")]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident $(, $anc:ident)?) $rule:block
        error($self2:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(
                #[doc = concat!("Configured `", stringify!($field), "`.")]
                pub $field: $fty,
            )+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            #[doc = concat!("Creates a [`", stringify!($name), "`].")]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name; rule($self_, $inp $(, $anc)?) $rule error($self2) $err);
    };

    // ── Variant 3c: Struct with fields + fallible new + fallible factory ─
    //
    // For validators whose constructor can fail (returns Result).
    // The type after `->` is the error type; the macro wraps it in Result.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident $(, $anc:ident)?) $rule:block
        error($self2:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(
                #[doc = concat!("Configured `", stringify!($field), "`.")]
                pub $field: $fty,
            )+
        }

        impl $name {
            #[doc = concat!("Creates a [`", stringify!($name), "`].")]
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::validator!(@impl $name; rule($self_, $inp $(, $anc)?) $rule error($self2) $err);

        #[doc = concat!("Creates a [`", stringify!($name), "`] validator.")]

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident $(, $anc:ident)?) $rule:block
        error($self2:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp $(, $anc)?) $rule
            error($self2) $err
        }

        #[must_use]
        #[doc = concat!("Creates a [`", stringify!($name), "`] validator.")]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident $(, $anc:ident)?) $rule:block
        error($self2:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(
                #[doc = concat!("Configured `", stringify!($field), "`.")]
                pub $field: $fty,
            )+
        }

        impl $name {
            #[must_use]
            #[doc = concat!("Creates a [`", stringify!($name), "`].")]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name; rule($self_, $inp $(, $anc)?) $rule error($self2) $err);
    };

}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// ```rust,ignore
/// let validator = compose![string(), min_length(3), max_length(20)]?;
/// ```
#[macro_export]
macro_rules! compose {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::and(::std::vec![
            $($crate::foundation::ValidateExt::shared($validator)),+
        ])
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple validators using OR logic.
///
/// ```rust,ignore
/// let validator = any_of![string(), number()]?;
/// ```
#[macro_export]
macro_rules! any_of {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::or(::std::vec![
            $($crate::foundation::ValidateExt::shared($validator)),+
        ])
    };
}

// ============================================================================
// ONE_OF MACRO
// ============================================================================

/// Composes multiple validators using XOR logic.
///
/// ```rust,ignore
/// let validator = one_of![string(), integer()]?;
/// ```
#[macro_export]
macro_rules! one_of {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::xor(::std::vec![
            $($crate::foundation::ValidateExt::shared($validator)),+
        ])
    };
}

// ============================================================================
// ALL_OF MACRO
// ============================================================================

/// Composes multiple validators with exhaustive AND logic.
///
/// ```rust,ignore
/// let validator = all_of![min_length(8), pattern("[0-9]")?]?;
/// ```
#[macro_export]
macro_rules! all_of {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::all(::std::vec![
            $($crate::foundation::ValidateExt::shared($validator)),+
        ])
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{ConfigError, Validate, ValidationError};
    use crate::validators::{integer, number, string};
    use serde_json::json;

    // Test 1: Unit validator (no fields)
    validator! {
        /// A test unit validator.
        TestNonEmpty;
        rule(input) { input.as_str().is_some_and(|s| !s.is_empty()) }
        error { ValidationError::new("non_empty", "must not be empty") }
        fn test_non_empty();
    }

    #[test]
    fn test_unit_validator() {
        let v = TestNonEmpty;
        assert!(v.validate(&json!("hello")).is_none());
        assert!(v.validate(&json!("")).is_some());
        assert!(test_non_empty().validate(&json!(1)).is_some());
    }

    // Test 2: Struct with fields + auto new
    validator! {
        #[derive(Copy, PartialEq)]
        TestAtLeast { min: f64 };
        rule(self, input) { input.as_f64().is_some_and(|n| n >= self.min) }
        error(self) { format!("need at least {}", self.min) }
        fn test_at_least(min: f64);
    }

    #[test]
    fn test_struct_validator() {
        let v = TestAtLeast::new(3.0);
        assert!(v.validate(&json!(3)).is_none());
        assert_eq!(
            test_at_least(5.0).validate(&json!(1)).map(|e| e.to_string()),
            Some("need at least 5".to_owned())
        );
    }

    // Test 3: Rule with ancestors
    validator! {
        TestHasParent;
        rule(input, ancestors) { ancestors.parent().is_some() }
        error { "Expected parent" }
    }

    #[test]
    fn test_rule_with_ancestors() {
        let outer = json!([1]);
        let root = crate::foundation::Ancestors::root();
        let chain = root.push(&outer);
        assert!(TestHasParent.validate(&json!(1)).is_some());
        assert!(TestHasParent.validate_with(&json!(1), &chain).is_none());
    }

    // Test 4: Fallible constructor
    validator! {
        TestBounded { max: u64 };
        rule(self, input) { input.as_u64().is_some_and(|n| n <= self.max) }
        error(self) { format!("Expected at most {}", self.max) }
        new(max: u64) -> ConfigError {
            if max == 0 {
                return Err(ConfigError::EmptyCombinator { combinator: "bounded" });
            }
            Ok(Self { max })
        }
        fn test_bounded(max: u64) -> ConfigError;
    }

    #[test]
    fn test_fallible_constructor() {
        assert!(test_bounded(0).is_err());
        let v = test_bounded(2).unwrap();
        assert_eq!(v.max, 2);
        assert!(v.validate(&json!(2)).is_none());
        assert!(v.validate(&json!(3)).is_some());
    }

    #[test]
    fn test_chaining_macros() {
        let both = compose![number(), integer()].unwrap();
        assert!(both.validate(&json!(1)).is_none());
        assert!(both.validate(&json!(1.5)).is_some());

        let either = any_of![string(), number()].unwrap();
        assert!(either.validate(&json!("a")).is_none());
        assert!(either.validate(&json!(null)).is_some());

        let exactly_one = one_of![number(), integer()].unwrap();
        assert!(exactly_one.validate(&json!(1.5)).is_none());
        assert!(exactly_one.validate(&json!(1)).is_some());

        let every = all_of![string(), number()].unwrap();
        assert_eq!(
            every.validate(&json!(true)).map(|e| e.to_string()),
            Some("(Expected typeof string and expected typeof number)".to_owned())
        );
    }
}
