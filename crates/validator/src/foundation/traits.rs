//! Core validator traits
//!
//! This module defines the trait every validator implements, the shared
//! handle combinators hold their children through, and the introspection
//! entry point combinators use to precompute their error shapes.

use std::sync::Arc;

use serde_json::Value;

use super::{Ancestors, ConfigError, Failure, Outcome};
use crate::combinators::{And, Not, Or, Peer, When, WithErr};

// ============================================================================
// VALIDATE
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator answers two questions:
///
/// - [`validate_with`](Validate::validate_with): does this value pass? It
///   returns `None` on success and a [`Failure`] otherwise.
/// - [`describe`](Validate::describe): what does a failure look like? This
///   must be erroneous, and it is what parent combinators report on behalf
///   of a child they never had to evaluate.
///
/// Validators are immutable after construction and shared across threads.
///
/// # Examples
///
/// ```rust,ignore
/// use serde_json::Value;
/// use verity_validator::foundation::{Ancestors, Failure, Outcome, Validate};
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     fn validate_with(&self, value: &Value, _: &Ancestors<'_>) -> Outcome {
///         match value.as_str() {
///             Some(s) if !s.is_empty() => None,
///             _ => Some(self.describe()),
///         }
///     }
///
///     fn describe(&self) -> Failure {
///         Failure::from("Expected non-empty string")
///     }
/// }
/// ```
pub trait Validate: Send + Sync {
    /// Validates `value` nested under `ancestors`.
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome;

    /// The failure shape this validator reports.
    fn describe(&self) -> Failure;

    /// Validates a top-level value.
    fn validate(&self, value: &Value) -> Outcome {
        self.validate_with(value, &Ancestors::root())
    }
}

/// A validator shared between parents.
pub type SharedValidator = Arc<dyn Validate>;

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        (**self).validate_with(value, ancestors)
    }

    fn describe(&self) -> Failure {
        (**self).describe()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        (**self).validate_with(value, ancestors)
    }

    fn describe(&self) -> Failure {
        (**self).describe()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        (**self).validate_with(value, ancestors)
    }

    fn describe(&self) -> Failure {
        (**self).describe()
    }
}

// ============================================================================
// INTROSPECTION
// ============================================================================

/// Returns the failure shape of `validator`.
///
/// Fails when the described shape is not erroneous, which means the
/// validator could never report an error to its parent.
pub fn introspect(validator: &dyn Validate) -> Result<Failure, ConfigError> {
    introspect_in("introspect", validator)
}

pub(crate) fn introspect_in(
    combinator: &'static str,
    validator: &dyn Validate,
) -> Result<Failure, ConfigError> {
    let shape = validator.describe();
    if shape.is_erroneous() {
        Ok(shape)
    } else {
        #[cfg(feature = "tracing")]
        tracing::warn!(combinator, "validator described a non-erroneous failure shape");
        Err(ConfigError::IntrospectionFailed { combinator })
    }
}

pub(crate) fn introspect_all(
    combinator: &'static str,
    validators: &[SharedValidator],
) -> Result<Vec<Failure>, ConfigError> {
    validators
        .iter()
        .map(|validator| introspect_in(combinator, validator.as_ref()))
        .collect()
}

// ============================================================================
// VALIDATE EXT
// ============================================================================

/// Fluent composition for every sized validator.
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let name = string().and(min_length(1))?.with_err("Expected name");
/// let nickname = name.clone().when(|value, _| !value.is_null())?;
/// ```
pub trait ValidateExt: Validate + Sized + 'static {
    /// Moves the validator behind a [`SharedValidator`].
    fn shared(self) -> SharedValidator {
        Arc::new(self)
    }

    /// Conjunction with `other`.
    fn and<V: Validate + 'static>(self, other: V) -> Result<And, ConfigError> {
        crate::combinators::and(vec![self.shared(), other.shared()])
    }

    /// Disjunction with `other`.
    fn or<V: Validate + 'static>(self, other: V) -> Result<Or, ConfigError> {
        crate::combinators::or(vec![self.shared(), other.shared()])
    }

    /// Passes iff this validator fails.
    fn not(self) -> Result<Not, ConfigError> {
        crate::combinators::not(self)
    }

    /// Replaces the error and failure shape.
    fn with_err(self, error: impl Into<Failure>) -> WithErr<Self> {
        crate::combinators::with_err(self, error)
    }

    /// Runs only when `predicate` holds.
    fn when<P>(self, predicate: P) -> Result<When<P>, ConfigError>
    where
        P: Fn(&Value, &Ancestors<'_>) -> bool + Send + Sync,
    {
        crate::combinators::when(predicate, self)
    }

    /// Validates the sibling stored under `key` instead of the value itself.
    fn peer(self, key: impl Into<String>) -> Result<Peer, ConfigError> {
        crate::combinators::peer(key, self)
    }
}

impl<T: Validate + 'static> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        fn validate_with(&self, _: &Value, _: &Ancestors<'_>) -> Outcome {
            None
        }

        fn describe(&self) -> Failure {
            Failure::Pending
        }
    }

    struct IsString;

    impl Validate for IsString {
        fn validate_with(&self, value: &Value, _: &Ancestors<'_>) -> Outcome {
            if value.is_string() {
                None
            } else {
                Some(self.describe())
            }
        }

        fn describe(&self) -> Failure {
            Failure::from("Expected typeof string")
        }
    }

    #[test]
    fn validate_defaults_to_root_ancestors() {
        assert_eq!(IsString.validate(&json!("a")), None);
        assert_eq!(
            IsString.validate(&json!(1)),
            Some(Failure::from("Expected typeof string"))
        );
    }

    #[test]
    fn introspection_requires_an_erroneous_shape() {
        assert_eq!(
            introspect(&IsString),
            Ok(Failure::from("Expected typeof string"))
        );
        assert_eq!(
            introspect(&AlwaysValid),
            Err(ConfigError::IntrospectionFailed {
                combinator: "introspect"
            })
        );
    }

    #[test]
    fn pointers_delegate() {
        let shared: SharedValidator = Arc::new(IsString);
        let boxed: Box<dyn Validate> = Box::new(IsString);
        assert!(shared.validate(&json!(null)).is_some());
        assert!(boxed.validate(&json!(null)).is_some());
        assert!((&IsString).validate(&json!("x")).is_none());
    }

    #[test]
    fn combinators_reject_unintrospectable_children() {
        let err = IsString.or(AlwaysValid).unwrap_err();
        assert_eq!(err, ConfigError::IntrospectionFailed { combinator: "or" });
    }
}
