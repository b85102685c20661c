//! MESSAGE combinator - custom errors
//!
//! [`WithErr`] replaces whatever a validator reports with a fixed error, and
//! describes itself with that error too. Parents that introspect it see the
//! replacement, never the inner shape.

use serde_json::Value;

use super::and::is_failure;
use crate::foundation::{Ancestors, Failure, Outcome, Validate};

// ============================================================================
// WITH ERR COMBINATOR
// ============================================================================

/// Replaces the error of a validator.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let password = with_err(min_length(8), "Password must be at least 8 characters");
/// assert_eq!(
///     password.validate(&json!("short")).unwrap().to_string(),
///     "Password must be at least 8 characters"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct WithErr<V> {
    inner: V,
    error: Failure,
}

impl<V> WithErr<V> {
    /// Creates a new `WithErr` combinator.
    pub fn new(inner: V, error: impl Into<Failure>) -> Self {
        Self {
            inner,
            error: error.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// The replacement error.
    pub fn error(&self) -> &Failure {
        &self.error
    }

    /// Unwraps the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for WithErr<V> {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        if is_failure(self.inner.validate_with(value, ancestors).as_ref()) {
            Some(self.error.clone())
        } else {
            None
        }
    }

    fn describe(&self) -> Failure {
        self.error.clone()
    }
}

/// Replaces the error of a validator.
pub fn with_err<V>(validator: V, error: impl Into<Failure>) -> WithErr<V> {
    WithErr::new(validator, error)
}

/// Alias of [`with_err`].
pub fn err<V>(validator: V, error: impl Into<Failure>) -> WithErr<V> {
    WithErr::new(validator, error)
}

// ============================================================================
// TESTS
// ============================================================================
