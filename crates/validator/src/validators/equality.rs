//! Equality validators
//!
//! - [`is`] - equal to a fixed value
//! - [`one_of`] - equal to one of a fixed set of values
//! - [`match_peer`] - equal to a sibling member of the enclosing object

use std::fmt;

use serde_json::Value;

use super::display_value;
use crate::combinators::NULL;
use crate::foundation::{Ancestors, Failure, Outcome, Validate, ValidationError};

// ============================================================================
// IS
// ============================================================================

crate::validator! {
    /// Validates that a value equals `expected`.
    ///
    /// Strings render unquoted, so `is("yes")` fails with `Expected yes`.
    #[derive(PartialEq)]
    pub Is { expected: Value };
    rule(self, input) { *input == self.expected }
    error(self) {
        ValidationError::new("is", format!("Expected {}", display_value(&self.expected)))
    }
    new(expected: impl Into<Value>) { Self { expected: expected.into() } }
    fn is(expected: impl Into<Value>);
}

// ============================================================================
// ONE OF
// ============================================================================

/// Validates that a value equals one of a fixed set of values.
///
/// An empty set rejects everything.
#[derive(Clone, PartialEq)]
pub struct OneOf {
    allowed: Vec<Value>,
}

impl OneOf {
    /// Creates a membership validator.
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// The accepted values, in declaration order.
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

impl Validate for OneOf {
    fn validate_with(&self, value: &Value, _: &Ancestors<'_>) -> Outcome {
        if self.allowed.contains(value) {
            None
        } else {
            Some(self.describe())
        }
    }

    fn describe(&self) -> Failure {
        let listed = self
            .allowed
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", ");
        Failure::from(ValidationError::new(
            "one_of",
            format!("Expected one of {listed}"),
        ))
    }
}

impl fmt::Debug for OneOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneOf")
            .field("allowed", &self.allowed.len())
            .finish()
    }
}

/// Creates a [`OneOf`] validator.
#[must_use]
pub fn one_of<I>(allowed: I) -> OneOf
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    OneOf::new(allowed)
}

// ============================================================================
// MATCH PEER
// ============================================================================

crate::validator! {
    /// Validates that a value equals the sibling stored under `key`.
    ///
    /// Both sides read as `null` when missing, so two absent members match.
    /// Fails when there is no enclosing container.
    pub MatchPeer { key: String };
    rule(self, input, ancestors) {
        !ancestors.is_empty() && ancestors.sibling(&self.key).unwrap_or(&NULL) == input
    }
    error(self) {
        ValidationError::new("match", format!("Expected to match {}", self.key))
            .with_param("key", self.key.clone())
    }
    new(key: impl Into<String>) { Self { key: key.into() } }
    fn match_peer(key: impl Into<String>);
}

// ============================================================================
// TESTS
// ============================================================================
