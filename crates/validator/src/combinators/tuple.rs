//! TUPLE combinator - positional validators
//!
//! Slot `i` is validated by the `i`-th validator. A missing element reports
//! its validator's failure shape, and an element beyond the declared
//! positions reports `"Extraneous element"`.

use std::fmt;

use serde_json::Value;

use crate::foundation::{
    Ancestors, ConfigError, Failure, Outcome, SharedValidator, Validate, ValidationError,
    introspect_all,
};

/// Validates a fixed-length list position by position.
#[derive(Clone)]
pub struct Tuple {
    validators: Vec<SharedValidator>,
    shapes: Vec<Failure>,
}

impl Tuple {
    /// Creates a TUPLE combinator. At least one position is required.
    pub fn new(validators: Vec<SharedValidator>) -> Result<Self, ConfigError> {
        if validators.is_empty() {
            return Err(ConfigError::EmptyCombinator { combinator: "tuple" });
        }
        let shapes = introspect_all("tuple", &validators)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(positions = validators.len(), "built tuple combinator");
        Ok(Self { validators, shapes })
    }

    /// Number of declared positions.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Always false; a tuple has at least one position.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validate for Tuple {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        let Some(items) = value.as_array() else {
            return Some(self.describe());
        };
        let ancestors = ancestors.push(value);
        let count = self.validators.len().max(items.len());
        Some(Failure::list(
            (0..count)
                .map(|i| match (self.validators.get(i), items.get(i)) {
                    (Some(validator), Some(item)) => validator.validate_with(item, &ancestors),
                    (Some(_), None) => Some(self.shapes[i].clone()),
                    (None, _) => Some(extraneous_element()),
                })
                .collect(),
        ))
    }

    fn describe(&self) -> Failure {
        Failure::list(self.shapes.iter().cloned().map(Some).collect())
    }
}

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tuple")
            .field("shapes", &self.shapes)
            .finish_non_exhaustive()
    }
}

fn extraneous_element() -> Failure {
    Failure::Leaf(ValidationError::new("extraneous", "Extraneous element"))
}

/// Creates a TUPLE combinator.
pub fn tuple(validators: Vec<SharedValidator>) -> Result<Tuple, ConfigError> {
    Tuple::new(validators)
}
