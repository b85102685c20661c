//! NOT combinator - logical negation of a validator
//!
//! [`Not`] passes when its child fails. When the child passes it reports a
//! precomputed [`NegateError`] carrying the child's failure shape, so
//! `not(nullish())` renders as `not("Expected nullish")`.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::and::is_failure;
use crate::foundation::{
    Ancestors, ConfigError, Failure, NegateError, Outcome, SharedValidator, Validate, ValidateExt,
    introspect_in,
};

/// Inverts a validator.
#[derive(Clone)]
pub struct Not {
    pub(crate) validator: SharedValidator,
    pub(crate) error: Arc<NegateError>,
}

impl Not {
    /// Creates a NOT combinator.
    pub fn new(validator: SharedValidator) -> Result<Self, ConfigError> {
        let error = Arc::new(NegateError::new(introspect_in("not", validator.as_ref())?));
        Ok(Self { validator, error })
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &SharedValidator {
        &self.validator
    }

    /// The shared error returned when the inner validator passes.
    pub fn error(&self) -> &Arc<NegateError> {
        &self.error
    }
}

impl Validate for Not {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        if is_failure(self.validator.validate_with(value, ancestors).as_ref()) {
            None
        } else {
            Some(Failure::Negate(Arc::clone(&self.error)))
        }
    }

    fn describe(&self) -> Failure {
        Failure::Negate(Arc::clone(&self.error))
    }
}

impl fmt::Debug for Not {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Not").field("error", &self.error).finish()
    }
}

/// Creates a NOT combinator.
pub fn not<V: Validate + 'static>(validator: V) -> Result<Not, ConfigError> {
    Not::new(validator.shared())
}
