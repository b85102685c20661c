//! OR combinator - logical disjunction of validators
//!
//! [`Or`] passes as soon as one child passes. Children are tried in order and
//! the rest are skipped after the first success. When none pass it reports a
//! precomputed [`LogicalError`] over every child's failure shape.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let id = or(vec![string().shared(), number().shared()])?;
//! assert!(id.validate(&json!("abc")).is_none());
//! assert_eq!(
//!     id.validate(&json!(true)).unwrap().to_string(),
//!     "(Expected typeof string or expected typeof number)"
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::and::{is_failure, logical};
use crate::foundation::{
    Ancestors, ConfigError, Failure, LogicalError, Operator, Outcome, SharedValidator, Validate,
};

/// Passes when any child passes.
#[derive(Clone)]
pub struct Or {
    pub(crate) validators: Vec<SharedValidator>,
    pub(crate) error: Arc<LogicalError>,
}

impl Or {
    /// Creates an `Or` combinator. At least one child is required.
    pub fn new(validators: Vec<SharedValidator>) -> Result<Self, ConfigError> {
        let error = Arc::new(logical("or", Operator::Or, &validators)?);
        #[cfg(feature = "tracing")]
        tracing::debug!(children = validators.len(), "built or combinator");
        Ok(Self { validators, error })
    }

    /// The alternatives, in evaluation order.
    pub fn validators(&self) -> &[SharedValidator] {
        &self.validators
    }

    /// The shared error returned when every alternative fails.
    pub fn error(&self) -> &Arc<LogicalError> {
        &self.error
    }
}

impl Validate for Or {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        let passes = self
            .validators
            .iter()
            .any(|validator| !is_failure(validator.validate_with(value, ancestors).as_ref()));
        if passes {
            None
        } else {
            Some(Failure::Logical(Arc::clone(&self.error)))
        }
    }

    fn describe(&self) -> Failure {
        Failure::Logical(Arc::clone(&self.error))
    }
}

impl fmt::Debug for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Or")
            .field("children", &self.validators.len())
            .field("error", &self.error)
            .finish()
    }
}

/// Creates an [`Or`] combinator.
pub fn or(validators: Vec<SharedValidator>) -> Result<Or, ConfigError> {
    Or::new(validators)
}
