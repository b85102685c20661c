//! AND combinator - logical conjunction of validators
//!
//! [`And`] passes when every child passes. It stops at the first failing
//! child and reports a precomputed [`LogicalError`] holding the failure shape
//! of *every* child, so the error explains the whole rule rather than the
//! one clause that happened to break.
//!
//! Use [`all`](super::all) when the error should list only the clauses that
//! actually failed.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let short_string = and(vec![string().shared(), max_length(3).shared()])?;
//! assert!(short_string.validate(&json!("abc")).is_none());
//! assert_eq!(
//!     short_string.validate(&json!(1)).unwrap().to_string(),
//!     "(Expected typeof string and expected max length 3)"
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{
    Ancestors, ConfigError, Failure, LogicalError, Operator, Outcome, SharedValidator, Validate,
    introspect_all,
};

/// Passes when every child passes.
#[derive(Clone)]
pub struct And {
    pub(crate) validators: Vec<SharedValidator>,
    pub(crate) error: Arc<LogicalError>,
}

impl And {
    /// Creates an `And` combinator. At least one child is required.
    pub fn new(validators: Vec<SharedValidator>) -> Result<Self, ConfigError> {
        let error = Arc::new(logical("and", Operator::And, &validators)?);
        #[cfg(feature = "tracing")]
        tracing::debug!(children = validators.len(), "built and combinator");
        Ok(Self { validators, error })
    }

    /// The children, in evaluation order.
    pub fn validators(&self) -> &[SharedValidator] {
        &self.validators
    }

    /// The shared error returned on every failure.
    pub fn error(&self) -> &Arc<LogicalError> {
        &self.error
    }
}

impl Validate for And {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        let passes = self
            .validators
            .iter()
            .all(|validator| !is_failure(validator.validate_with(value, ancestors).as_ref()));
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

impl fmt::Debug for And {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("And")
            .field("children", &self.validators.len())
            .field("error", &self.error)
            .finish()
    }
}

/// Creates an [`And`] combinator.
pub fn and(validators: Vec<SharedValidator>) -> Result<And, ConfigError> {
    And::new(validators)
}

// ============================================================================
// SHARED HELPERS
// ============================================================================

/// Precomputes the logical error over every child's failure shape.
pub(crate) fn logical(
    combinator: &'static str,
    operator: Operator,
    validators: &[SharedValidator],
) -> Result<LogicalError, ConfigError> {
    if validators.is_empty() {
        return Err(ConfigError::EmptyCombinator { combinator });
    }
    LogicalError::new(operator, introspect_all(combinator, validators)?)
}

pub(crate) fn is_failure(outcome: Option<&Failure>) -> bool {
    outcome.is_some_and(Failure::is_erroneous)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{max_length, number, string};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn passes_only_when_every_child_passes() {
        let v = and(vec![string().shared(), max_length(3).shared()]).unwrap();
        assert_eq!(v.validate(&json!("abc")), None);
        assert!(v.validate(&json!("abcd")).is_some());
        assert!(v.validate(&json!(12)).is_some());
    }

    #[test]
    fn error_lists_every_shape() {
        let v = and(vec![string().shared(), max_length(3).shared()]).unwrap();
        let error = v.validate(&json!("abcd")).unwrap();
        assert_eq!(
            error.to_string(),
            "(Expected typeof string and expected max length 3)"
        );
        assert_eq!(error.as_logical().unwrap().errors().len(), 2);
    }

    #[test]
    fn failures_share_one_error() {
        let v = and(vec![string().shared()]).unwrap();
        let (Some(Failure::Logical(a)), Some(Failure::Logical(b))) =
            (v.validate(&json!(1)), v.validate(&json!(2)))
        else {
            panic!("expected logical errors");
        };
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, v.error()));
    }

    #[test]
    fn short_circuits_on_first_failure() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let counting = crate::combinators::create(|_: &Value, _: &Ancestors<'_>| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            true
        })
        .error("counted");

        let v = and(vec![number().shared(), counting.shared()]).unwrap();
        v.validate(&json!("not a number"));
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
        v.validate(&json!(1));
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rejects_empty_children() {
        assert_eq!(
            and(vec![]).unwrap_err(),
            ConfigError::EmptyCombinator { combinator: "and" }
        );
    }
}
