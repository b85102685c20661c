//! XOR combinator - exactly one child must pass
//!
//! [`Xor`] evaluates children in order and stops once two have passed, since
//! the answer cannot change after that.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::and::{is_failure, logical};
use crate::foundation::{
    Ancestors, ConfigError, Failure, LogicalError, Operator, Outcome, SharedValidator, Validate,
};

/// Passes when exactly one child passes.
#[derive(Clone)]
pub struct Xor {
    pub(crate) validators: Vec<SharedValidator>,
    pub(crate) error: Arc<LogicalError>,
}

impl Xor {
    /// Creates a `Xor` combinator. At least one child is required.
    pub fn new(validators: Vec<SharedValidator>) -> Result<Self, ConfigError> {
        let error = Arc::new(logical("xor", Operator::Xor, &validators)?);
        #[cfg(feature = "tracing")]
        tracing::debug!(children = validators.len(), "built xor combinator");
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

impl Validate for Xor {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        let passes = self
            .validators
            .iter()
            .filter(|validator| !is_failure(validator.validate_with(value, ancestors).as_ref()))
            .take(2)
            .count();
        if passes == 1 {
            None
        } else {
            Some(Failure::Logical(Arc::clone(&self.error)))
        }
    }

    fn describe(&self) -> Failure {
        Failure::Logical(Arc::clone(&self.error))
    }
}

impl fmt::Debug for Xor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Xor")
            .field("children", &self.validators.len())
            .field("error", &self.error)
            .finish()
    }
}

/// Creates a [`Xor`] combinator.
pub fn xor(validators: Vec<SharedValidator>) -> Result<Xor, ConfigError> {
    Xor::new(validators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::create;
    use crate::foundation::ValidateExt;
    use crate::validators::{integer, number, string};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn exactly_one_must_pass() {
        let v = xor(vec![string().shared(), integer().shared()]).unwrap();
        assert!(v.validate(&json!("a")).is_none());
        assert!(v.validate(&json!(1)).is_none());
        assert!(v.validate(&json!(1.5)).is_some());

        let overlapping = xor(vec![number().shared(), integer().shared()]).unwrap();
        assert!(overlapping.validate(&json!(1.5)).is_none());
        assert_eq!(
            overlapping.validate(&json!(2)).unwrap().to_string(),
            "(Expected typeof number xor expected integer)"
        );
    }

    #[test]
    fn stops_after_two_passes() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let counting = create(|_: &Value, _: &Ancestors<'_>| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            true
        })
        .error("counted");

        let v = xor(vec![number().shared(), integer().shared(), counting.shared()]).unwrap();
        assert!(v.validate(&json!(3)).is_some());
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
    }
}
