//! ALL combinator - exhaustive conjunction
//!
//! Like [`and`](super::and), but every child is evaluated and the error only
//! lists the children that actually failed. Good for password rules and other
//! UIs that show every unmet requirement at once.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::and::{is_failure, logical};
use crate::foundation::{
    Ancestors, ConfigError, Failure, LogicalError, Operator, Outcome, SharedValidator, Validate,
};

/// Passes when every child passes; reports only the failing ones.
#[derive(Clone)]
pub struct All {
    validators: Vec<SharedValidator>,
    shape: Arc<LogicalError>,
}

impl All {
    /// Creates an `All` combinator. At least one child is required.
    pub fn new(validators: Vec<SharedValidator>) -> Result<Self, ConfigError> {
        let shape = Arc::new(logical("all", Operator::And, &validators)?);
        #[cfg(feature = "tracing")]
        tracing::debug!(children = validators.len(), "built all combinator");
        Ok(Self { validators, shape })
    }

    /// The children, in evaluation order.
    pub fn validators(&self) -> &[SharedValidator] {
        &self.validators
    }
}

impl Validate for All {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        let errors: Vec<Failure> = self
            .validators
            .iter()
            .filter_map(|validator| validator.validate_with(value, ancestors))
            .filter(|error| is_failure(Some(error)))
            .collect();
        if errors.is_empty() {
            return None;
        }
        Some(Failure::Logical(Arc::new(LogicalError {
            operator: Operator::And,
            errors,
        })))
    }

    fn describe(&self) -> Failure {
        Failure::Logical(Arc::clone(&self.shape))
    }
}

impl fmt::Debug for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("All")
            .field("children", &self.validators.len())
            .field("shape", &self.shape)
            .finish()
    }
}

/// Creates an [`All`] combinator.
pub fn all(validators: Vec<SharedValidator>) -> Result<All, ConfigError> {
    All::new(validators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{max_length, min_length, pattern};
    use serde_json::json;

    fn password() -> All {
        all(vec![
            min_length(8).shared(),
            max_length(16).shared(),
            pattern("[0-9]").unwrap().shared(),
        ])
        .unwrap()
    }

    #[test]
    fn reports_only_failing_children() {
        let error = password().validate(&json!("abc")).unwrap();
        assert_eq!(
            error.to_string(),
            "(Expected min length 8 and expected to match pattern /[0-9]/)"
        );
    }

    #[test]
    fn single_failure_is_not_parenthesized() {
        let error = password().validate(&json!("abcdefgh")).unwrap();
        assert_eq!(error.to_string(), "Expected to match pattern /[0-9]/");
    }

    #[test]
    fn passes_when_every_child_passes() {
        assert_eq!(password().validate(&json!("abcdefg1")), None);
    }

    #[test]
    fn describe_lists_every_child() {
        assert_eq!(
            password().describe().as_logical().map(|e| e.errors().len()),
            Some(3)
        );
    }
}
