//! WHEN combinator - conditional validation
//!
//! Runs the inner validator only when a predicate holds, and passes
//! otherwise. A failure reports the inner validator's failure shape.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! // Only check the format when a value was given
//! let optional_email = when(|value, _| !value.is_null(), email())?;
//! assert!(optional_email.validate(&json!(null)).is_none());
//! assert!(optional_email.validate(&json!("nope")).is_some());
//! ```

use std::fmt;

use serde_json::Value;

use super::and::is_failure;
use crate::foundation::{
    Ancestors, ConfigError, Failure, Outcome, SharedValidator, Validate, ValidateExt,
    introspect_in,
};

/// Validates only when the predicate holds.
#[derive(Clone)]
pub struct When<P> {
    predicate: P,
    validator: SharedValidator,
    shape: Failure,
}

impl<P> When<P>
where
    P: Fn(&Value, &Ancestors<'_>) -> bool + Send + Sync,
{
    /// Creates a WHEN combinator.
    pub fn new(predicate: P, validator: SharedValidator) -> Result<Self, ConfigError> {
        let shape = introspect_in("when", validator.as_ref())?;
        Ok(Self {
            predicate,
            validator,
            shape,
        })
    }
}

impl<P> Validate for When<P>
where
    P: Fn(&Value, &Ancestors<'_>) -> bool + Send + Sync,
{
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        if !(self.predicate)(value, ancestors) {
            return None;
        }
        if is_failure(self.validator.validate_with(value, ancestors).as_ref()) {
            Some(self.shape.clone())
        } else {
            None
        }
    }

    fn describe(&self) -> Failure {
        self.shape.clone()
    }
}

impl<P> fmt::Debug for When<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When")
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

/// Creates a WHEN combinator.
pub fn when<P, V>(predicate: P, validator: V) -> Result<When<P>, ConfigError>
where
    P: Fn(&Value, &Ancestors<'_>) -> bool + Send + Sync,
    V: Validate + 'static,
{
    When::new(predicate, validator.shared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{array, object};
    use crate::report::list_errors;
    use crate::validators::{number, string};
    use serde_json::json;

    #[test]
    fn skips_when_predicate_is_false() {
        let v = when(|value: &Value, _: &Ancestors<'_>| !value.is_null(), string()).unwrap();
        assert_eq!(v.validate(&json!(null)), None);
        assert_eq!(v.validate(&json!("a")), None);
        assert_eq!(v.validate(&json!(1)), Some(string().describe()));
    }

    #[test]
    fn reports_the_introspected_shape() {
        let v = when(|_: &Value, _: &Ancestors<'_>| true, array(number()).unwrap()).unwrap();
        // the shape, not the evaluated list
        assert_eq!(v.validate(&json!([1, "x", "y"])), Some(array(number()).unwrap().describe()));
    }

    #[test]
    fn predicate_can_consult_siblings() {
        let card_number = when(
            |_: &Value, ancestors: &Ancestors<'_>| {
                ancestors
                    .parent()
                    .is_some_and(|parent| parent["method"] == json!("card"))
            },
            string(),
        )
        .unwrap();
        let payment = object()
            .field("method", string())
            .field("number", card_number)
            .build()
            .unwrap();

        let errors = list_errors(payment.validate(&json!({ "method": "card" })).as_ref());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "number");
        assert!(list_errors(payment.validate(&json!({ "method": "cash" })).as_ref()).is_empty());
    }
}
