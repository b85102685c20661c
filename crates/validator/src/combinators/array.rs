//! ARRAY combinator - validates every element of a list
//!
//! The result is always a structural list with one slot per element, so
//! flattening yields paths like `tags.2`. A non-array input yields the single
//! slot `["Expected array"]`, and so does introspection: there are no
//! elements to break down.

use std::fmt;

use serde_json::Value;

use crate::foundation::{
    Ancestors, ConfigError, Failure, Outcome, SharedValidator, Validate, ValidateExt,
    ValidationError, introspect_in,
};

/// Validates each element with the same validator.
#[derive(Clone)]
pub struct Array {
    validator: SharedValidator,
}

impl Array {
    /// Creates an ARRAY combinator.
    pub fn new(validator: SharedValidator) -> Result<Self, ConfigError> {
        introspect_in("array", validator.as_ref())?;
        Ok(Self { validator })
    }

    /// The element validator.
    pub fn element(&self) -> &SharedValidator {
        &self.validator
    }
}

impl Validate for Array {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        let Some(items) = value.as_array() else {
            return Some(Failure::list(vec![Some(expected_array())]));
        };
        let ancestors = ancestors.push(value);
        Some(Failure::list(
            items
                .iter()
                .map(|item| self.validator.validate_with(item, &ancestors))
                .collect(),
        ))
    }

    fn describe(&self) -> Failure {
        Failure::list(vec![Some(expected_array())])
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array").finish_non_exhaustive()
    }
}

fn expected_array() -> Failure {
    Failure::Leaf(ValidationError::new("array", "Expected array"))
}

/// Creates an ARRAY combinator.
pub fn array<V: Validate + 'static>(validator: V) -> Result<Array, ConfigError> {
    Array::new(validator.shared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::list_errors;
    use crate::validators::{number, string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn one_slot_per_element() {
        let v = array(string()).unwrap();
        let error = v.validate(&json!(["a", 1, "b"])).unwrap();
        let slots = error.as_list().unwrap();
        assert_eq!(slots.len(), 3);
        assert!(slots[0].is_none());
        assert_eq!(slots[1].as_ref().unwrap().to_string(), "Expected typeof string");
        assert!(slots[2].is_none());
    }

    #[test]
    fn valid_array_is_a_structure_without_errors() {
        let v = array(number()).unwrap();
        let outcome = v.validate(&json!([1, 2, 3]));
        assert!(outcome.as_ref().is_some_and(Failure::is_structural));
        assert!(list_errors(outcome.as_ref()).is_empty());
    }

    #[test]
    fn non_array_reports_at_index_zero() {
        let v = array(number()).unwrap();
        let items = list_errors(v.validate(&json!("nope")).as_ref());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].path, "0");
        assert_eq!(items[0].err.to_string(), "Expected array");
    }

    #[test]
    fn elements_see_the_array_as_parent() {
        let v = array(crate::combinators::create(|_: &Value, ancestors: &Ancestors<'_>| {
            ancestors.parent().is_some_and(Value::is_array)
        })
        .error("Expected array parent"))
        .unwrap();
        assert!(list_errors(v.validate(&json!([1, 2])).as_ref()).is_empty());
    }

    #[test]
    fn describe_matches_non_array_input() {
        let v = array(string()).unwrap();
        assert_eq!(Some(v.describe()), v.validate(&json!(5)));
        assert_eq!(v.describe(), Failure::list(vec![Some(expected_array())]));
    }
}
