//! Type validators
//!
//! Checks on the JSON type of a value. Messages follow the
//! `Expected typeof <type>` convention.

use crate::foundation::ValidationError;

fn expected_typeof(name: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new("typeof", message).with_param("type", name)
}

// ============================================================================
// PRIMITIVES
// ============================================================================

crate::validator! {
    /// Validates that a value is a string.
    pub IsString;
    rule(input) { input.is_string() }
    error { expected_typeof("string", "Expected typeof string") }
    fn string();
}

crate::validator! {
    /// Validates that a value is a number.
    pub IsNumber;
    rule(input) { input.is_number() }
    error { expected_typeof("number", "Expected typeof number") }
    fn number();
}

crate::validator! {
    /// Validates that a value is a boolean.
    pub IsBoolean;
    rule(input) { input.is_boolean() }
    error { expected_typeof("boolean", "Expected typeof boolean") }
    fn boolean();
}

crate::validator! {
    /// Validates that a value is a JSON object.
    pub IsObject;
    rule(input) { input.is_object() }
    error { expected_typeof("object", "Expected typeof object") }
    fn object_like();
}

// ============================================================================
// NUMBERS
// ============================================================================

crate::validator! {
    /// Validates that a value is a whole number, including `2.0`.
    pub IsInteger;
    rule(input) {
        input.is_i64()
            || input.is_u64()
            || input.as_f64().is_some_and(|n| n.is_finite() && n.fract() == 0.0)
    }
    error { ValidationError::new("integer", "Expected integer") }
    fn integer();
}

crate::validator! {
    /// Validates that a value is a finite number.
    pub IsFinite;
    rule(input) { input.as_f64().is_some_and(f64::is_finite) }
    error { ValidationError::new("finite", "Expected finite number") }
    fn finite();
}

// ============================================================================
// CONTAINERS
// ============================================================================

crate::validator! {
    /// Validates that a value is an array, whatever its elements.
    ///
    /// Use [`array`](crate::combinators::array) to validate the elements too.
    pub IsArray;
    rule(input) { input.is_array() }
    error { ValidationError::new("array", "Expected array") }
    fn arr();
}

crate::validator! {
    /// Validates that a value is `null`.
    pub IsNull;
    rule(input) { input.is_null() }
    error { ValidationError::new("is", "Expected null") }
    fn nul();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(json!("a"), [true, false, false, false, false])]
    #[case(json!(1), [false, true, false, false, false])]
    #[case(json!(true), [false, false, true, false, false])]
    #[case(json!({}), [false, false, false, true, false])]
    #[case(json!([]), [false, false, false, false, true])]
    #[case(json!(null), [false, false, false, false, false])]
    fn type_checks(#[case] input: Value, #[case] expected: [bool; 5]) {
        let actual = [
            string().validate(&input).is_none(),
            number().validate(&input).is_none(),
            boolean().validate(&input).is_none(),
            object_like().validate(&input).is_none(),
            arr().validate(&input).is_none(),
        ];
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case(json!(1), true)]
    #[case(json!(-7), true)]
    #[case(json!(2.0), true)]
    #[case(json!(1.5), false)]
    #[case(json!("1"), false)]
    fn integers(#[case] input: Value, #[case] valid: bool) {
        assert_eq!(integer().validate(&input).is_none(), valid);
    }

    #[test]
    fn messages() {
        assert_eq!(string().describe().to_string(), "Expected typeof string");
        assert_eq!(finite().describe().to_string(), "Expected finite number");
        assert_eq!(nul().describe().to_string(), "Expected null");
        assert_eq!(
            number().describe().as_leaf().and_then(|e| e.param("type")),
            Some("number")
        );
    }

    #[test]
    fn null_is_only_null() {
        assert!(nul().validate(&json!(null)).is_none());
        assert!(nul().validate(&json!(0)).is_some());
        assert!(finite().validate(&json!(1.25)).is_none());
    }
}
