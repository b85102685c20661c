//! Truthiness validators
//!
//! `null`, `false`, `0`, `-0` and `""` are falsy. Everything else is truthy,
//! including empty arrays and objects.

use serde_json::Value;

use crate::foundation::ValidationError;

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

crate::validator! {
    /// Validates that a value is truthy.
    pub Truthy;
    rule(input) { is_truthy(input) }
    error { ValidationError::new("truthy", "Expected truthy value") }
    fn truthy();
}

crate::validator! {
    /// Validates that a value is falsy.
    pub Falsy;
    rule(input) { !is_truthy(input) }
    error { ValidationError::new("falsy", "Expected falsy value") }
    fn falsy();
}
