//! Length validators
//!
//! Length is measured on strings (in Unicode scalar values) and arrays.
//! Every other value fails.

use serde_json::Value;

use crate::foundation::ValidationError;

/// Measures a string or array.
#[inline]
fn measure(input: &Value) -> Option<usize> {
    match input {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string or array has at least `min` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize };
    rule(self, input) { measure(input).is_some_and(|len| len >= self.min) }
    error(self) {
        ValidationError::new("min_length", format!("Expected min length {}", self.min))
            .with_param("min", self.min.to_string())
    }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string or array has at most `max` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize };
    rule(self, input) { measure(input).is_some_and(|len| len <= self.max) }
    error(self) {
        ValidationError::new("max_length", format!("Expected max length {}", self.max))
            .with_param("max", self.max.to_string())
    }
    fn max_length(max: usize);
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

crate::validator! {
    /// Validates that a length lies in `min..=max`.
    ///
    /// Use `length(n, n)` for an exact length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Length { min: usize, max: usize };
    rule(self, input) { measure(input).is_some_and(|len| (self.min..=self.max).contains(&len)) }
    error(self) {
        let message = if self.min == self.max {
            format!("Expected length {}", self.min)
        } else {
            format!("Expected length between {} and {}", self.min, self.max)
        };
        ValidationError::new("length", message)
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string())
    }
    fn length(min: usize, max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
