//! Numeric range validators
//!
//! Both bounds are inclusive. Non-numbers fail.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a number is at least `min`.
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 };
    rule(self, input) { input.as_f64().is_some_and(|n| n >= self.min) }
    error(self) {
        ValidationError::new("min", format!("Expected min {}", self.min))
            .with_param("min", self.min.to_string())
    }
    fn min(min: f64);
}

crate::validator! {
    /// Validates that a number is at most `max`.
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 };
    rule(self, input) { input.as_f64().is_some_and(|n| n <= self.max) }
    error(self) {
        ValidationError::new("max", format!("Expected max {}", self.max))
            .with_param("max", self.max.to_string())
    }
    fn max(max: f64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(json!(5), true, true)]
    #[case(json!(4.5), false, true)]
    #[case(json!(10), true, true)]
    #[case(json!(10.5), true, false)]
    #[case(json!("7"), false, false)]
    fn bounds_are_inclusive(#[case] input: Value, #[case] above: bool, #[case] below: bool) {
        assert_eq!(min(5.0).validate(&input).is_none(), above);
        assert_eq!(max(10.0).validate(&input).is_none(), below);
    }

    #[test]
    fn messages_use_the_shortest_number_form() {
        assert_eq!(min(5.0).describe().to_string(), "Expected min 5");
        assert_eq!(max(0.5).describe().to_string(), "Expected max 0.5");
    }
}
