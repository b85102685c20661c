//! Presence validators
//!
//! JSON has no `undefined`: a missing object member or tuple slot reads as
//! `null`, so "nullish" and "absent" are the same thing here.
//!
//! # Validators
//!
//! - [`nullish`] - passes for `null`
//! - [`exists`] / [`present`] - `not(nullish())`, passes for anything else

use std::sync::Arc;

use crate::combinators::Not;
use crate::foundation::{NegateError, Validate, ValidationError};

crate::validator! {
    /// Validates that a value is `null` (or missing).
    pub Nullish;
    rule(input) { input.is_null() }
    error { ValidationError::new("nullish", "Expected nullish") }
    fn nullish();
}

/// Validates that a value is present, i.e. not `null`.
///
/// This is `not(nullish())`, built without the fallible constructor since
/// the shape of [`Nullish`] is known to be erroneous.
#[must_use]
pub fn exists() -> Not {
    Not {
        validator: Arc::new(Nullish),
        error: Arc::new(NegateError::new(Nullish.describe())),
    }
}

/// Alias for [`exists`].
#[must_use]
pub fn present() -> Not {
    exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::not;
    use serde_json::json;

    #[test]
    fn nullish_accepts_only_null() {
        assert!(nullish().validate(&json!(null)).is_none());
        for value in [json!(0), json!(""), json!(false), json!([]), json!({})] {
            assert!(nullish().validate(&value).is_some(), "{value}");
        }
    }

    #[test]
    fn exists_matches_negated_nullish() {
        let negated = not(nullish()).unwrap();
        assert_eq!(exists().describe(), negated.describe());
        assert_eq!(exists().describe().to_string(), "not(\"Expected nullish\")");
        for value in [json!(null), json!(0), json!("x")] {
            assert_eq!(
                exists().validate(&value).is_none(),
                negated.validate(&value).is_none()
            );
        }
    }

    #[test]
    fn present_is_exists() {
        assert!(present().validate(&json!(false)).is_none());
        assert!(present().validate(&json!(null)).is_some());
    }
}
