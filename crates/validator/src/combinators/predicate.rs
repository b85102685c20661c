//! Predicate validators - the leaves every schema bottoms out in
//!
//! [`create`] turns a boolean predicate into a [`Factory`], and the factory
//! binds it to the error it reports. The same factory can be bound to
//! several errors.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::combinators::create;
//!
//! let positive = create(|value, _| value.as_f64().is_some_and(|n| n > 0.0));
//! let age = positive.error("Expected positive age");
//! let count = positive.error("Expected positive count");
//!
//! assert!(age.validate(&json!(3)).is_none());
//! assert_eq!(count.validate(&json!(-1)).unwrap().to_string(), "Expected positive count");
//! ```

use std::fmt;

use serde_json::Value;

use crate::foundation::{Ancestors, Failure, Outcome, Validate};

// ============================================================================
// FACTORY
// ============================================================================

/// A predicate waiting for its error.
#[derive(Clone, Copy)]
pub struct Factory<F> {
    predicate: F,
}

impl<F> Factory<F>
where
    F: Fn(&Value, &Ancestors<'_>) -> bool + Clone + Send + Sync,
{
    /// Binds the predicate to the error it reports.
    pub fn error(&self, error: impl Into<Failure>) -> Predicate<F> {
        Predicate {
            predicate: self.predicate.clone(),
            error: error.into(),
        }
    }
}

impl<F> fmt::Debug for Factory<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory").finish_non_exhaustive()
    }
}

/// Starts a predicate validator.
///
/// The predicate receives the value and its ancestors, and returns `true`
/// when the value is valid.
pub fn create<F>(predicate: F) -> Factory<F>
where
    F: Fn(&Value, &Ancestors<'_>) -> bool + Clone + Send + Sync,
{
    Factory { predicate }
}

// ============================================================================
// PREDICATE
// ============================================================================

/// Reports a fixed error whenever its predicate is false.
#[derive(Clone)]
pub struct Predicate<F> {
    predicate: F,
    error: Failure,
}

impl<F> Predicate<F> {
    /// The error this validator reports.
    pub const fn error(&self) -> &Failure {
        &self.error
    }
}

impl<F> Validate for Predicate<F>
where
    F: Fn(&Value, &Ancestors<'_>) -> bool + Send + Sync,
{
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        if (self.predicate)(value, ancestors) {
            None
        } else {
            Some(self.error.clone())
        }
    }

    fn describe(&self) -> Failure {
        self.error.clone()
    }
}

// Manual Debug impl since F is a closure
impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;
    use serde_json::json;

    #[test]
    fn predicate_passes_and_fails() {
        let even = create(|value: &Value, _: &Ancestors<'_>| {
            value.as_i64().is_some_and(|n| n % 2 == 0)
        })
        .error(ValidationError::new("even", "Expected even number"));

        assert_eq!(even.validate(&json!(4)), None);
        assert_eq!(
            even.validate(&json!(3)).map(|e| e.to_string()),
            Some("Expected even number".to_owned())
        );
        assert!(even.validate(&json!("4")).is_some());
    }

    #[test]
    fn describe_is_the_bound_error() {
        let any = create(|_: &Value, _: &Ancestors<'_>| true).error("Never reported");
        assert_eq!(any.describe(), Failure::from("Never reported"));
    }

    #[test]
    fn factory_can_be_reused() {
        let truthy = create(|value: &Value, _: &Ancestors<'_>| value.as_bool() == Some(true));
        let a = truthy.error("A");
        let b = truthy.error("B");
        assert_eq!(a.validate(&json!(false)), Some(Failure::from("A")));
        assert_eq!(b.validate(&json!(false)), Some(Failure::from("B")));
    }

    #[test]
    fn predicate_sees_ancestors() {
        let has_parent =
            create(|_: &Value, ancestors: &Ancestors<'_>| ancestors.parent().is_some())
                .error("Expected parent");
        let outer = json!({ "a": 1 });
        let root = Ancestors::root();
        let chain = root.push(&outer);

        assert!(has_parent.validate(&json!(1)).is_some());
        assert!(has_parent.validate_with(&json!(1), &chain).is_none());
    }
}
