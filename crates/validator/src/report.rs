//! Error flattening and assertions
//!
//! Structural failures nest: an object holds a record, a record holds lists,
//! and so on. [`list_errors`] flattens them into [`ErrItem`]s with dot-joined
//! paths, and the assertion helpers turn a failing evaluation into an
//! [`AssertError`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let user = object().field("name", string()).build()?;
//!
//! assert!(okay(&json!({ "name": "ada" }), &user));
//!
//! let err = assert(&json!({ "name": 1 }), &user).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid: first of 1 errors: name: Expected typeof string");
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::foundation::{Failure, Structure, Validate};

// ============================================================================
// FLATTENING
// ============================================================================

/// A single error with the path that leads to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrItem {
    /// Dot-joined path of list indices and record keys. Empty at the top level.
    pub path: String,
    /// The error found at `path`.
    pub err: Failure,
}

/// Flattens a failure into its errors, depth-first.
///
/// Records list their declared keys before the root slot, lists go in index
/// order. Absent slots and pending placeholders are skipped.
pub fn list_errors(outcome: Option<&Failure>) -> Vec<ErrItem> {
    let mut items = Vec::new();
    if let Some(failure) = outcome {
        collect(failure, String::new(), &mut items);
    }
    items
}

fn collect(failure: &Failure, path: String, items: &mut Vec<ErrItem>) {
    match failure {
        Failure::Structure(Structure::List(slots)) => {
            for (index, slot) in slots.iter().enumerate() {
                if let Some(child) = slot {
                    collect(child, join(&path, &index.to_string()), items);
                }
            }
        }
        Failure::Structure(Structure::Record(record)) => {
            for (key, child) in record.entries() {
                collect(child, join(&path, key), items);
            }
        }
        Failure::Pending => {}
        other => items.push(ErrItem {
            path,
            err: other.clone(),
        }),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

/// Returns true if flattening `outcome` would list at least one error.
///
/// Stops at the first error found.
pub fn has_errors(outcome: Option<&Failure>) -> bool {
    outcome.is_some_and(Failure::is_erroneous)
}

/// Alias for [`has_errors`].
pub fn is_error(outcome: Option<&Failure>) -> bool {
    has_errors(outcome)
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Raised by [`assert`] when a value is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertError {
    message: String,
    errors: Vec<ErrItem>,
}

impl AssertError {
    /// Summarizes `errors` as `Invalid: first of N errors: <path>: <error>`.
    pub fn new(errors: Vec<ErrItem>) -> Self {
        let message = match errors.first() {
            Some(first) if first.path.is_empty() => {
                format!("Invalid: first of {} errors: {}", errors.len(), first.err)
            }
            Some(first) => format!(
                "Invalid: first of {} errors: {}: {}",
                errors.len(),
                first.path,
                first.err
            ),
            None => "Invalid".to_owned(),
        };
        Self { message, errors }
    }

    /// An error with a fixed message and no error list.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Attaches the flattened errors.
    #[must_use]
    pub fn with_errors(mut self, errors: Vec<ErrItem>) -> Self {
        self.errors = errors;
        self
    }

    /// The flattened errors behind this assertion.
    pub fn errors(&self) -> &[ErrItem] {
        &self.errors
    }
}

/// What an [`assert_with`] error builder receives.
#[derive(Debug, Clone)]
pub struct AssertErrParams {
    /// The unflattened failure.
    pub error: Failure,
    /// `list_errors(Some(&error))`, never empty.
    pub error_list: Vec<ErrItem>,
}

/// Validates `value`, failing with a summary of the first error.
pub fn assert<V>(value: &Value, validator: &V) -> Result<(), AssertError>
where
    V: Validate + ?Sized,
{
    assert_with(value, validator, |params| AssertError::new(params.error_list))
}

/// Validates `value`, building the failure with `on_error`.
///
/// ```rust,ignore
/// assert_with(&input, &schema, |_| AssertError::message("Bad request"))?;
/// assert_with(&input, &schema, |params| {
///     AssertError::message(format!("{} problems", params.error_list.len()))
/// })?;
/// ```
pub fn assert_with<V, F>(value: &Value, validator: &V, on_error: F) -> Result<(), AssertError>
where
    V: Validate + ?Sized,
    F: FnOnce(AssertErrParams) -> AssertError,
{
    let Some(error) = validator.validate(value) else {
        return Ok(());
    };
    let error_list = list_errors(Some(&error));
    if error_list.is_empty() {
        return Ok(());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        errors = error_list.len(),
        first = %error_list[0].path,
        "assertion failed"
    );

    Err(on_error(AssertErrParams { error, error_list }))
}

/// Returns true if `value` passes `validator`.
pub fn okay<V>(value: &Value, validator: &V) -> bool
where
    V: Validate + ?Sized,
{
    !has_errors(validator.validate(value).as_ref())
}

// ============================================================================
// TESTS
// ============================================================================
