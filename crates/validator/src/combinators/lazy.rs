//! LAZY combinator - forward references for recursive schemas
//!
//! A schema that contains itself (a tree whose children are trees) cannot be
//! built bottom-up. [`lazy`] hands out a placeholder that is wired to the
//! finished schema afterwards with [`Lazy::resolve`].
//!
//! The placeholder holds a weak reference, so a recursive schema does not keep
//! itself alive. Evaluating a placeholder that was never resolved, or whose
//! target was dropped, reports an `unresolved_reference` error.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let node = lazy();
//! let tree: SharedValidator = object()
//!     .field("name", string())
//!     .field("children", array(node.clone())?)
//!     .build()?
//!     .shared();
//! node.resolve(&tree);
//!
//! assert!(okay(&json!({ "name": "a", "children": [{ "name": "b", "children": [] }] }), &tree));
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use serde_json::Value;

use crate::foundation::{
    Ancestors, Failure, Outcome, SharedValidator, Validate, ValidationError,
};

// ============================================================================
// LAZY COMBINATOR
// ============================================================================

/// A forward reference to a validator built later.
#[derive(Default)]
pub struct Lazy {
    target: OnceLock<Weak<dyn Validate>>,
}

impl Lazy {
    /// Creates an unresolved reference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the reference at `target`. Returns `false` if it was already
    /// resolved, in which case the first target is kept.
    pub fn resolve(&self, target: &SharedValidator) -> bool {
        self.target.set(Arc::downgrade(target)).is_ok()
    }

    /// Returns true if the reference has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.target.get().is_some()
    }

    fn get(&self) -> Option<SharedValidator> {
        self.target.get().and_then(Weak::upgrade)
    }
}

impl Validate for Lazy {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        match self.get() {
            Some(target) => target.validate_with(value, ancestors),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    resolved = self.is_resolved(),
                    "evaluated an unresolved validator reference"
                );
                Some(unresolved())
            }
        }
    }

    fn describe(&self) -> Failure {
        self.get().map_or_else(unresolved, |target| target.describe())
    }
}

// Manual Debug impl since the target may be recursive
impl fmt::Debug for Lazy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

fn unresolved() -> Failure {
    Failure::Leaf(ValidationError::new(
        "unresolved_reference",
        "Unresolved validator reference",
    ))
}

/// Creates an unresolved forward reference.
pub fn lazy() -> Arc<Lazy> {
    Arc::new(Lazy::new())
}

// ============================================================================
// TESTS
// ============================================================================
