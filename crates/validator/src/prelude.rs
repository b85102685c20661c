//! Prelude module for convenient imports.
//!
//! Provides a single `use verity_validator::prelude::*;` import that brings
//! in the traits, error types, validators, combinators and report helpers.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let username = compose![string(), min_length(3), max_length(20)]?;
//! let age = integer().and(min(18.0))?;
//! let tags = array(string())?;
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, failure model
// ============================================================================

pub use crate::foundation::{
    Ancestors, ConfigError, Failure, LogicalError, NegateError, OBJECT_ROOT, Operator, Outcome,
    PeerError, Record, SharedValidator, Structure, Validate, ValidateExt, ValidationError,
    introspect,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    All, And, Array, Factory, Lazy, Merge, Not, Object, ObjectBuilder, ObjectOptions, Or, Peer,
    Predicate, Tuple, When, WithErr, Xor, all, and, and_peer, and_peers, array, create, err, lazy,
    merge, nand_peer, nand_peers, not, object, or, or_peer, or_peers, oxor_peer, oxor_peers, peer,
    tuple, when, with_err, xor, xor_peer, xor_peers,
};

// ============================================================================
// REPORT: Flattening and assertions
// ============================================================================

pub use crate::report::{
    AssertErrParams, AssertError, ErrItem, assert, assert_with, has_errors, is_error, list_errors,
    okay,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{all_of, any_of, compose, one_of, validator};

pub use serde_json::{Value, json};
