//! Core validation types and traits
//!
//! This module contains the building blocks every combinator is made of:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Failures**: [`Failure`], [`Outcome`], [`Record`], [`LogicalError`],
//!   [`PeerError`], [`NegateError`]
//! - **Errors**: [`ValidationError`] for leaves, [`ConfigError`] for schemas
//! - **Context**: [`Ancestors`], the chain of enclosing containers
//!
//! # Architecture
//!
//! ## 1. Failures are data
//!
//! A validator never panics or returns `Err` for bad input. It returns an
//! [`Outcome`], and `None` means the value passed:
//!
//! ```rust,ignore
//! let outcome = string().validate(&json!(42));
//! assert_eq!(outcome.unwrap().to_string(), "Expected typeof string");
//! ```
//!
//! ## 2. Introspection instead of evaluation
//!
//! Every validator can [`describe`](Validate::describe) its failure shape
//! without being given a value. Combinators call this once when they are
//! built, so `and(...)`, `or(...)` and `not(...)` hand out precomputed errors.
//!
//! ## 3. Schemas fail fast
//!
//! Constructors that can be misconfigured return `Result<_, ConfigError>`.

mod ancestors;
mod error;
mod failure;
mod traits;

pub use ancestors::Ancestors;
pub use error::{ConfigError, ErrorParams, ValidationError};
pub use failure::{
    Failure, LogicalError, NegateError, OBJECT_ROOT, Operator, Outcome, PeerError, Record,
    Structure,
};
pub use traits::{SharedValidator, Validate, ValidateExt, introspect};

pub(crate) use traits::{introspect_all, introspect_in};
