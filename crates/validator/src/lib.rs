//! # verity-validator
//!
//! Composable validators for untyped JSON values with structural error
//! reports.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let user = object()
//!     .field("name", string().and(min_length(1))?)
//!     .field("email", or(vec![nullish().shared(), email().shared()])?)
//!     .field("phone", oxor_peer("email")?)
//!     .build()?;
//!
//! assert!(okay(&json!({ "name": "ada", "email": "ada@example.com" }), &user));
//!
//! let errors = list_errors(user.validate(&json!({ "name": "" })).as_ref());
//! assert_eq!(errors[0].path, "name");
//! ```
//!
//! ## Results
//!
//! Validation returns an [`Outcome`](foundation::Outcome): `None` when the
//! value passes, a [`Failure`](foundation::Failure) otherwise. Structural
//! combinators ([`object`](combinators::object), [`array`](combinators::array),
//! [`tuple`](combinators::tuple)) return a failure with one slot per member;
//! [`list_errors`](report::list_errors) flattens it into path/error pairs.
//!
//! ## Creating Validators
//!
//! Use [`create`](combinators::create) for a one-off predicate, the
//! [`validator!`] macro for a named leaf validator, or implement
//! [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Types**: [`string`](validators::string), [`number`](validators::number),
//!   [`integer`](validators::integer), [`boolean`](validators::boolean)
//! - **Presence**: [`nullish`](validators::nullish), [`exists`](validators::exists)
//! - **Length**: [`min_length`](validators::min_length),
//!   [`max_length`](validators::max_length), [`length`](validators::length)
//! - **Content**: [`pattern`](validators::pattern), [`email`](validators::email),
//!   [`includes`](validators::includes)

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod report;
pub mod validators;

pub use serde_json::Value;
