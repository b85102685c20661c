//! Built-in leaf validators
//!
//! Each validator checks a single property of a JSON value and reports a
//! fixed message. Compose them with [`crate::combinators`].
//!
//! # Categories
//!
//! - **Types**: [`string`], [`number`], [`boolean`], [`integer`], [`finite`],
//!   [`arr`], [`nul`], [`object_like`]
//! - **Presence**: [`nullish`], [`exists`], [`present`]
//! - **Equality**: [`is`], [`one_of`], [`match_peer`]
//! - **Range**: [`min`], [`max`]
//! - **Length**: [`min_length`], [`max_length`], [`length`]
//! - **Content**: [`pattern`], [`email`], [`includes`]
//! - **Truthiness**: [`truthy`], [`falsy`]

use serde_json::Value;

mod boolean;
mod equality;
mod length;
mod nullable;
mod pattern;
mod range;
mod types;

pub use boolean::{Falsy, Truthy, falsy, truthy};
pub use equality::{Is, MatchPeer, OneOf, is, match_peer, one_of};
pub use length::{Length, MaxLength, MinLength, length, max_length, min_length};
pub use nullable::{Nullish, exists, nullish, present};
pub use pattern::{Email, Includes, Pattern, email, includes, pattern};
pub use range::{Max, Min, max, min};
pub use types::{
    IsArray, IsBoolean, IsFinite, IsInteger, IsNull, IsNumber, IsObject, IsString, arr, boolean,
    finite, integer, nul, number, object_like, string,
};

/// Renders a value for a message: strings bare, everything else as JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
