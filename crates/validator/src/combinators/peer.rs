//! PEER combinators - rules across sibling fields
//!
//! [`peer`] validates a *sibling* of the current value: it reads `key` from
//! the nearest ancestor and runs its validator there. Inside an object the key
//! is a member name; inside an array or tuple it is an element index.
//! Failures are wrapped in a [`PeerError`] naming the sibling.
//!
//! The peer sets express presence relationships between a field and its
//! siblings. They are built purely from [`nullish`] and [`exists`] with the
//! logical combinators, so each set's truth table follows from the algebra:
//!
//! | set | passes when |
//! |---|---|
//! | [`and_peers`] | all present, or all absent |
//! | [`nand_peers`] | not all present |
//! | [`or_peers`] | at least one present |
//! | [`xor_peers`] | exactly one present |
//! | [`oxor_peers`] | at most one present |
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let login = object()
//!     .field("user", and_peer("password")?)
//!     .field("password", and_peer("user")?)
//!     .build()?;
//!
//! assert!(okay(&json!({}), &login));
//! assert!(!okay(&json!({ "user": "a" }), &login));
//! ```

use std::fmt;

use serde_json::Value;

use super::{And, NULL, Or, Xor, and, not, or, xor};
use crate::foundation::{
    Ancestors, ConfigError, Failure, Outcome, PeerError, SharedValidator, Validate, ValidateExt,
    introspect_in,
};
use crate::validators::{exists, nullish};

// ============================================================================
// PEER
// ============================================================================

/// Validates the sibling stored under `key`.
#[derive(Clone)]
pub struct Peer {
    key: String,
    validator: SharedValidator,
    shape: PeerError,
}

impl Peer {
    /// Creates a PEER combinator.
    pub fn new(key: impl Into<String>, validator: SharedValidator) -> Result<Self, ConfigError> {
        let key = key.into();
        let shape = PeerError::new(key.clone(), introspect_in("peer", validator.as_ref())?);
        Ok(Self {
            key,
            validator,
            shape,
        })
    }

    /// The sibling key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Validate for Peer {
    fn validate_with(&self, _value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        let sibling = ancestors.sibling(&self.key).unwrap_or(&NULL);
        self.validator
            .validate_with(sibling, ancestors)
            .filter(Failure::is_erroneous)
            .map(|error| Failure::Peer(PeerError::new(self.key.clone(), error)))
    }

    fn describe(&self) -> Failure {
        Failure::Peer(self.shape.clone())
    }
}

impl fmt::Debug for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Peer")
            .field("key", &self.key)
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

/// Creates a PEER combinator.
pub fn peer<V: Validate + 'static>(
    key: impl Into<String>,
    validator: V,
) -> Result<Peer, ConfigError> {
    Peer::new(key, validator.shared())
}

// ============================================================================
// PEER SETS
// ============================================================================

fn collect_keys<I, K>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    keys.into_iter().map(Into::into).collect()
}

/// `[nullish, peer(k, nullish)...]`
fn all_absent(keys: &[String]) -> Result<And, ConfigError> {
    let mut validators = vec![nullish().shared()];
    for key in keys {
        validators.push(peer(key.clone(), nullish())?.shared());
    }
    and(validators)
}

/// `[exists, peer(k, exists)...]`
fn each_present(keys: &[String]) -> Result<Vec<SharedValidator>, ConfigError> {
    let mut validators = vec![exists().shared()];
    for key in keys {
        validators.push(peer(key.clone(), exists())?.shared());
    }
    Ok(validators)
}

/// Passes when this value and every peer are all present or all absent.
pub fn and_peers<I, K>(keys: I) -> Result<Or, ConfigError>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let keys = collect_keys(keys);
    or(vec![
        all_absent(&keys)?.shared(),
        and(each_present(&keys)?)?.shared(),
    ])
}

/// Passes unless this value and every peer are all present.
pub fn nand_peers<I, K>(keys: I) -> Result<Or, ConfigError>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let keys = collect_keys(keys);
    or(vec![
        all_absent(&keys)?.shared(),
        not(and(each_present(&keys)?)?)?.shared(),
    ])
}

/// Passes when this value or any peer is present.
pub fn or_peers<I, K>(keys: I) -> Result<Or, ConfigError>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    or(each_present(&collect_keys(keys))?)
}

/// Passes when exactly one of this value and its peers is present.
pub fn xor_peers<I, K>(keys: I) -> Result<Xor, ConfigError>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    xor(each_present(&collect_keys(keys))?)
}

/// Passes when at most one of this value and its peers is present.
pub fn oxor_peers<I, K>(keys: I) -> Result<Or, ConfigError>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let keys = collect_keys(keys);
    or(vec![
        all_absent(&keys)?.shared(),
        xor(each_present(&keys)?)?.shared(),
    ])
}

/// [`and_peers`] with a single peer.
pub fn and_peer(key: impl Into<String>) -> Result<Or, ConfigError> {
    and_peers([key.into()])
}

/// [`nand_peers`] with a single peer.
pub fn nand_peer(key: impl Into<String>) -> Result<Or, ConfigError> {
    nand_peers([key.into()])
}

/// [`or_peers`] with a single peer.
pub fn or_peer(key: impl Into<String>) -> Result<Or, ConfigError> {
    or_peers([key.into()])
}

/// [`xor_peers`] with a single peer.
pub fn xor_peer(key: impl Into<String>) -> Result<Xor, ConfigError> {
    xor_peers([key.into()])
}

/// [`oxor_peers`] with a single peer.
pub fn oxor_peer(key: impl Into<String>) -> Result<Or, ConfigError> {
    oxor_peers([key.into()])
}

// ============================================================================
// TESTS
// ============================================================================
