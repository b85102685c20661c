//! Validator combinators
//!
//! Combinators build validators out of other validators. Every combinator
//! that can be misconfigured (no children, or a child whose failure shape is
//! not an error) returns `Result<_, ConfigError>` from its constructor.
//!
//! # Categories
//!
//! - **Leaves**: [`create`] turns a predicate into a validator
//! - **Logical**: [`and`], [`or`], [`xor`], [`not`], [`all`]
//! - **Structural**: [`array`], [`tuple`], [`object`], [`merge`]
//! - **Relational**: [`peer`] and the peer sets ([`and_peers`], [`nand_peers`],
//!   [`or_peers`], [`xor_peers`], [`oxor_peers`])
//! - **Modifiers**: [`with_err`], [`when`], [`lazy`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let contact = object()
//!     .field("email", or(vec![nullish().shared(), email().shared()])?)
//!     .field("phone", oxor_peer("email")?)
//!     .field("tags", array(string())?)
//!     .build()?;
//! ```

use serde_json::Value;

mod all;
mod and;
mod array;
mod lazy;
mod merge;
mod message;
mod not;
mod object;
mod or;
mod peer;
mod predicate;
mod tuple;
mod when;
mod xor;

pub use all::{All, all};
pub use and::{And, and};
pub use array::{Array, array};
pub use lazy::{Lazy, lazy};
pub use merge::{Merge, merge};
pub use message::{WithErr, err, with_err};
pub use not::{Not, not};
pub use object::{Object, ObjectBuilder, ObjectOptions, object};
pub use or::{Or, or};
pub use peer::{
    Peer, and_peer, and_peers, nand_peer, nand_peers, or_peer, or_peers, oxor_peer, oxor_peers,
    peer, xor_peer, xor_peers,
};
pub use predicate::{Factory, Predicate, create};
pub use tuple::{Tuple, tuple};
pub use when::{When, when};
pub use xor::{Xor, xor};

/// What a missing member or sibling reads as.
pub(crate) static NULL: Value = Value::Null;
