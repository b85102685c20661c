//! Ancestor chain threaded through nested validation.
//!
//! Structural combinators push the container they are walking before they
//! hand a member to its validator, so a child can look sideways at its
//! siblings (see [`peer`](crate::combinators::peer)). The chain is a borrowed
//! linked list living on the stack: pushing never allocates.

use serde_json::Value;

/// A nearest-first chain of enclosing container values.
///
/// # Examples
///
/// ```rust,ignore
/// use serde_json::json;
/// use verity_validator::foundation::Ancestors;
///
/// let outer = json!({ "inner": { "a": 1 } });
/// let root = Ancestors::root();
/// let one = root.push(&outer);
/// let two = one.push(&outer["inner"]);
///
/// assert_eq!(two.parent(), Some(&outer["inner"]));
/// assert_eq!(two.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Ancestors<'a> {
    head: Option<(&'a Value, &'a Ancestors<'a>)>,
}

impl<'a> Ancestors<'a> {
    /// An empty chain, used for top-level evaluation.
    pub const fn root() -> Self {
        Self { head: None }
    }

    /// Returns a new chain with `value` as the nearest ancestor.
    pub fn push(&'a self, value: &'a Value) -> Self {
        Self {
            head: Some((value, self)),
        }
    }

    /// The nearest enclosing container, if any.
    pub fn parent(&self) -> Option<&'a Value> {
        self.head.map(|(value, _)| value)
    }

    /// Reads `key` from the nearest ancestor.
    ///
    /// Objects are read by member name. Arrays are read by index, so `"0"`
    /// names the first element; a key that is not an index reads nothing.
    pub fn sibling(&self, key: &str) -> Option<&'a Value> {
        match self.parent()? {
            Value::Array(items) => key.parse::<usize>().ok().and_then(|index| items.get(index)),
            parent => parent.get(key),
        }
    }

    /// Walks the chain nearest-first.
    pub fn iter(&self) -> impl Iterator<Item = &'a Value> + use<'a> {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let (value, rest) = cursor?;
            cursor = rest.head;
            Some(value)
        })
    }

    /// Number of ancestors in the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True for the root chain.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}
