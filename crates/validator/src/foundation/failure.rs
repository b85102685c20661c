//! The error value every validator produces.
//!
//! A validator returns an [`Outcome`]: `None` when the input is valid, or a
//! [`Failure`] describing what went wrong. Failures nest. Logical combinators
//! wrap their children's shapes in a [`LogicalError`], peers wrap theirs in a
//! [`PeerError`], and the structural combinators return a [`Structure`] whose
//! members are the outcomes of each element or field.
//!
//! Structural marking is the [`Failure::Structure`] variant itself. A
//! structure is only erroneous when at least one of its members is, which is
//! what lets `object(...)` always return a record and still report success.
//!
//! Every failure renders to a primitive (see [`Failure::to_primitive`]):
//! leaves render to their message, and composite errors collapse to a string
//! whenever all of their children are primitive.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

use super::error::{ConfigError, ValidationError};

/// Result of evaluating a validator: `None` means valid.
pub type Outcome = Option<Failure>;

/// Reserved record key holding an object's own (non-field) error.
pub const OBJECT_ROOT: &str = "__root";

// ============================================================================
// OPERATOR
// ============================================================================

/// Operator of a [`LogicalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Every child must pass.
    And,
    /// At least one child must pass.
    Or,
    /// Exactly one child must pass.
    Xor,
}

impl Operator {
    /// Upper-case operator name, e.g. `"AND"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
        }
    }

    /// Type tag used by the structured rendering, e.g. `"ANDError"`.
    pub const fn error_type(self) -> &'static str {
        match self {
            Self::And => "ANDError",
            Self::Or => "ORError",
            Self::Xor => "XORError",
        }
    }

    const fn joiner(self) -> &'static str {
        match self {
            Self::And => " and ",
            Self::Or => " or ",
            Self::Xor => " xor ",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FAILURE
// ============================================================================

/// A validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// A terminal error.
    Leaf(ValidationError),
    /// A logical combinator's error, usually shared between evaluations.
    Logical(Arc<LogicalError>),
    /// A failed check against a sibling value.
    Peer(PeerError),
    /// A negated validator unexpectedly passed.
    Negate(Arc<NegateError>),
    /// A list or record of member outcomes.
    Structure(Structure),
    /// Reserved for asynchronous evaluation. Never counted as an error.
    Pending,
}

impl Failure {
    /// Marks a list of member outcomes as structural.
    pub fn list(items: Vec<Outcome>) -> Self {
        Self::Structure(Structure::List(items))
    }

    /// Marks a record of member outcomes as structural.
    pub fn record(record: Record) -> Self {
        Self::Structure(Structure::Record(record))
    }

    /// True for [`Failure::Structure`].
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::Structure(_))
    }

    /// True unless this is [`Failure::Pending`] or a structure without any
    /// erroneous member.
    pub fn is_erroneous(&self) -> bool {
        match self {
            Self::Pending => false,
            Self::Structure(structure) => structure.is_erroneous(),
            _ => true,
        }
    }

    /// The leaf error, if this is one.
    pub const fn as_leaf(&self) -> Option<&ValidationError> {
        match self {
            Self::Leaf(error) => Some(error),
            _ => None,
        }
    }

    /// The logical error, if this is one.
    pub fn as_logical(&self) -> Option<&LogicalError> {
        match self {
            Self::Logical(error) => Some(error),
            _ => None,
        }
    }

    /// The list members, if this is a structural list.
    pub fn as_list(&self) -> Option<&[Outcome]> {
        match self {
            Self::Structure(Structure::List(items)) => Some(items),
            _ => None,
        }
    }

    /// The record, if this is a structural record.
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Structure(Structure::Record(record)) => Some(record),
            _ => None,
        }
    }

    /// Renders the failure into a JSON value.
    ///
    /// Leaves become their message. Logical, peer and negation errors become
    /// a single string when every child renders to a primitive, and a tagged
    /// object otherwise. Structures become arrays and objects, with an
    /// object's own error under [`OBJECT_ROOT`].
    pub fn to_primitive(&self) -> Value {
        match self {
            Self::Leaf(error) => Value::String(error.message.to_string()),
            Self::Logical(error) => error.to_primitive(),
            Self::Peer(error) => error.to_primitive(),
            Self::Negate(error) => error.to_primitive(),
            Self::Structure(structure) => structure.to_primitive(),
            Self::Pending => Value::Null,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_primitive() {
            Value::String(s) => f.write_str(&s),
            other => write!(f, "{other}"),
        }
    }
}

impl Serialize for Failure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_primitive().serialize(serializer)
    }
}

impl From<ValidationError> for Failure {
    fn from(error: ValidationError) -> Self {
        Self::Leaf(error)
    }
}

impl From<&'static str> for Failure {
    fn from(message: &'static str) -> Self {
        Self::Leaf(ValidationError::custom(message))
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::Leaf(ValidationError::custom(message))
    }
}

impl From<LogicalError> for Failure {
    fn from(error: LogicalError) -> Self {
        Self::Logical(Arc::new(error))
    }
}

impl From<PeerError> for Failure {
    fn from(error: PeerError) -> Self {
        Self::Peer(error)
    }
}

impl From<NegateError> for Failure {
    fn from(error: NegateError) -> Self {
        Self::Negate(Arc::new(error))
    }
}

impl From<Record> for Failure {
    fn from(record: Record) -> Self {
        Self::record(record)
    }
}

// ============================================================================
// LOGICAL / PEER / NEGATE
// ============================================================================

/// Error of an `and`, `or` or `xor` combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalError {
    pub(crate) operator: Operator,
    pub(crate) errors: Vec<Failure>,
}

impl LogicalError {
    /// Creates a logical error. At least one child error is required.
    pub fn new(operator: Operator, errors: Vec<Failure>) -> Result<Self, ConfigError> {
        if errors.is_empty() {
            return Err(ConfigError::EmptyLogicalError { operator });
        }
        Ok(Self { operator, errors })
    }

    /// The operator.
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// The child errors, in declaration order.
    pub fn errors(&self) -> &[Failure] {
        &self.errors
    }

    fn to_primitive(&self) -> Value {
        let primitives: Vec<Value> = self.errors.iter().map(Failure::to_primitive).collect();
        if !primitives.iter().all(is_primitive) {
            return json!({
                "type": self.operator.error_type(),
                "operator": self.operator.as_str(),
                "errors": primitives,
            });
        }

        let joined = primitives
            .iter()
            .enumerate()
            .map(|(i, value)| match value {
                Value::String(s) if i > 0 => lower_first(s),
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(self.operator.joiner());

        if primitives.len() > 1 {
            Value::String(format!("({joined})"))
        } else {
            Value::String(joined)
        }
    }
}

/// A check against the sibling stored under `key` failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerError {
    key: String,
    error: Box<Failure>,
}

impl PeerError {
    /// Wraps the sibling's error.
    pub fn new(key: impl Into<String>, error: Failure) -> Self {
        Self {
            key: key.into(),
            error: Box::new(error),
        }
    }

    /// The sibling key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The sibling's error.
    pub fn error(&self) -> &Failure {
        &self.error
    }

    fn to_primitive(&self) -> Value {
        match self.error.to_primitive() {
            Value::String(s) => Value::String(format!("Peer \"{}\" {}", self.key, lower_first(&s))),
            other => json!({ "type": "PeerError", "key": self.key, "error": other }),
        }
    }
}

/// A negated validator passed. Holds the inverted validator's failure shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegateError {
    error: Failure,
}

impl NegateError {
    /// Wraps the shape of the negated validator.
    pub fn new(error: Failure) -> Self {
        Self { error }
    }

    /// The negated validator's failure shape.
    pub const fn error(&self) -> &Failure {
        &self.error
    }

    fn to_primitive(&self) -> Value {
        match self.error.to_primitive() {
            Value::String(s) => Value::String(format!("not(\"{s}\")")),
            other => json!({ "type": "NegateError", "error": other }),
        }
    }
}

// ============================================================================
// STRUCTURE
// ============================================================================

/// Member outcomes of a structural combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structure {
    /// One slot per array element or tuple position.
    List(Vec<Outcome>),
    /// One slot per declared object field, plus the object's own error.
    Record(Record),
}

impl Structure {
    /// True when any member is erroneous.
    pub fn is_erroneous(&self) -> bool {
        match self {
            Self::List(items) => items.iter().flatten().any(Failure::is_erroneous),
            Self::Record(record) => record.entries().any(|(_, error)| error.is_erroneous()),
        }
    }

    fn to_primitive(&self) -> Value {
        match self {
            Self::List(items) => Value::Array(
                items
                    .iter()
                    .map(|item| item.as_ref().map_or(Value::Null, Failure::to_primitive))
                    .collect(),
            ),
            Self::Record(record) => {
                let mut map = Map::new();
                for (key, error) in record.entries() {
                    map.insert(key.to_owned(), error.to_primitive());
                }
                Value::Object(map)
            }
        }
    }
}

/// Outcomes keyed by field name, in declaration order.
///
/// Re-inserting a key replaces its outcome but keeps its position. The
/// object's own error lives in a separate root slot that is always listed
/// last, under [`OBJECT_ROOT`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: IndexMap<String, Outcome>,
    root: Option<Box<Failure>>,
}

impl Record {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the outcome of a field.
    pub fn insert(&mut self, key: impl Into<String>, outcome: Outcome) {
        self.fields.insert(key.into(), outcome);
    }

    /// Builder form of [`Record::insert`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, outcome: Outcome) -> Self {
        self.insert(key, outcome);
        self
    }

    /// Sets the object's own error.
    pub fn set_root(&mut self, outcome: Outcome) {
        self.root = outcome.map(Box::new);
    }

    /// Builder form of [`Record::set_root`].
    #[must_use = "builder methods must be chained or built"]
    pub fn with_root(mut self, outcome: Outcome) -> Self {
        self.set_root(outcome);
        self
    }

    /// The error recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Failure> {
        self.fields.get(key).and_then(Option::as_ref)
    }

    /// True when `key` was declared, whether or not it failed.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// The object's own error.
    pub fn root(&self) -> Option<&Failure> {
        self.root.as_deref()
    }

    /// Declared field outcomes, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Outcome> {
        &self.fields
    }

    /// Every present error: declared fields first, then the root.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Failure)> {
        self.fields
            .iter()
            .filter_map(|(key, outcome)| outcome.as_ref().map(|error| (key.as_str(), error)))
            .chain(self.root().map(|error| (OBJECT_ROOT, error)))
    }
}

impl FromIterator<(String, Outcome)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Outcome)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
            root: None,
        }
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
