//! OBJECT combinator - validates declared fields of a JSON object
//!
//! The result is a structural [`Record`] with one slot per declared field, in
//! declaration order. The object's own problems (not an object at all, or
//! carrying keys nobody declared) go in the root slot, which flattening lists
//! last under [`OBJECT_ROOT`](crate::foundation::OBJECT_ROOT).
//!
//! A missing member reads as `null`, so optional fields are spelled with
//! `nullish()` or a peer rule.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let user = object()
//!     .field("name", string())
//!     .field("age", integer())
//!     .build()?;
//!
//! let errors = list_errors(user.validate(&json!({ "age": 1.5, "x": 1 })).as_ref());
//! // name: Expected typeof string
//! // age: Expected integer
//! // __root: Unknown properties "x"
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::NULL;
use crate::foundation::{
    Ancestors, ConfigError, Failure, Outcome, Record, SharedValidator, Validate, ValidateExt,
    ValidationError, OBJECT_ROOT, introspect_in,
};

// ============================================================================
// OPTIONS
// ============================================================================

/// Object validation options.
///
/// Deserializable so schemas can take their strictness from configuration.
///
/// ```rust,ignore
/// let options: ObjectOptions = serde_json::from_str(r#"{ "allow_unknown": true }"#)?;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectOptions {
    /// Accept keys that no field declares.
    pub allow_unknown: bool,
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Object`].
#[derive(Clone, Default)]
pub struct ObjectBuilder {
    fields: IndexMap<String, SharedValidator>,
    options: ObjectOptions,
}

impl ObjectBuilder {
    /// Declares a field. Re-declaring a key replaces its validator and keeps
    /// its position.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V: Validate + 'static>(self, key: impl Into<String>, validator: V) -> Self {
        self.field_shared(key, validator.shared())
    }

    /// Declares a field with an already shared validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn field_shared(mut self, key: impl Into<String>, validator: SharedValidator) -> Self {
        self.fields.insert(key.into(), validator);
        self
    }

    /// Accept keys that no field declares.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_unknown(mut self, allow: bool) -> Self {
        self.options.allow_unknown = allow;
        self
    }

    /// Replaces all options.
    #[must_use = "builder methods must be chained or built"]
    pub fn options(mut self, options: ObjectOptions) -> Self {
        self.options = options;
        self
    }

    /// Introspects every field and builds the validator.
    ///
    /// A field named [`OBJECT_ROOT`] is rejected.
    pub fn build(self) -> Result<Object, ConfigError> {
        if self.fields.contains_key(OBJECT_ROOT) {
            return Err(ConfigError::ReservedField {
                key: OBJECT_ROOT.to_owned(),
            });
        }
        let shapes = self
            .fields
            .iter()
            .map(|(key, validator)| {
                introspect_in("object", validator.as_ref()).map(|shape| (key.clone(), shape))
            })
            .collect::<Result<IndexMap<_, _>, ConfigError>>()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            fields = self.fields.len(),
            allow_unknown = self.options.allow_unknown,
            "built object combinator"
        );
        Ok(Object {
            fields: self.fields,
            shapes,
            options: self.options,
        })
    }
}

impl fmt::Debug for ObjectBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectBuilder")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("options", &self.options)
            .finish()
    }
}

/// Starts an OBJECT combinator.
pub fn object() -> ObjectBuilder {
    ObjectBuilder::default()
}

// ============================================================================
// OBJECT
// ============================================================================

/// Validates the declared fields of a JSON object.
#[derive(Clone)]
pub struct Object {
    fields: IndexMap<String, SharedValidator>,
    shapes: IndexMap<String, Failure>,
    options: ObjectOptions,
}

impl Object {
    /// Declared keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The options this object was built with.
    pub const fn options(&self) -> ObjectOptions {
        self.options
    }

    fn root_error(&self, value: &Value) -> Outcome {
        let Some(members) = value.as_object() else {
            return Some(expected_object());
        };
        if self.options.allow_unknown {
            return None;
        }
        let unknown: Vec<String> = members
            .keys()
            .filter(|key| !self.fields.contains_key(key.as_str()))
            .map(|key| format!("\"{key}\""))
            .collect();
        if unknown.is_empty() {
            return None;
        }
        let message = format!("Unknown properties {}", unknown.join(", "));
        Some(Failure::Leaf(
            ValidationError::new("unknown_properties", message)
                .with_param("count", unknown.len().to_string()),
        ))
    }
}

impl Validate for Object {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        let mut record = Record::new();
        record.set_root(self.root_error(value));

        let ancestors = ancestors.push(value);
        for (key, validator) in &self.fields {
            let member = value.get(key.as_str()).unwrap_or(&NULL);
            record.insert(key.clone(), validator.validate_with(member, &ancestors));
        }
        Some(Failure::record(record))
    }

    fn describe(&self) -> Failure {
        self.shapes
            .iter()
            .map(|(key, shape)| (key.clone(), Some(shape.clone())))
            .collect::<Record>()
            .with_root(Some(expected_object()))
            .into()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("shapes", &self.shapes)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn expected_object() -> Failure {
    Failure::Leaf(ValidationError::new("object", "Expected object"))
}

// ============================================================================
// TESTS
// ============================================================================
