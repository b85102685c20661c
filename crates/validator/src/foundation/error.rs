//! Leaf validation errors and construction-time configuration errors.
//!
//! [`ValidationError`] is the terminal error a predicate reports. It carries a
//! machine-readable code, an English message, and a few ordered params.
//! All string fields use `Cow<'static, str>` so static codes and messages cost
//! nothing to clone.
//!
//! [`ConfigError`] is what combinator constructors return when a schema is
//! malformed. Validation failures are data and never take this path.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use super::failure::Operator;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Ordered message params. Most errors carry zero to two.
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A terminal validation error.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Expected min length 5")
///     .with_param("min", "5");
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "typeof", "min_length", "nullish"
    pub code: Cow<'static, str>,

    /// Human-readable message in English. This is what renders.
    pub message: Cow<'static, str>,

    /// Parameters for message templating.
    pub params: ErrorParams,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// An error with the generic `custom` code.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        Self::custom(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::custom(message)
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// A malformed schema, reported when a combinator is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A combinator that needs children was given none.
    #[error("`{combinator}` requires at least one validator")]
    EmptyCombinator {
        /// Name of the combinator.
        combinator: &'static str,
    },

    /// A child described a failure shape that is not an error.
    #[error("Validator introspection failed in `{combinator}`")]
    IntrospectionFailed {
        /// Name of the combinator doing the introspection.
        combinator: &'static str,
    },

    /// A logical error was built without child errors.
    #[error("Expected at least 1 error: {operator}")]
    EmptyLogicalError {
        /// Operator of the rejected error.
        operator: Operator,
    },

    /// A declared field uses the name reserved for the object's own error.
    #[error("field name `{key}` is reserved for the object root")]
    ReservedField {
        /// The rejected field name.
        key: String,
    },

    /// A regex source failed to compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The regex source.
        pattern: String,
        /// Compiler diagnostics.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_keep_insertion_order() {
        let error = ValidationError::new("length", "Expected length between 1 and 3")
            .with_param("min", "1")
            .with_param("max", "3");

        assert_eq!(error.param("min"), Some("1"));
        assert_eq!(error.param("max"), Some("3"));
        assert_eq!(error.param("missing"), None);
        assert_eq!(error.params[0].0, "min");
    }

    #[test]
    fn display_is_the_message() {
        let error = ValidationError::new("typeof", "Expected typeof string");
        assert_eq!(error.to_string(), "Expected typeof string");
    }

    #[test]
    fn strings_convert_to_custom_errors() {
        let error = ValidationError::from("Nope");
        assert_eq!(error.code, "custom");
        assert_eq!(ValidationError::from(String::from("Nope")), error);
    }

    #[test]
    fn config_error_messages() {
        let error = ConfigError::EmptyCombinator { combinator: "tuple" };
        assert_eq!(error.to_string(), "`tuple` requires at least one validator");

        let error = ConfigError::EmptyLogicalError {
            operator: Operator::Or,
        };
        assert_eq!(error.to_string(), "Expected at least 1 error: OR");

        let error = ConfigError::ReservedField {
            key: "__root".to_owned(),
        };
        assert_eq!(error.to_string(), "field name `__root` is reserved for the object root");
    }
}
