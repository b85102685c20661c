//! Content validators for strings and arrays
//!
//! - [`pattern`] - string matches a regular expression
//! - [`email`] - string looks like an email address
//! - [`includes`] - string contains a substring, or array contains an element

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::display_value;
use crate::foundation::{ConfigError, ValidationError};

// ============================================================================
// PATTERN
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// The match is unanchored; add `^` and `$` for a full match.
    pub Pattern { regex: Regex };
    rule(self, input) { input.as_str().is_some_and(|s| self.regex.is_match(s)) }
    error(self) {
        ValidationError::new(
            "pattern",
            format!("Expected to match pattern /{}/", self.regex.as_str()),
        )
        .with_param("pattern", self.regex.as_str().to_owned())
    }
    new(source: &str) -> ConfigError {
        Regex::new(source)
            .map(|regex| Self { regex })
            .map_err(|err| ConfigError::InvalidPattern {
                pattern: source.to_owned(),
                reason: err.to_string(),
            })
    }
    fn pattern(source: &str) -> ConfigError;
}

// ============================================================================
// EMAIL
// ============================================================================

static EMAIL: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(concat!(
        r##"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"##,
        r##"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"##,
        r##"@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"##,
        r##"|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}"##,
        r##"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]:"##,
        r##"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"##,
    ))
});

/// The compiled email pattern. A compile failure is logged on every lookup
/// and rejects all input.
fn email_regex() -> Option<&'static Regex> {
    match EMAIL.as_ref() {
        Ok(re) => Some(re),
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(%error, "email pattern failed to compile");
            #[cfg(not(feature = "tracing"))]
            let _ = error;
            None
        }
    }
}

crate::validator! {
    /// Validates that a string is an email address.
    pub Email;
    rule(input) {
        input
            .as_str()
            .is_some_and(|s| email_regex().is_some_and(|re| re.is_match(s)))
    }
    error { ValidationError::new("email", "Expected email") }
    fn email();
}

// ============================================================================
// INCLUDES
// ============================================================================

crate::validator! {
    /// Validates that an array contains `needle`, or that a string contains
    /// its rendering as a substring.
    #[derive(PartialEq)]
    pub Includes { needle: Value };
    rule(self, input) {
        match input {
            Value::Array(items) => items.contains(&self.needle),
            Value::String(s) => s.contains(display_value(&self.needle).as_str()),
            _ => false,
        }
    }
    error(self) {
        ValidationError::new(
            "includes",
            format!("Expected to include {}", display_value(&self.needle)),
        )
    }
    new(needle: impl Into<Value>) { Self { needle: needle.into() } }
    fn includes(needle: impl Into<Value>);
}

// ============================================================================
// TESTS
// ============================================================================
