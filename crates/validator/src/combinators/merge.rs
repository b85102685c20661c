//! MERGE combinator - combines the records of several object validators
//!
//! Every child runs against the same value, and the erroneous results are
//! folded into one record, key by key, in child order. A later error for a key
//! replaces an earlier one; a later absence never erases one. An erroneous
//! result that is not a record is stored as the merged root error.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let named = object().field("name", string()).allow_unknown(true).build()?;
//! let aged = object().field("age", integer()).allow_unknown(true).build()?;
//! let person = merge(vec![named.shared(), aged.shared()])?;
//! ```

use std::fmt;

use serde_json::Value;

use crate::foundation::{
    Ancestors, ConfigError, Failure, Outcome, Record, SharedValidator, Structure, Validate,
    introspect_all,
};

/// Folds the records of several validators into one.
#[derive(Clone)]
pub struct Merge {
    validators: Vec<SharedValidator>,
    shape: Failure,
}

impl Merge {
    /// Creates a MERGE combinator. At least one child is required.
    pub fn new(validators: Vec<SharedValidator>) -> Result<Self, ConfigError> {
        if validators.is_empty() {
            return Err(ConfigError::EmptyCombinator { combinator: "merge" });
        }
        let shape = merge_outcomes(introspect_all("merge", &validators)?.into_iter().map(Some));
        Ok(Self { validators, shape })
    }
}

impl Validate for Merge {
    fn validate_with(&self, value: &Value, ancestors: &Ancestors<'_>) -> Outcome {
        Some(merge_outcomes(
            self.validators
                .iter()
                .map(|validator| validator.validate_with(value, ancestors)),
        ))
    }

    fn describe(&self) -> Failure {
        self.shape.clone()
    }
}

impl fmt::Debug for Merge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Merge")
            .field("children", &self.validators.len())
            .field("shape", &self.shape)
            .finish()
    }
}

fn merge_outcomes(outcomes: impl Iterator<Item = Outcome>) -> Failure {
    let mut merged = Record::new();
    for error in outcomes.flatten().filter(Failure::is_erroneous) {
        match error {
            Failure::Structure(Structure::Record(record)) => {
                for (key, outcome) in record.fields() {
                    if outcome.as_ref().is_some_and(Failure::is_erroneous)
                        || !merged.contains_key(key)
                    {
                        merged.insert(key.clone(), outcome.clone());
                    }
                }
                if let Some(root) = record.root() {
                    merged.set_root(Some(root.clone()));
                }
            }
            other => merged.set_root(Some(other)),
        }
    }
    Failure::record(merged)
}

/// Creates a MERGE combinator.
pub fn merge(validators: Vec<SharedValidator>) -> Result<Merge, ConfigError> {
    Merge::new(validators)
}
