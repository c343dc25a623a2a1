//! Query predicates for collection operations.
//!
//! Only the predicate shapes the lab routes actually bake in are
//! representable: match-all, equality, case-insensitive equality, a strict
//! less-than threshold, a missing-field test, and AND/OR combinations of
//! those. Callers never supply filters; each query route owns its own.
//!
use serde_json::Value;

use crate::Document;

/// Predicate evaluated against each document of a collection
#[derive(Debug, Clone)]
pub enum Filter {
    /// Matches every document
    All,
    /// Field equals the value; integer and float values compare numerically
    Eq(String, Value),
    /// Field is a string equal to the value ignoring ASCII case
    EqIgnoreCase(String, String),
    /// Field is a number strictly below the threshold
    Lt(String, f64),
    /// Field is absent from the document
    Missing(String),
    /// Every sub-filter matches
    And(Vec<Filter>),
    /// At least one sub-filter matches
    Or(Vec<Filter>),
}

impl Filter {
    /// Equality on one field
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq(field.into(), value.into())
    }

    /// Case-insensitive string equality on one field
    pub fn eq_ignore_case(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::EqIgnoreCase(field.into(), value.into())
    }

    /// Strict numeric less-than on one field
    pub fn lt(field: impl Into<String>, threshold: impl Into<f64>) -> Self {
        Self::Lt(field.into(), threshold.into())
    }

    /// Field-is-absent test
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing(field.into())
    }

    /// Evaluate the predicate against one document
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Self::All => true,
            Self::Eq(field, value) => document
                .get(field)
                .map(|found| values_equal(found, value))
                .unwrap_or(false),
            Self::EqIgnoreCase(field, value) => document
                .get_str(field)
                .map(|found| found.eq_ignore_ascii_case(value))
                .unwrap_or(false),
            Self::Lt(field, threshold) => document
                .get_f64(field)
                .map(|number| number < *threshold)
                .unwrap_or(false),
            Self::Missing(field) => !document.contains(field),
            Self::And(filters) => filters.iter().all(|filter| filter.matches(document)),
            Self::Or(filters) => filters.iter().any(|filter| filter.matches(document)),
        }
    }
}

/// Value equality with numeric widening, so an integer 6 equals a float 6.0
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}
