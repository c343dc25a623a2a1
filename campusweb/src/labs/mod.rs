//! One module per lab exercise.
//!
//! Every lab follows the same cycle: read query-string parameters,
//! validate them, connect a fresh store client, perform exactly one
//! operation, close the client, and render an HTML page. The variation
//! between labs is cosmetic: list versus table rendering, which
//! validations apply, and which predicate each query route bakes in.
//!
pub mod marks;
pub mod attendance;
pub mod faculty;
pub mod fees;
pub mod placement;
pub mod grades;
pub mod branches;
pub mod tools;

/// Trimmed value of a required parameter, when present and non-empty
pub(crate) fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Integer value of a required numeric parameter
pub(crate) fn required_i64(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

/// Finite float value of a required numeric parameter
pub(crate) fn required_f64(value: &Option<String>) -> Option<f64> {
    value
        .as_deref()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}
