//! Handler-boundary error type.
//!
//! Only infrastructure failures travel through `ServerError`: the store
//! refusing a connection or an operation. Validation problems never become
//! one; those are ordinary pages naming the violated constraint.
//!
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Store failure surfaced by a handler
#[derive(Debug)]
pub struct ServerError(campusdb::Error);

impl From<campusdb::Error> for ServerError {
    fn from(err: campusdb::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        eprintln!("❌ store error: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
