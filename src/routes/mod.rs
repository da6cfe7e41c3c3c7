//! API route handlers
//!
//! - `produto`: product registration, listing and removal
//!
//! Plus the two router-level handlers below: the root banner and the 404
//! fallback for undefined paths.

pub mod produto;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::{ApiError, Outcome};

/// Informational root banner. Not part of the product API surface.
pub async fn banner() -> impl IntoResponse {
    (
        Outcome::Success.status(),
        [(header::CONTENT_TYPE, "text/html")],
        "<h1> Estoque </h1>",
    )
}

/// Fallback for undefined routes.
pub async fn not_found() -> ApiError {
    ApiError(Outcome::NotFound)
}

/// Success response with a JSON body and the outcome's status code.
pub(crate) fn json_response<T: Serialize>(outcome: Outcome, body: &T) -> Response {
    (
        outcome.status(),
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
        Json(serde_json::to_value(body).unwrap_or_default()),
    )
        .into_response()
}

/// Success response with no body. Empty successes still carry the JSON
/// content type.
pub(crate) fn empty_response(outcome: Outcome) -> Response {
    (
        outcome.status(),
        [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
    )
        .into_response()
}
