use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::error::{ApiError, ApiResult, Outcome};
use crate::product::{parse_id, validate_not_duplicate, Product};
use crate::routes::{empty_response, json_response};
use crate::state::AppState;

/// Register a product
///
/// The body must be a non-empty JSON object. Required-field validation runs
/// before the duplicate check; a draft failing the first never reaches the
/// second. On success the stored record, including the assigned id, is
/// echoed back with 201.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<Response> {
    let draft = match body.as_object() {
        Some(obj) if !obj.is_empty() => obj,
        _ => return Err(ApiError(Outcome::ProductNotProvided)),
    };

    let product = Product::from_draft(draft)?;
    validate_not_duplicate(&state.store, &product)?;

    let stored = state.store.insert(product);
    tracing::info!(id = stored.id, nome = %stored.nome, "Product registered");

    Ok(json_response(Outcome::ProductCreated, &stored))
}

/// List registered products in insertion order; `[]` when none.
pub async fn list_products(State(state): State<Arc<AppState>>) -> Response {
    json_response(Outcome::Success, &state.store.list_all())
}

/// Remove a product by its assigned id
///
/// A blank id maps to `SerialNull`, a non-numeric one to `SerialInvalid`.
/// An id that parses but matches no record also answers `SerialInvalid`;
/// there is no separate not-found outcome on this route (see DESIGN.md).
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_id(&id)?;

    let product = state
        .store
        .find_by_id(id)
        .ok_or(ApiError(Outcome::SerialInvalid))?;

    state.store.remove(&product);
    tracing::info!(id, "Product removed");

    Ok(empty_response(Outcome::Success))
}
