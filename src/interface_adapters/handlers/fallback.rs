use super::error_response;
use crate::interface_adapters::protocol::ErrorResponse;
use axum::{
    Json,
    http::{StatusCode, Uri},
};

// Fallback for paths outside the route table. It sits outside the origin gate.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!(path = %uri.path(), "no route registered");
    error_response(StatusCode::NOT_FOUND, "not found")
}
