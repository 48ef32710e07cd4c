pub mod fallback;
pub mod hello;
pub mod search;

use crate::interface_adapters::protocol::ErrorResponse;
use axum::{Json, http::StatusCode};

pub use fallback::not_found;
pub use hello::hello;
pub use search::search_match;

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}
