use super::error_response;
use crate::domain::errors::MatchError;
use crate::interface_adapters::protocol::{ErrorResponse, SearchMatchRequest, SearchMatchResponse};
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

/// `/search` handler for the bundled region matchmaker.
///
/// The route itself only promises to hand the request to whatever
/// [`MatchSearch`](crate::domain::ports::MatchSearch) is installed. The body
/// shape and the status codes below belong to this default adapter:
///
/// - `{ "player_id", "region" }`; blank values give 400
/// - a player who is already waiting gives 409
/// - a full queue gives 503
pub async fn search_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchMatchRequest>,
) -> Result<Json<SearchMatchResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.player_id.trim().is_empty() || request.region.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "player_id and region are required",
        ));
    }

    let outcome = state
        .search
        .search(request.into())
        .await
        .map_err(map_match_error)?;

    Ok(Json(outcome.into()))
}

fn map_match_error(err: MatchError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        MatchError::AlreadyQueued { player_id } => {
            tracing::debug!(%player_id, "player already queued");
            error_response(StatusCode::CONFLICT, "player is already queued")
        }
        MatchError::QueueFull { capacity } => {
            tracing::warn!(capacity, "match queue is full");
            error_response(StatusCode::SERVICE_UNAVAILABLE, "match queue is full")
        }
    }
}
