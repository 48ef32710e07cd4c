// Origin gate applied to every registered route.
//
// The gate never rejects a request because of its origin. An unmatched origin
// only loses the allow-origin header, which leaves enforcement to the browser.

use crate::interface_adapters::state::AppState;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub const ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE, PATCH";
pub const ALLOW_HEADERS: &str = "Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization, origin, x-requested-with";
pub const ALLOW_CREDENTIALS: &str = "true";

pub async fn cors_gate(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let allow_origin = allowed_origin(&state, request.headers());

    // Preflight is answered here for every origin; the handler never runs.
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    if let Some(origin) = allow_origin {
        set_if_absent(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    }
    set_if_absent(
        headers,
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    set_if_absent(
        headers,
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    set_if_absent(
        headers,
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static(ALLOW_CREDENTIALS),
    );

    response
}

// Resolve the allow-origin value for this request, echoing the listed entry.
fn allowed_origin(state: &AppState, headers: &HeaderMap) -> Option<HeaderValue> {
    // `to_str` refuses anything outside visible ASCII; no allow-listed origin could match it.
    let origin = headers.get(header::ORIGIN)?.to_str().ok()?;
    if origin.is_empty() {
        return None;
    }

    match state.allowed_origins.matching(origin) {
        Some(allowed) => HeaderValue::from_str(allowed).ok(),
        None => {
            tracing::debug!(%origin, "origin not in allow-list");
            None
        }
    }
}

// Headers written by the handler itself take precedence over the gate's.
fn set_if_absent(headers: &mut HeaderMap, name: HeaderName, value: HeaderValue) {
    headers.entry(name).or_insert(value);
}
