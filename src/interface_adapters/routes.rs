use crate::interface_adapters::cors::cors_gate;
use crate::interface_adapters::handlers::{hello, not_found, search_match};
use crate::interface_adapters::state::AppState;
use axum::{
    Router, middleware,
    routing::{MethodRouter, get, post},
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// Why a path was refused by the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    NotAbsolute { path: String },
    PatternSyntax { path: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::NotAbsolute { path } => write!(f, "route `{path}` must start with `/`"),
            RouteError::PatternSyntax { path } => {
                write!(f, "route `{path}` uses capture or wildcard syntax")
            }
        }
    }
}

impl std::error::Error for RouteError {}

// Exact-path route table. Every registered handler is reached only through
// the origin gate.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<String, MethodRouter<Arc<AppState>>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    // Paths are literal; registering a path twice keeps the last handler.
    pub fn register(
        mut self,
        path: &str,
        handler: MethodRouter<Arc<AppState>>,
    ) -> Result<Self, RouteError> {
        validate_literal_path(path)?;
        if self.routes.insert(path.to_string(), handler).is_some() {
            tracing::debug!(%path, "route replaced");
        }
        Ok(self)
    }

    pub fn into_router(self, state: Arc<AppState>) -> Router {
        let mut router = Router::new();
        for (path, handler) in self.routes {
            // `layer` (not `route_layer`) so preflight and 405 answers pass the gate too.
            let gated = handler.layer(middleware::from_fn_with_state(state.clone(), cors_gate));
            router = router.route(&path, gated);
        }

        router.fallback(not_found).with_state(state)
    }
}

// axum reads `{..}` as captures and refuses `:`/`*` segments, so none of them
// can appear in a literal path.
fn validate_literal_path(path: &str) -> Result<(), RouteError> {
    if !path.starts_with('/') {
        return Err(RouteError::NotAbsolute {
            path: path.to_string(),
        });
    }

    let has_pattern = path.contains(['{', '}'])
        || path
            .split('/')
            .any(|segment| segment.starts_with(':') || segment.starts_with('*'));
    if has_pattern {
        return Err(RouteError::PatternSyntax {
            path: path.to_string(),
        });
    }

    Ok(())
}

// Build the HTTP router for the matchmaking endpoints.
pub fn app(state: Arc<AppState>) -> Result<Router, RouteError> {
    Ok(RouteTable::new()
        .register("/", get(hello))?
        .register("/search", post(search_match))?
        .into_router(state))
}
