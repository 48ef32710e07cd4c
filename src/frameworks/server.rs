// Framework bootstrap for the matchmaking HTTP service.

use crate::domain::origin::AllowedOrigins;
use crate::frameworks::config;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, InMemoryMatchSearch};
use crate::use_cases::QueueSettings;
use std::{io::Result, sync::Arc};

// Logging and panic reporting for the whole process. Call once, before serving.
fn init_runtime() {
    // Pick up PORT, RUST_LOG and friends from a local .env; absence is fine.
    let _ = dotenvy::dotenv();

    // RUST_LOG wins; otherwise log at info.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // LOG_FORMAT=json for log shippers, compact lines for a terminal.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    // Route panics through tracing so they land in the same sink as other logs.
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state();

    // The route table is fixed; a bad entry is a startup error, not a panic.
    let app = routes::app(state)
        .map_err(|e| std::io::Error::other(format!("invalid route table: {e}")))?;

    tracing::info!(%address, "listening");

    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = config::bind_address();

    // A bind failure is fatal; the caller exits with the cause.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Arc<AppState> {
    let allowed_origins = AllowedOrigins::new(config::ALLOWED_ORIGINS);
    tracing::info!(
        origins = ?allowed_origins.iter().collect::<Vec<_>>(),
        "cors allow-list configured"
    );

    let settings = QueueSettings {
        capacity: config::match_queue_capacity(),
        ticket_ttl_seconds: config::match_ticket_ttl_seconds(),
    };
    tracing::debug!(
        capacity = settings.capacity,
        ticket_ttl_seconds = settings.ticket_ttl_seconds,
        "match queue configured"
    );

    Arc::new(AppState {
        allowed_origins,
        search: Arc::new(InMemoryMatchSearch::new(settings)),
    })
}
