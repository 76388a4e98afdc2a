//! axum surface for the diagnostics data.

pub mod config;
pub mod errors;
pub mod handlers;
mod middleware;

use std::sync::Arc;

use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::data::DiagnosticsStore;

pub use config::ServerConfig;
pub use errors::{ApiError, ServerError};

pub const API_PREFIX: &str = "/api/v1";

/// Shared, read-only request context.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DiagnosticsStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: DiagnosticsStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DiagnosticsStore::seeded(), ServerConfig::default())
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/overview", get(handlers::overview_handler))
        .route(
            "/api/v1/overview/:section_id",
            get(handlers::section_overview_handler),
        )
        .route("/api/v1/insights", get(handlers::insights_handler))
        .route(
            "/api/v1/sections/:section_id/insights",
            get(handlers::section_insights_handler),
        )
        .route(
            "/api/v1/sections/:section_id/insights/:insight_id",
            get(handlers::insight_handler),
        )
        .layer(from_fn_with_state(state.clone(), middleware::cors_middleware))
        .layer(from_fn(middleware::request_tracing_middleware))
        .with_state(state)
}

/// Bind the configured address and serve until the listener fails.
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    let addr = state.config.bind_addr;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, origin = %state.config.allowed_origin, "fasttrack api listening");
    axum::serve(listener, build_router(state))
        .await
        .map_err(ServerError::Serve)
}
