// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::telemetry::TelemetryService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) telemetry: Arc<TelemetryService>,
}

pub fn app(telemetry: Arc<TelemetryService>) -> Router {
    let state = AppState { telemetry };
    Router::new()
        .route("/info", get(http::info_handler)) // GET /info
        .route("/stat", get(http::stat_handler)) // GET /stat
        .route("/rawstat", get(http::raw_stat_handler)) // GET /rawstat?mode=&limit=
        .route("/ping", get(|| async { "pong" })) // GET /ping
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
