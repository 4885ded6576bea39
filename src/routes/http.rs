// GET handlers: info, stat, rawstat

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::AppState;
use crate::models::StatResponse;
use crate::telemetry::TelemetryError;

impl IntoResponse for TelemetryError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "telemetry request rejected");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// GET /info: fastfetch + vnstat text, throttled by the freshness cache.
pub(super) async fn info_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.telemetry.snapshot().await
}

/// GET /stat: 1/7/30-day rx/tx totals as JSON.
pub(super) async fn stat_handler(
    State(state): State<AppState>,
) -> Result<Json<StatResponse>, TelemetryError> {
    let stat = state.telemetry.stat().await?;
    Ok(Json(stat.into()))
}

#[derive(Debug, Deserialize)]
pub(super) struct RawStatParams {
    mode: Option<String>,
    limit: Option<String>,
}

/// GET /rawstat: vnstat JSON as-is.
pub(super) async fn raw_stat_handler(
    State(state): State<AppState>,
    Query(params): Query<RawStatParams>,
) -> Result<impl IntoResponse, TelemetryError> {
    let body = state
        .telemetry
        .raw_stat(params.mode.as_deref(), params.limit.as_deref())
        .await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
