//! Health check and statistics endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::roast::RoastStatsSnapshot;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub templates: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        templates: state.templates().count(),
    })
}

pub async fn stats(State(state): State<AppState>) -> Json<RoastStatsSnapshot> {
    Json(state.stats.snapshot())
}
