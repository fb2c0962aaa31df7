//! Roast generation endpoints.

use std::time::Instant;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::metrics::RoastMetrics;
use crate::roast::{random_name, trim_name, RoastCategory, RANDOM_NAMES};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct RoastRequest {
    pub name: String,
    /// light, medium or extra_spicy; anything else is treated as medium
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoastResponse {
    pub roast: String,
    pub name: String,
    pub category: RoastCategory,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RandomNamesResponse {
    pub names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RandomNameResponse {
    pub name: String,
}

/// POST /api/v1/roasts - Generate a roast after the configured thinking delay
#[tracing::instrument(
    name = "http.generate_roast",
    skip(state, request),
    fields(category = tracing::field::Empty)
)]
pub async fn generate_roast(
    State(state): State<AppState>,
    Json(request): Json<RoastRequest>,
) -> Result<Json<RoastResponse>> {
    if trim_name(&request.name).is_empty() {
        state.stats.record_blank_name();
        RoastMetrics::record_blank_name();
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let category = RoastCategory::parse_lenient(request.category.as_deref());
    tracing::Span::current().record("category", category.as_str());

    let started = Instant::now();
    let roast = state
        .resolver
        .resolve_with_delay(&request.name, state.settings.thinking_delay())
        .await;

    state.stats.record_resolved(category);
    RoastMetrics::record_generated(category, started.elapsed().as_secs_f64());
    tracing::debug!("Roast delivered");

    Ok(Json(RoastResponse {
        roast,
        name: request.name,
        category,
        timestamp: Utc::now(),
    }))
}

/// GET /api/v1/random-names - Names for the "Surprise Me" button
pub async fn random_names() -> Json<RandomNamesResponse> {
    Json(RandomNamesResponse {
        names: RANDOM_NAMES.iter().map(|n| n.to_string()).collect(),
    })
}

/// GET /api/v1/random-name - A single name picked at random
pub async fn pick_random_name() -> Json<RandomNameResponse> {
    Json(RandomNameResponse {
        name: random_name().to_string(),
    })
}
