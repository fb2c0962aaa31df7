use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::health::{health, stats};
use super::metrics::prometheus_metrics;
use super::roast::{generate_roast, pick_random_name, random_names};
use super::template::{get_template, list_templates};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Stats
        .route("/health", get(health))
        .route("/stats", get(stats))
        .route("/metrics", get(prometheus_metrics))
        // Roast endpoints
        .nest(
            "/api/v1",
            Router::new()
                .route("/roasts", post(generate_roast))
                .route("/random-names", get(random_names))
                .route("/random-name", get(pick_random_name))
                .route("/templates", get(list_templates))
                .route("/templates/{index}", get(get_template)),
        )
}
