//! API layer - HTTP endpoint handlers organized by domain.

mod health;
mod metrics;
mod roast;
mod routes;
mod template;

pub use health::{health, stats, HealthResponse};
pub use metrics::prometheus_metrics;
pub use roast::{
    generate_roast, pick_random_name, random_names, RandomNameResponse, RandomNamesResponse,
    RoastRequest, RoastResponse,
};
pub use routes::api_routes;
pub use template::{get_template, list_templates, TemplateEntry, TemplateListResponse};
