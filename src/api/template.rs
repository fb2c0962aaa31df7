//! Read-only template endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct TemplateEntry {
    pub index: usize,
    pub template: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateEntry>,
    pub total: usize,
}

/// GET /api/v1/templates - List all templates
#[tracing::instrument(name = "http.list_templates", skip(state))]
pub async fn list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    let templates: Vec<TemplateEntry> = state
        .templates()
        .iter()
        .enumerate()
        .map(|(index, template)| TemplateEntry { index, template })
        .collect();
    let total = templates.len();

    Json(TemplateListResponse { templates, total })
}

/// GET /api/v1/templates/{index} - Get a template by position
#[tracing::instrument(name = "http.get_template", skip(state))]
pub async fn get_template(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<TemplateEntry>> {
    state
        .templates()
        .try_get(index)
        .map(|template| Json(TemplateEntry { index, template }))
        .ok_or_else(|| AppError::NotFound(format!("Template {} does not exist", index)))
}
