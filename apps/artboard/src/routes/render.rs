//! Axum route handlers for the Render API.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::{available_templates, render_document, template_by_name, Template};
use crate::schema::{validate_layout, Columns, LayoutReport, ResumeData};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub resume: ResumeData,
    /// Explicit column assignment; defaults to page `page` of the resume layout.
    #[serde(default)]
    pub columns: Option<Columns>,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub template: Option<String>,
    /// Wrap the fragment in a full HTML document.
    #[serde(default)]
    pub standalone: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    pub page: Option<usize>,
    pub template: Option<String>,
    pub standalone: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<&'static str>,
    pub default: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Picks the template: explicit request, then the resume's own choice, then
/// the configured default. Only an explicit unknown name is an error.
fn resolve_template(
    requested: Option<&str>,
    resume: &ResumeData,
    state: &AppState,
) -> Result<&'static dyn Template, AppError> {
    if let Some(name) = requested {
        return template_by_name(name).ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown template '{name}'. Available: {}",
                available_templates().join(", ")
            ))
        });
    }

    if let Some(template) = template_by_name(&resume.metadata.template) {
        return Ok(template);
    }

    template_by_name(&state.config.default_template).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "default template '{}' is not registered",
            state.config.default_template
        ))
    })
}

fn render_page(
    state: &AppState,
    resume: &ResumeData,
    columns: &Columns,
    template: &dyn Template,
    standalone: bool,
) -> Html<String> {
    let report = validate_layout(resume, columns);
    if !report.is_clean() {
        warn!(
            "Layout has {} key(s) that will not render: {:?}",
            report.skipped.len(),
            report.skipped
        );
    }

    let body = template.render(resume, columns, &state.render_context());
    info!(
        "Rendered resume with template '{}' ({} resolved keys, {} bytes)",
        template.name(),
        report.rendered_keys,
        body.len()
    );

    if standalone {
        Html(render_document(&body, &resume.basics.name))
    } else {
        Html(body)
    }
}

fn request_columns(request: &RenderRequest) -> Result<Columns, AppError> {
    match &request.columns {
        Some(columns) => Ok(columns.clone()),
        None => request.resume.page_columns(request.page).ok_or_else(|| {
            AppError::Validation(format!(
                "Page {} does not exist in the resume layout",
                request.page
            ))
        }),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: available_templates(),
        default: state.config.default_template.clone(),
    })
}

/// POST /api/v1/render
///
/// Renders an inline resume document. Returns `text/html`.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    let template = resolve_template(request.template.as_deref(), &request.resume, &state)?;
    let columns = request_columns(&request)?;

    Ok(render_page(
        &state,
        &request.resume,
        &columns,
        template,
        request.standalone,
    ))
}

/// POST /api/v1/render/validate
///
/// Reports layout keys that would render nothing, without rendering.
pub async fn handle_validate_layout(
    Json(request): Json<RenderRequest>,
) -> Result<Json<LayoutReport>, AppError> {
    let columns = request_columns(&request)?;
    Ok(Json(validate_layout(&request.resume, &columns)))
}

/// GET /api/v1/resumes/:id/render
///
/// Renders one page of a stored resume.
pub async fn handle_render_stored(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RenderQuery>,
) -> Result<Html<String>, AppError> {
    let record = state.store.get(id).await?;
    let template = resolve_template(query.template.as_deref(), &record.data, &state)?;

    let page = query.page.unwrap_or(0);
    let columns = record
        .data
        .page_columns(page)
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} has no page {page}")))?;

    Ok(render_page(
        &state,
        &record.data,
        &columns,
        template,
        query.standalone.unwrap_or(false),
    ))
}
