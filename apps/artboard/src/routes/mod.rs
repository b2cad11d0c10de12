pub mod health;
pub mod render;
pub mod resumes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Templates & rendering
        .route("/api/v1/templates", get(render::handle_list_templates))
        .route("/api/v1/render", post(render::handle_render))
        .route(
            "/api/v1/render/validate",
            post(render::handle_validate_layout),
        )
        // Stored resumes
        .route(
            "/api/v1/resumes",
            get(resumes::handle_list).post(resumes::handle_create),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get)
                .put(resumes::handle_update)
                .delete(resumes::handle_delete),
        )
        .route(
            "/api/v1/resumes/:id/render",
            get(render::handle_render_stored),
        )
        .with_state(state)
}
