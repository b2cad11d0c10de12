use std::sync::Arc;

use crate::config::Config;
use crate::render::RenderContext;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable resume store. PostgreSQL when `DATABASE_URL` is set, memory otherwise.
    pub store: Arc<dyn ResumeStore>,
    pub config: Config,
}

impl AppState {
    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            asset_base_url: self.config.asset_base_url.clone(),
        }
    }
}
