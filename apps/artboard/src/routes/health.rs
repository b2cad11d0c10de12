use axum::Json;
use serde_json::{json, Value};

use crate::render::available_templates;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "artboard",
        "templates": available_templates()
    }))
}
