use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn home_handler() -> &'static str {
    "Backend APU Builder v1.0 - Activo"
}

/// GET /health
/// Returns a simple status object with service version and AI availability.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "apu-api",
        "ai_enabled": state.llm.is_some(),
        "ai_model": state.llm.as_ref().map(|_| state.config.gemini_model.as_str()),
    }))
}
