//! Axum route handlers for the AI-assisted endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::errors::AppError;
use crate::ia::normalizer::{build_matrix, InsumoApu};
use crate::ia::service::{self, DEFAULT_UNIDAD};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatApuRequest {
    pub descripcion: Option<String>,
    pub unidad: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatApuResponse {
    pub explicacion: Value,
    pub insumos: Vec<InsumoApu>,
    pub cantidad_obra_detectada: Value,
    pub unidad_obra_detectada: Value,
}

#[derive(Debug, Deserialize)]
pub struct CotizarRequest {
    pub material: Option<String>,
}

impl ChatApuResponse {
    /// Builds the response from whatever the model produced, or the degraded
    /// placeholder when it produced nothing usable.
    pub fn from_generated(generated: Option<&Value>) -> Self {
        let field = |key: &str| {
            generated
                .and_then(|g| g.get(key))
                .cloned()
                .unwrap_or(Value::Null)
        };

        Self {
            explicacion: match generated {
                Some(_) => field("explicacion"),
                None => Value::String("Error en IA".to_string()),
            },
            insumos: build_matrix(generated),
            cantidad_obra_detectada: field("cantidad_obra_detectada"),
            unidad_obra_detectada: field("unidad_obra_detectada"),
        }
    }
}

/// POST /api/ia/chat_apu
///
/// Always answers 200: without a descripcion, or when the AI is unconfigured
/// or misbehaves, the body carries "Error en IA" and an empty matrix.
pub async fn handle_chat_apu(
    State(state): State<AppState>,
    Json(req): Json<ChatApuRequest>,
) -> Result<Json<ChatApuResponse>, AppError> {
    let descripcion = req.descripcion.as_deref().map(str::trim).unwrap_or_default();
    if descripcion.is_empty() {
        warn!("chat_apu called without descripcion");
        return Ok(Json(ChatApuResponse::from_generated(None)));
    }
    let unidad = req
        .unidad
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(DEFAULT_UNIDAD);

    let generated = match &state.llm {
        Some(llm) => service::generate_apu(llm.as_ref(), descripcion, unidad).await,
        None => {
            warn!("chat_apu called but GEMINI_API_KEY is not configured");
            None
        }
    };

    Ok(Json(ChatApuResponse::from_generated(generated.as_ref())))
}

/// POST /api/ia/cotizar
///
/// 400 without a material, 500 with a placeholder quote when the AI is
/// unconfigured or fails.
pub async fn handle_cotizar(
    State(state): State<AppState>,
    Json(req): Json<CotizarRequest>,
) -> Result<Response, AppError> {
    let material = req.material.as_deref().map(str::trim).unwrap_or_default();
    if material.is_empty() {
        return Err(AppError::Validation("Falta material".to_string()));
    }

    let Some(llm) = &state.llm else {
        warn!("cotizar called but GEMINI_API_KEY is not configured");
        return Ok(placeholder_quote("Error API"));
    };

    match service::cotizar(llm.as_ref(), material).await {
        Ok(quote) => Ok(Json(quote).into_response()),
        Err(e) => {
            error!("Quote for '{material}' failed: {e}");
            Ok(placeholder_quote("Error IA"))
        }
    }
}

fn placeholder_quote(tienda: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "tienda1": tienda, "precio1": 0 })),
    )
        .into_response()
}
