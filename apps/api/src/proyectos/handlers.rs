//! Axum route handlers for the project API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_sessions::Session;
use tracing::info;

use crate::auth::session::require_user_id;
use crate::errors::AppError;
use crate::models::proyecto::Proyecto;
use crate::money::{decimal_field, NUMERIC_14_2};
use crate::proyectos::repository::{self, NewProyecto};
use crate::state::AppState;

const NOT_AUTHORIZED: &str = "No autorizado";
const DEFAULT_TIPO_DOCUMENTO: &str = "Presupuesto";

#[derive(Debug, Deserialize)]
pub struct CreateProyectoRequest {
    pub nombre: Option<String>,
    pub tipo_documento: Option<String>,
    pub descripcion: Option<String>,
    pub total: Option<Value>,
    pub config_completa: Option<Value>,
}

/// GET /api/proyectos
pub async fn handle_list_proyectos(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<Proyecto>>, AppError> {
    let user_id = require_user_id(&session, NOT_AUTHORIZED).await?;
    let rows = repository::list_for_user(&state.db, user_id).await?;
    Ok(Json(rows.into_iter().map(Proyecto::from).collect()))
}

/// POST /api/proyectos
///
/// `total` is stored as sent; it is not recomputed from `config_completa`.
pub async fn handle_create_proyecto(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<CreateProyectoRequest>,
) -> Result<(StatusCode, Json<Proyecto>), AppError> {
    let user_id = require_user_id(&session, NOT_AUTHORIZED).await?;

    let nombre = req
        .nombre
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("Falta 'nombre'".to_string()))?;
    let tipo_documento = req
        .tipo_documento
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TIPO_DOCUMENTO);
    let total = decimal_field(req.total.as_ref(), "total", NUMERIC_14_2)?;
    let data = match req.config_completa {
        Some(Value::Null) | None => json!({}),
        Some(value) => value,
    };

    let row = repository::insert(
        &state.db,
        NewProyecto {
            user_id,
            nombre,
            tipo_documento,
            descripcion: req.descripcion.as_deref(),
            total,
            data: &data,
        },
    )
    .await?;

    info!("User {user_id} created proyecto {}", row.id);
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// DELETE /api/proyectos/{id}
pub async fn handle_delete_proyecto(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let user_id = require_user_id(&session, NOT_AUTHORIZED).await?;
    let deleted = repository::delete_owned(&state.db, id, user_id).await?;
    ensure_deleted(deleted)?;

    info!("User {user_id} deleted proyecto {id}");
    Ok(Json(json!({ "message": "Eliminado" })))
}

/// Zero rows means the id does not exist or belongs to someone else; both are 404.
fn ensure_deleted(rows_affected: u64) -> Result<(), AppError> {
    if rows_affected == 0 {
        return Err(AppError::NotFound("No encontrado".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_or_missing_project_is_not_found() {
        assert!(matches!(ensure_deleted(0), Err(AppError::NotFound(_))));
        assert!(ensure_deleted(1).is_ok());
    }
}
