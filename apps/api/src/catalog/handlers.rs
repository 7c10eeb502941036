//! Axum route handlers for the reference catalogs.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::catalog::matcher::{match_mano_obra, match_material};
use crate::catalog::repository;
use crate::errors::AppError;
use crate::models::catalog::{Equipo, ManoObra, Maquinaria, Material};
use crate::money::{decimal_field, NUMERIC_12_2, NUMERIC_12_4, NUMERIC_14_2};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateMaterialRequest {
    pub nombre: Option<String>,
    pub unidad: Option<String>,
    pub precio: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct CreateManoObraRequest {
    pub puesto: Option<String>,
    pub salario: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEquipoRequest {
    pub nombre: Option<String>,
    pub unidad: Option<String>,
    pub costo_hora: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct CreateMaquinariaRequest {
    pub nombre: Option<String>,
    pub costo_adq: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct BuscarQuery {
    pub q: Option<String>,
}

/// Rejects missing and blank text fields.
fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, AppError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("Falta '{field}'")))
}

// ────────────────────────────────────────────────────────────────────────────
// Materiales
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/materiales
pub async fn handle_list_materiales(
    State(state): State<AppState>,
) -> Result<Json<Vec<Material>>, AppError> {
    let rows = repository::list_materiales(&state.db).await?;
    Ok(Json(rows.into_iter().map(Material::from).collect()))
}

/// POST /api/materiales
pub async fn handle_create_material(
    State(state): State<AppState>,
    Json(req): Json<CreateMaterialRequest>,
) -> Result<(StatusCode, Json<Material>), AppError> {
    let nombre = required(&req.nombre, "nombre")?;
    let unidad = required(&req.unidad, "unidad")?;
    let precio = decimal_field(req.precio.as_ref(), "precio", NUMERIC_12_4)?;

    let row = repository::insert_material(&state.db, nombre, unidad, precio).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /api/materiales/buscar?q=
pub async fn handle_buscar_material(
    State(state): State<AppState>,
    Query(params): Query<BuscarQuery>,
) -> Result<Json<Material>, AppError> {
    let catalog = repository::list_materiales(&state.db).await?;
    let hit = match_material(params.q.as_deref().unwrap_or_default(), &catalog)
        .ok_or_else(|| AppError::NotFound("Catálogo de materiales vacío".to_string()))?;
    Ok(Json(hit.clone().into()))
}

// ────────────────────────────────────────────────────────────────────────────
// Mano de obra
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/mano_obra
pub async fn handle_list_mano_obra(
    State(state): State<AppState>,
) -> Result<Json<Vec<ManoObra>>, AppError> {
    let rows = repository::list_mano_obra(&state.db).await?;
    Ok(Json(rows.into_iter().map(ManoObra::from).collect()))
}

/// POST /api/mano_obra
pub async fn handle_create_mano_obra(
    State(state): State<AppState>,
    Json(req): Json<CreateManoObraRequest>,
) -> Result<(StatusCode, Json<ManoObra>), AppError> {
    let puesto = required(&req.puesto, "puesto")?;
    let salario = decimal_field(req.salario.as_ref(), "salario", NUMERIC_12_2)?;

    let row = repository::insert_mano_obra(&state.db, puesto, salario).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /api/mano_obra/buscar?q=
pub async fn handle_buscar_mano_obra(
    State(state): State<AppState>,
    Query(params): Query<BuscarQuery>,
) -> Result<Json<ManoObra>, AppError> {
    let catalog = repository::list_mano_obra(&state.db).await?;
    let hit = match_mano_obra(params.q.as_deref(), &catalog)
        .ok_or_else(|| AppError::NotFound("Catálogo de mano de obra vacío".to_string()))?;
    Ok(Json(hit.clone().into()))
}

// ────────────────────────────────────────────────────────────────────────────
// Equipos / maquinaria
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/equipos
pub async fn handle_list_equipos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Equipo>>, AppError> {
    let rows = repository::list_equipos(&state.db).await?;
    Ok(Json(rows.into_iter().map(Equipo::from).collect()))
}

/// POST /api/equipos
pub async fn handle_create_equipo(
    State(state): State<AppState>,
    Json(req): Json<CreateEquipoRequest>,
) -> Result<(StatusCode, Json<Equipo>), AppError> {
    let nombre = required(&req.nombre, "nombre")?;
    let unidad = required(&req.unidad, "unidad")?;
    let costo_hora = decimal_field(req.costo_hora.as_ref(), "costo_hora", NUMERIC_12_4)?;

    let row = repository::insert_equipo(&state.db, nombre, unidad, costo_hora).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /api/maquinaria
pub async fn handle_list_maquinaria(
    State(state): State<AppState>,
) -> Result<Json<Vec<Maquinaria>>, AppError> {
    let rows = repository::list_maquinaria(&state.db).await?;
    Ok(Json(rows.into_iter().map(Maquinaria::from).collect()))
}

/// POST /api/maquinaria
pub async fn handle_create_maquinaria(
    State(state): State<AppState>,
    Json(req): Json<CreateMaquinariaRequest>,
) -> Result<(StatusCode, Json<Maquinaria>), AppError> {
    let nombre = required(&req.nombre, "nombre")?;
    let costo_adq = decimal_field(req.costo_adq.as_ref(), "costo_adq", NUMERIC_14_2)?;

    let row = repository::insert_maquinaria(&state.db, nombre, costo_adq).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}
