use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::PgPool;

use crate::models::proyecto::ProyectoRow;

/// Parameters for inserting a project.
pub struct NewProyecto<'a> {
    pub user_id: i32,
    pub nombre: &'a str,
    pub tipo_documento: &'a str,
    pub descripcion: Option<&'a str>,
    pub total: Decimal,
    pub data: &'a Value,
}

/// The caller's projects, newest date first; same-date rows newest insertion first.
pub async fn list_for_user(pool: &PgPool, user_id: i32) -> Result<Vec<ProyectoRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, user_id, nombre, tipo_documento, descripcion, total, fecha, data
        FROM proyectos
        WHERE user_id = $1
        ORDER BY fecha DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &PgPool, params: NewProyecto<'_>) -> Result<ProyectoRow, sqlx::Error> {
    let NewProyecto {
        user_id,
        nombre,
        tipo_documento,
        descripcion,
        total,
        data,
    } = params;

    sqlx::query_as(
        r#"
        INSERT INTO proyectos (user_id, nombre, tipo_documento, descripcion, total, data)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, nombre, tipo_documento, descripcion, total, fecha, data
        "#,
    )
    .bind(user_id)
    .bind(nombre)
    .bind(tipo_documento)
    .bind(descripcion)
    .bind(total)
    .bind(data)
    .fetch_one(pool)
    .await
}

/// Deletes a project only if `user_id` owns it. Returns the number of rows removed,
/// so a foreign id and a missing id look the same to the caller.
pub async fn delete_owned(pool: &PgPool, id: i32, user_id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM proyectos WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
