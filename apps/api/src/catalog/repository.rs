use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::catalog::{EquipoRow, ManoObraRow, MaquinariaRow, MaterialRow};

// Every listing is in `id` order so the matcher's default (first entry) is stable.

pub async fn list_materiales(pool: &PgPool) -> Result<Vec<MaterialRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM materiales ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn insert_material(
    pool: &PgPool,
    nombre: &str,
    unidad: &str,
    precio_unitario: Decimal,
) -> Result<MaterialRow, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO materiales (nombre, unidad, precio_unitario) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(nombre)
    .bind(unidad)
    .bind(precio_unitario)
    .fetch_one(pool)
    .await
}

pub async fn list_mano_obra(pool: &PgPool) -> Result<Vec<ManoObraRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM mano_obra ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn insert_mano_obra(
    pool: &PgPool,
    puesto: &str,
    salario_base: Decimal,
) -> Result<ManoObraRow, sqlx::Error> {
    sqlx::query_as("INSERT INTO mano_obra (puesto, salario_base) VALUES ($1, $2) RETURNING *")
        .bind(puesto)
        .bind(salario_base)
        .fetch_one(pool)
        .await
}

pub async fn list_equipos(pool: &PgPool) -> Result<Vec<EquipoRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM equipos ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn insert_equipo(
    pool: &PgPool,
    nombre: &str,
    unidad: &str,
    costo_hora_maq: Decimal,
) -> Result<EquipoRow, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO equipos (nombre, unidad, costo_hora_maq) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(nombre)
    .bind(unidad)
    .bind(costo_hora_maq)
    .fetch_one(pool)
    .await
}

pub async fn list_maquinaria(pool: &PgPool) -> Result<Vec<MaquinariaRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM maquinaria ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn insert_maquinaria(
    pool: &PgPool,
    nombre: &str,
    costo_adquisicion: Decimal,
) -> Result<MaquinariaRow, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO maquinaria (nombre, costo_adquisicion) VALUES ($1, $2) RETURNING *",
    )
    .bind(nombre)
    .bind(costo_adquisicion)
    .fetch_one(pool)
    .await
}
