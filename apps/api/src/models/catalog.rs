use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::money::to_f64;

#[derive(Debug, Clone, FromRow)]
pub struct MaterialRow {
    pub id: i32,
    pub nombre: String,
    pub unidad: String,
    pub precio_unitario: Decimal,
    #[allow(dead_code)]
    pub fecha_actualizacion: NaiveDate,
}

#[derive(Debug, Clone, FromRow)]
pub struct ManoObraRow {
    pub id: i32,
    pub puesto: String,
    pub salario_base: Decimal,
}

#[derive(Debug, Clone, FromRow)]
pub struct EquipoRow {
    pub id: i32,
    pub nombre: String,
    pub unidad: String,
    pub costo_hora_maq: Decimal,
}

#[derive(Debug, Clone, FromRow)]
pub struct MaquinariaRow {
    pub id: i32,
    pub nombre: String,
    pub costo_adquisicion: Decimal,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Material {
    pub id: i32,
    pub nombre: String,
    pub unidad: String,
    pub precio: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ManoObra {
    pub id: i32,
    pub puesto: String,
    pub salario: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Equipo {
    pub id: i32,
    pub nombre: String,
    pub unidad: String,
    pub costo_hora: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Maquinaria {
    pub id: i32,
    pub nombre: String,
    pub costo_adq: f64,
}

impl From<MaterialRow> for Material {
    fn from(row: MaterialRow) -> Self {
        Material {
            id: row.id,
            nombre: row.nombre,
            unidad: row.unidad,
            precio: to_f64(row.precio_unitario),
        }
    }
}

impl From<ManoObraRow> for ManoObra {
    fn from(row: ManoObraRow) -> Self {
        ManoObra {
            id: row.id,
            puesto: row.puesto,
            salario: to_f64(row.salario_base),
        }
    }
}

impl From<EquipoRow> for Equipo {
    fn from(row: EquipoRow) -> Self {
        Equipo {
            id: row.id,
            nombre: row.nombre,
            unidad: row.unidad,
            costo_hora: to_f64(row.costo_hora_maq),
        }
    }
}

impl From<MaquinariaRow> for Maquinaria {
    fn from(row: MaquinariaRow) -> Self {
        Maquinaria {
            id: row.id,
            nombre: row.nombre,
            costo_adq: to_f64(row.costo_adquisicion),
        }
    }
}
