use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use crate::money::to_f64;

#[derive(Debug, Clone, FromRow)]
pub struct ProyectoRow {
    pub id: i32,
    #[allow(dead_code)]
    pub user_id: Option<i32>,
    pub nombre: String,
    pub tipo_documento: String,
    pub descripcion: Option<String>,
    pub total: Decimal,
    pub fecha: NaiveDate,
    /// Full cost breakdown exactly as the client assembled it.
    pub data: Value,
}

/// Wire shape of a project: `total` as a float, `fecha` as an ISO date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Proyecto {
    pub id: i32,
    pub nombre: String,
    pub tipo_documento: String,
    pub descripcion: Option<String>,
    pub total: f64,
    pub fecha: NaiveDate,
    pub data: Value,
}

impl From<ProyectoRow> for Proyecto {
    fn from(row: ProyectoRow) -> Self {
        Proyecto {
            id: row.id,
            nombre: row.nombre,
            tipo_documento: row.tipo_documento,
            descripcion: row.descripcion,
            total: to_f64(row.total),
            fecha: row.fecha,
            data: row.data,
        }
    }
}
