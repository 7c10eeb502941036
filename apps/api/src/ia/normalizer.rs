//! Coerces free-form AI output into the fixed APU line-item schema.
//!
//! Nothing in here fails: missing or malformed fields fall back to defaults.
//! Prices are never taken from the model. `precio_unitario` and
//! `costo_unitario` are always zero and `id_insumo` is always 0 until a
//! human or the catalog fills them in.

use serde::Serialize;
use serde_json::{Map, Value};

/// One normalized input line of an APU matrix.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InsumoApu {
    pub tipo_insumo: String,
    pub nombre: String,
    pub unidad: String,
    pub cantidad: f64,
    pub merma: f64,
    pub flete_unitario: f64,
    pub precio_unitario: f64,
    pub costo_unitario: f64,
    pub justificacion_breve: String,
    /// Catalog row reference; 0 means "not linked yet".
    pub id_insumo: i32,
}

/// Three-store price quote.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cotizacion {
    pub tienda1: String,
    pub precio1: f64,
    pub tienda2: String,
    pub precio2: f64,
    pub tienda3: String,
    pub precio3: f64,
}

/// Numeric coercion that never fails: numbers pass through, numeric strings
/// are parsed, booleans map to 1/0, everything else (and NaN/inf) is 0.0.
pub fn safe_float(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|f| f.is_finite()).unwrap_or(0.0)
}

fn text_field(item: &Map<String, Value>, key: &str, default: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// Builds the normalized matrix from a parsed AI reply.
///
/// Returns an empty vec when the reply is absent, not an object, or has no
/// `insumos` array. Array elements that are not objects are skipped.
pub fn build_matrix(data: Option<&Value>) -> Vec<InsumoApu> {
    let Some(insumos) = data
        .and_then(Value::as_object)
        .and_then(|obj| obj.get("insumos"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    insumos
        .iter()
        .filter_map(Value::as_object)
        .map(|item| InsumoApu {
            tipo_insumo: text_field(item, "tipo_insumo", "Material"),
            nombre: text_field(item, "nombre", ""),
            unidad: text_field(item, "unidad", "pza"),
            cantidad: safe_float(item.get("cantidad")),
            merma: safe_float(item.get("merma")),
            flete_unitario: safe_float(item.get("flete_unitario")),
            precio_unitario: 0.0,
            costo_unitario: 0.0,
            justificacion_breve: text_field(item, "justificacion_breve", ""),
            id_insumo: 0,
        })
        .collect()
}

/// Normalizes a quote reply. Returns `None` when the reply is not an object.
pub fn normalize_cotizacion(data: &Value) -> Option<Cotizacion> {
    let obj = data.as_object()?;
    Some(Cotizacion {
        tienda1: text_field(obj, "tienda1", ""),
        precio1: safe_float(obj.get("precio1")),
        tienda2: text_field(obj, "tienda2", ""),
        precio2: safe_float(obj.get("precio2")),
        tienda3: text_field(obj, "tienda3", ""),
        precio3: safe_float(obj.get("precio3")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ai_price_is_always_discarded() {
        let data = json!({
            "insumos": [
                {"nombre": "Cemento", "cantidad": "10.5", "precio_unitario": 999}
            ]
        });
        let matrix = build_matrix(Some(&data));

        assert_eq!(matrix.len(), 1);
        let item = &matrix[0];
        assert_eq!(item.nombre, "Cemento");
        assert_eq!(item.cantidad, 10.5);
        assert_eq!(item.precio_unitario, 0.0);
        assert_eq!(item.costo_unitario, 0.0);
        assert_eq!(item.id_insumo, 0);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let matrix = build_matrix(Some(&json!({"insumos": [{}]})));
        assert_eq!(
            matrix,
            vec![InsumoApu {
                tipo_insumo: "Material".to_string(),
                nombre: String::new(),
                unidad: "pza".to_string(),
                cantidad: 0.0,
                merma: 0.0,
                flete_unitario: 0.0,
                precio_unitario: 0.0,
                costo_unitario: 0.0,
                justificacion_breve: String::new(),
                id_insumo: 0,
            }]
        );
    }

    #[test]
    fn test_preserves_order_and_descriptive_fields() {
        let data = json!({
            "insumos": [
                {
                    "tipo_insumo": "Mano de Obra",
                    "nombre": "Oficial albañil",
                    "unidad": "jor",
                    "cantidad": 0.125,
                    "merma": null,
                    "flete_unitario": "1.5",
                    "costo_unitario": 800,
                    "justificacion_breve": "rendimiento 8 m2/jor"
                },
                {"tipo_insumo": "Equipo", "nombre": "Revolvedora", "cantidad": 0.05, "merma": 2}
            ]
        });
        let matrix = build_matrix(Some(&data));

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0].tipo_insumo, "Mano de Obra");
        assert_eq!(matrix[0].unidad, "jor");
        assert_eq!(matrix[0].cantidad, 0.125);
        assert_eq!(matrix[0].merma, 0.0);
        assert_eq!(matrix[0].flete_unitario, 1.5);
        assert_eq!(matrix[0].costo_unitario, 0.0);
        assert_eq!(matrix[0].justificacion_breve, "rendimiento 8 m2/jor");
        assert_eq!(matrix[1].nombre, "Revolvedora");
        assert_eq!(matrix[1].unidad, "pza");
        assert_eq!(matrix[1].merma, 2.0);
    }

    #[test]
    fn test_empty_for_null_and_shapeless_input() {
        assert!(build_matrix(None).is_empty());
        assert!(build_matrix(Some(&Value::Null)).is_empty());
        assert!(build_matrix(Some(&json!({}))).is_empty());
        assert!(build_matrix(Some(&json!([{"nombre": "Cemento"}]))).is_empty());
        assert!(build_matrix(Some(&json!({"insumos": "Cemento"}))).is_empty());
        assert!(build_matrix(Some(&json!({"insumos": null}))).is_empty());
    }

    #[test]
    fn test_non_object_items_are_skipped() {
        let data = json!({"insumos": ["Cemento", 3, {"nombre": "Arena"}, null]});
        let matrix = build_matrix(Some(&data));
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix[0].nombre, "Arena");
    }

    #[test]
    fn test_safe_float_never_fails() {
        assert_eq!(safe_float(Some(&json!("abc"))), 0.0);
        assert_eq!(safe_float(Some(&json!(""))), 0.0);
        assert_eq!(safe_float(Some(&json!("nan"))), 0.0);
        assert_eq!(safe_float(Some(&json!("inf"))), 0.0);
        assert_eq!(safe_float(Some(&json!([1.0]))), 0.0);
        assert_eq!(safe_float(Some(&json!({"v": 1}))), 0.0);
        assert_eq!(safe_float(Some(&Value::Null)), 0.0);
        assert_eq!(safe_float(None), 0.0);
    }

    #[test]
    fn test_safe_float_accepts_numeric_forms() {
        assert_eq!(safe_float(Some(&json!(3))), 3.0);
        assert_eq!(safe_float(Some(&json!(-2.5))), -2.5);
        assert_eq!(safe_float(Some(&json!(" 7.25 "))), 7.25);
        assert_eq!(safe_float(Some(&json!("1e3"))), 1000.0);
        assert_eq!(safe_float(Some(&json!(true))), 1.0);
    }

    #[test]
    fn test_normalize_cotizacion() {
        let data = json!({
            "tienda1": "Home Depot", "precio1": "245.50",
            "tienda2": "Construrama", "precio2": 239,
            "tienda3": "Ferretería local"
        });
        let quote = normalize_cotizacion(&data).unwrap();
        assert_eq!(quote.tienda1, "Home Depot");
        assert_eq!(quote.precio1, 245.5);
        assert_eq!(quote.precio2, 239.0);
        assert_eq!(quote.tienda3, "Ferretería local");
        assert_eq!(quote.precio3, 0.0);

        assert!(normalize_cotizacion(&json!("sin precios")).is_none());
    }
}
