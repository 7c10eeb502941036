//! Fixed-point money handling for request bodies and responses.
//!
//! Monetary columns are `NUMERIC` and map to `rust_decimal::Decimal`. Clients
//! send them as JSON numbers or strings; absent and blank values mean zero.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::errors::AppError;

/// Precision and scale of a `NUMERIC(p, s)` column.
#[derive(Debug, Clone, Copy)]
pub struct NumericColumn {
    pub precision: u32,
    pub scale: u32,
}

/// `proyectos.total`, `maquinaria.costo_adquisicion`
pub const NUMERIC_14_2: NumericColumn = NumericColumn { precision: 14, scale: 2 };
/// `materiales.precio_unitario`, `equipos.costo_hora_maq`
pub const NUMERIC_12_4: NumericColumn = NumericColumn { precision: 12, scale: 4 };
/// `mano_obra.salario_base`
pub const NUMERIC_12_2: NumericColumn = NumericColumn { precision: 12, scale: 2 };

impl NumericColumn {
    /// Smallest magnitude the column can no longer store.
    fn limit(self) -> Decimal {
        Decimal::from(10u64.pow(self.precision - self.scale))
    }
}

/// Parses a client-supplied money field destined for `column`.
///
/// `null`, a missing key and a blank string all yield zero. Negative amounts,
/// anything that is not a number and amounts that overflow the column are
/// rejected. The result is rounded to the column's scale the way Postgres
/// rounds on insert.
pub fn decimal_field(
    value: Option<&Value>,
    field: &str,
    column: NumericColumn,
) -> Result<Decimal, AppError> {
    let amount = match value {
        None | Some(Value::Null) => return Ok(Decimal::ZERO),
        Some(Value::Number(n)) => parse_decimal(&n.to_string()),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(Decimal::ZERO),
        Some(Value::String(s)) => parse_decimal(s.trim()),
        Some(_) => None,
    };

    let amount =
        amount.ok_or_else(|| AppError::Validation(format!("'{field}' debe ser numérico")))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AppError::Validation(format!(
            "'{field}' no puede ser negativo"
        )));
    }

    let amount =
        amount.round_dp_with_strategy(column.scale, RoundingStrategy::MidpointAwayFromZero);
    if amount >= column.limit() {
        return Err(AppError::Validation(format!(
            "'{field}' excede el máximo permitido"
        )));
    }
    Ok(amount)
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Lossy conversion for JSON output, where amounts travel as floats.
pub fn to_f64(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_null_and_blank_are_zero() {
        for value in [None, Some(&Value::Null), Some(&json!("   "))] {
            assert_eq!(
                decimal_field(value, "total", NUMERIC_14_2).unwrap(),
                Decimal::ZERO
            );
        }
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        assert_eq!(
            decimal_field(Some(&json!(1520.75)), "total", NUMERIC_14_2).unwrap(),
            Decimal::new(152075, 2)
        );
        assert_eq!(
            decimal_field(Some(&json!(" 89.5 ")), "precio", NUMERIC_14_2).unwrap(),
            Decimal::new(895, 1)
        );
        assert_eq!(
            decimal_field(Some(&json!(42)), "precio", NUMERIC_14_2).unwrap(),
            Decimal::new(42, 0)
        );
    }

    #[test]
    fn test_rejects_negative_and_garbage() {
        assert!(matches!(
            decimal_field(Some(&json!(-1)), "total", NUMERIC_14_2),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            decimal_field(Some(&json!("doce")), "total", NUMERIC_14_2),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            decimal_field(Some(&json!(true)), "total", NUMERIC_14_2),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_amounts_wider_than_column() {
        assert!(matches!(
            decimal_field(Some(&json!(1e15)), "total", NUMERIC_14_2),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            decimal_field(Some(&json!("100000000")), "precio", NUMERIC_12_4),
            Err(AppError::Validation(_))
        ));
        // Rounds up to 10^10 at scale 2.
        assert!(matches!(
            decimal_field(Some(&json!("9999999999.995")), "salario", NUMERIC_12_2),
            Err(AppError::Validation(_))
        ));
        assert_eq!(
            decimal_field(Some(&json!("9999999999.99")), "salario", NUMERIC_12_2).unwrap(),
            Decimal::new(999999999999, 2)
        );
        assert_eq!(
            decimal_field(Some(&json!("99999999.9999")), "precio", NUMERIC_12_4).unwrap(),
            Decimal::new(999999999999, 4)
        );
    }

    #[test]
    fn test_rounds_to_column_scale() {
        assert_eq!(
            decimal_field(Some(&json!("10.005")), "total", NUMERIC_14_2).unwrap(),
            Decimal::new(1001, 2)
        );
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(to_f64(Decimal::new(1050, 2)), 10.5);
        assert_eq!(to_f64(Decimal::ZERO), 0.0);
    }
}
