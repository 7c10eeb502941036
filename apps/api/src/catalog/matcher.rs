//! Best-effort keyword lookup over reference catalogs.
//!
//! First match wins: the scan is linear over the catalog in its given order,
//! comparing lowercased names by substring. When nothing matches the first
//! entry is returned as a default; an empty catalog yields `None`.

use crate::models::catalog::{ManoObraRow, MaterialRow};

/// Returns the first entry whose name contains `keyword` (case-insensitive),
/// falling back to the first entry.
pub fn first_match_or_default<'a, T, F>(keyword: &str, catalog: &'a [T], name: F) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let first = catalog.first()?;
    let needle = keyword.to_lowercase();
    catalog
        .iter()
        .find(|item| name(item).to_lowercase().contains(&needle))
        .or(Some(first))
}

/// Matches a material by `nombre`. An empty keyword is a substring of every
/// name, so it resolves to the first entry without special handling.
pub fn match_material<'a>(keyword: &str, catalog: &'a [MaterialRow]) -> Option<&'a MaterialRow> {
    first_match_or_default(keyword, catalog, |m| m.nombre.as_str())
}

/// Matches a labor role by `puesto`. A missing or empty keyword short-circuits
/// to the first entry.
pub fn match_mano_obra<'a>(
    keyword: Option<&str>,
    catalog: &'a [ManoObraRow],
) -> Option<&'a ManoObraRow> {
    let keyword = keyword.unwrap_or_default();
    if keyword.is_empty() {
        return catalog.first();
    }
    first_match_or_default(keyword, catalog, |m| m.puesto.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn material(id: i32, nombre: &str) -> MaterialRow {
        MaterialRow {
            id,
            nombre: nombre.to_string(),
            unidad: "pza".to_string(),
            precio_unitario: Decimal::new(100, 0),
            fecha_actualizacion: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn puesto(id: i32, puesto: &str) -> ManoObraRow {
        ManoObraRow {
            id,
            puesto: puesto.to_string(),
            salario_base: Decimal::new(450, 0),
        }
    }

    fn materiales() -> Vec<MaterialRow> {
        vec![
            material(1, "Arena de río"),
            material(2, "Cemento gris CPC 30R"),
            material(3, "Cemento blanco"),
            material(4, "Varilla corrugada 3/8"),
        ]
    }

    #[test]
    fn test_material_case_insensitive_substring() {
        let catalog = materiales();
        let hit = match_material("VARILLA", &catalog).unwrap();
        assert_eq!(hit.id, 4);
    }

    #[test]
    fn test_material_first_match_wins() {
        let catalog = materiales();
        let hit = match_material("cemento", &catalog).unwrap();
        assert_eq!(hit.id, 2);
    }

    #[test]
    fn test_material_no_match_falls_back_to_first() {
        let catalog = materiales();
        for keyword in ["block hueco", "zzz", "ladrillo rojo recocido"] {
            assert_eq!(match_material(keyword, &catalog).unwrap().id, 1);
        }
    }

    #[test]
    fn test_material_empty_keyword_returns_first() {
        let catalog = materiales();
        assert_eq!(match_material("", &catalog).unwrap().id, 1);
    }

    #[test]
    fn test_empty_catalogs_yield_none() {
        assert!(match_material("cemento", &[]).is_none());
        assert!(match_material("", &[]).is_none());
        assert!(match_mano_obra(Some("albañil"), &[]).is_none());
        assert!(match_mano_obra(None, &[]).is_none());
    }

    #[test]
    fn test_mano_obra_matching() {
        let catalog = vec![
            puesto(10, "Peón"),
            puesto(11, "Oficial albañil"),
            puesto(12, "Cabo de oficios"),
        ];
        assert_eq!(match_mano_obra(Some("ALBAÑIL"), &catalog).unwrap().id, 11);
        assert_eq!(match_mano_obra(Some("cabo"), &catalog).unwrap().id, 12);
        assert_eq!(match_mano_obra(Some("electricista"), &catalog).unwrap().id, 10);
        assert_eq!(match_mano_obra(Some(""), &catalog).unwrap().id, 10);
        assert_eq!(match_mano_obra(None, &catalog).unwrap().id, 10);
    }
}
