// Prompt templates for the AI-assisted endpoints.
// Replace the `{placeholders}` before sending.

/// APU matrix prompt. Replace `{descripcion}` and `{unidad}`.
pub const APU_PROMPT_TEMPLATE: &str = r#"Actúa como experto analista de costos de construcción. Genera una matriz APU (análisis de precio unitario) detallada.

REGLAS:
1. Si el concepto trae dimensiones (por ejemplo "Muro 10x3"), calcula 'cantidad_obra_detectada' y 'unidad_obra_detectada'.
2. 'precio_unitario' SIEMPRE 0.
3. Responde JSON válido, sin texto adicional, con esta forma:
{
  "explicacion": "resumen breve del análisis",
  "cantidad_obra_detectada": 30.0,
  "unidad_obra_detectada": "m2",
  "insumos": [
    {
      "tipo_insumo": "Material",
      "nombre": "Cemento gris",
      "unidad": "kg",
      "cantidad": 12.5,
      "merma": 3.0,
      "flete_unitario": 0.0,
      "precio_unitario": 0,
      "justificacion_breve": "por qué se requiere esta cantidad"
    }
  ]
}
'tipo_insumo' es uno de: "Material", "Mano de Obra", "Equipo".

CONCEPTO: {descripcion}
UNIDAD SUGERIDA: {unidad}"#;

/// Price-quote prompt. Replace `{material}`.
pub const COTIZAR_PROMPT_TEMPLATE: &str = r#"Cotiza 3 precios MXN para: {material}. JSON: { "tienda1": "...", "precio1": 0.0, "tienda2": "...", "precio2": 0.0, "tienda3": "...", "precio3": 0.0 }"#;

pub fn apu_prompt(descripcion: &str, unidad: &str) -> String {
    // Unit first, so placeholder text inside the description stays literal.
    APU_PROMPT_TEMPLATE
        .replace("{unidad}", unidad)
        .replace("{descripcion}", descripcion)
}

pub fn cotizar_prompt(material: &str) -> String {
    COTIZAR_PROMPT_TEMPLATE.replace("{material}", material)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apu_prompt_fills_placeholders() {
        let prompt = apu_prompt("Muro de block 10x3", "m2");
        assert!(prompt.contains("CONCEPTO: Muro de block 10x3"));
        assert!(prompt.contains("UNIDAD SUGERIDA: m2"));
        assert!(!prompt.contains("{descripcion}"));
        assert!(!prompt.contains("{unidad}"));
    }

    #[test]
    fn test_apu_prompt_leaves_braces_in_descripcion() {
        let prompt = apu_prompt("Letrero {unidad}", "m2");
        assert!(prompt.contains("CONCEPTO: Letrero {unidad}"));
        assert!(prompt.contains("UNIDAD SUGERIDA: m2"));
    }

    #[test]
    fn test_cotizar_prompt_keeps_json_braces() {
        let prompt = cotizar_prompt("Varilla 3/8");
        assert!(prompt.starts_with("Cotiza 3 precios MXN para: Varilla 3/8."));
        assert!(prompt.contains(r#""tienda1": "...""#));
    }
}
