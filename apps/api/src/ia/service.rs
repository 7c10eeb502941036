use serde_json::Value;
use tracing::{info, warn};

use crate::ia::normalizer::{normalize_cotizacion, Cotizacion};
use crate::llm_client::prompts::{apu_prompt, cotizar_prompt};
use crate::llm_client::{strip_json_fences, GenerationOptions, LlmError, TextGenerator};

pub const DEFAULT_UNIDAD: &str = "m2";

/// Asks the model for an APU matrix and returns the parsed JSON object.
///
/// Any failure (transport, empty reply, invalid JSON, non-object JSON) is
/// logged and collapses to `None`; callers degrade instead of erroring.
pub async fn generate_apu(
    llm: &dyn TextGenerator,
    descripcion: &str,
    unidad: &str,
) -> Option<Value> {
    let prompt = apu_prompt(descripcion, unidad);

    let text = match llm.generate(&prompt, &GenerationOptions::structured()).await {
        Ok(text) => text,
        Err(e) => {
            warn!("APU generation failed (model {}): {e}", llm.model());
            return None;
        }
    };

    match serde_json::from_str::<Value>(strip_json_fences(&text)) {
        Ok(value) if value.is_object() => {
            info!("APU generated for '{descripcion}' ({unidad})");
            Some(value)
        }
        Ok(_) => {
            warn!("APU reply was valid JSON but not an object");
            None
        }
        Err(e) => {
            warn!("APU reply is not valid JSON: {e}");
            None
        }
    }
}

/// Asks the model for three store prices for `material`.
pub async fn cotizar(llm: &dyn TextGenerator, material: &str) -> Result<Cotizacion, LlmError> {
    let text = llm
        .generate(&cotizar_prompt(material), &GenerationOptions::default())
        .await?;
    let value: Value = serde_json::from_str(strip_json_fences(&text))?;
    normalize_cotizacion(&value).ok_or(LlmError::EmptyContent)
}
