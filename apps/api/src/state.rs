use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Generative backend, configured once at startup. `None` when no API key is set.
    pub llm: Option<Arc<dyn TextGenerator>>,
    pub config: Config,
}
