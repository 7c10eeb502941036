pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::catalog::handlers as catalog;
use crate::ia::handlers as ia;
use crate::proyectos::handlers as proyectos;
use crate::state::AppState;

/// Builds the API router. The session layer is added by the caller so tests
/// can swap in an in-memory store.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/logout", post(auth::handle_logout))
        .route("/api/auth/me", get(auth::handle_me))
        // Proyectos
        .route(
            "/api/proyectos",
            get(proyectos::handle_list_proyectos).post(proyectos::handle_create_proyecto),
        )
        .route(
            "/api/proyectos/{id}",
            delete(proyectos::handle_delete_proyecto),
        )
        // IA
        .route("/api/ia/chat_apu", post(ia::handle_chat_apu))
        .route("/api/ia/cotizar", post(ia::handle_cotizar))
        // Catálogos
        .route(
            "/api/materiales",
            get(catalog::handle_list_materiales).post(catalog::handle_create_material),
        )
        .route("/api/materiales/buscar", get(catalog::handle_buscar_material))
        .route(
            "/api/mano_obra",
            get(catalog::handle_list_mano_obra).post(catalog::handle_create_mano_obra),
        )
        .route("/api/mano_obra/buscar", get(catalog::handle_buscar_mano_obra))
        .route(
            "/api/equipos",
            get(catalog::handle_list_equipos).post(catalog::handle_create_equipo),
        )
        .route(
            "/api/maquinaria",
            get(catalog::handle_list_maquinaria).post(catalog::handle_create_maquinaria),
        )
        .with_state(state)
}
