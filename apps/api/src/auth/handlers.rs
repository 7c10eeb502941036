//! Axum route handlers for session authentication.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_sessions::Session;
use tracing::{info, warn};

use crate::auth::password::verify_password;
use crate::auth::session::{require_user_id, SESSION_USER_ID_KEY};
use crate::auth::users;
use crate::errors::AppError;
use crate::models::user::UserInfo;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Credenciales inválidas";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserInfo,
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (Some(username), Some(password)) = (req.username.as_deref(), req.password.as_deref())
    else {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    let user = users::find_by_username(&state.db, username)
        .await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let valid = verify_password(password, &user.password_hash).unwrap_or_else(|e| {
        warn!("Stored hash for user {} is unusable: {e}", user.id);
        false
    });
    if !valid {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    // Fresh session id on privilege change.
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user.id).await?;
    info!("User {} logged in (admin={})", user.id, user.is_admin);

    Ok(Json(LoginResponse {
        message: "OK".to_string(),
        user: user.to_info(),
    }))
}

/// POST /api/auth/logout
pub async fn handle_logout(session: Session) -> Result<Json<Value>, AppError> {
    if let Some(user_id) = session.get::<i32>(SESSION_USER_ID_KEY).await? {
        info!("User {user_id} logged out");
    }
    session.flush().await?;
    Ok(Json(json!({ "message": "Sesión cerrada" })))
}

/// GET /api/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<UserInfo>, AppError> {
    let user_id = require_user_id(&session, "No autenticado").await?;

    // A session that outlived its user is treated as logged out.
    let user = users::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("No autenticado".to_string()))?;

    Ok(Json(user.to_info()))
}
