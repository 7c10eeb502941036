use tower_sessions::Session;

use crate::errors::AppError;

/// Key under which the logged-in user's id is stored in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Returns the session's user id, or 401 when nobody is logged in.
pub async fn require_user_id(session: &Session, message: &str) -> Result<i32, AppError> {
    session
        .get::<i32>(SESSION_USER_ID_KEY)
        .await?
        .ok_or_else(|| AppError::Unauthorized(message.to_string()))
}
