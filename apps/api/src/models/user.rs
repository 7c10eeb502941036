use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserInfo {
    pub id: i32,
    pub username: String,
}

impl User {
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
        }
    }
}
