use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::auth::password::hash_password;
use crate::models::user::User;

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT id, username, password_hash, is_admin FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT id, username, password_hash, is_admin FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// What `create_user` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserWrite {
    Created,
    Updated,
    /// The username exists and `force` was not given.
    Skipped,
}

/// Creates a user, or replaces an existing user's password and admin flag when `force` is set.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    password: &str,
    is_admin: bool,
    force: bool,
) -> Result<UserWrite> {
    let username = username.trim();
    anyhow::ensure!(!username.is_empty(), "username cannot be empty");
    anyhow::ensure!(!password.is_empty(), "password cannot be empty");

    let existing = find_by_username(pool, username).await?;
    if existing.is_some() && !force {
        return Ok(UserWrite::Skipped);
    }

    let hash = hash_password(password).context("Could not hash password")?;

    let outcome = if existing.is_some() {
        sqlx::query("UPDATE users SET password_hash = $1, is_admin = $2 WHERE username = $3")
            .bind(&hash)
            .bind(is_admin)
            .bind(username)
            .execute(pool)
            .await?;
        UserWrite::Updated
    } else {
        sqlx::query("INSERT INTO users (username, password_hash, is_admin) VALUES ($1, $2, $3)")
            .bind(username)
            .bind(&hash)
            .bind(is_admin)
            .execute(pool)
            .await?;
        UserWrite::Created
    };

    info!("User '{username}' {outcome:?} (admin={is_admin})");
    Ok(outcome)
}

/// Creates the configured admin account if it does not exist yet. Never overwrites.
pub async fn seed_admin(pool: &PgPool, username: &str, password: &str) -> Result<()> {
    match create_user(pool, username, password, true, false).await? {
        UserWrite::Skipped => info!("Admin user '{username}' already exists; skipping seed"),
        _ => info!("Admin user '{username}' created"),
    }
    Ok(())
}
