use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// `None` disables every AI-assisted endpoint.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub port: u16,
    pub session_cookie_secure: bool,
    /// Admin account seeded at startup when both halves are present.
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            session_cookie_secure: parse_bool(
                "SESSION_COOKIE_SECURE",
                optional_env("SESSION_COOKIE_SECURE").as_deref(),
                true,
            )?,
            admin_username: optional_env("ADMIN_USERNAME"),
            admin_password: optional_env("ADMIN_PASSWORD"),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the seed admin credentials only when both are configured.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (&self.admin_username, &self.admin_password) {
            (Some(u), Some(p)) => Some((u.as_str(), p.as_str())),
            _ => None,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(key: &str, raw: Option<&str>, default: bool) -> Result<bool> {
    match raw.map(|v| v.to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(v) => anyhow::bail!("{key} must be a boolean, got '{v}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_variants() {
        assert!(parse_bool("X", None, true).unwrap());
        assert!(!parse_bool("X", None, false).unwrap());
        assert!(parse_bool("X", Some("TRUE"), false).unwrap());
        assert!(!parse_bool("X", Some("0"), true).unwrap());
        assert!(parse_bool("X", Some("maybe"), true).is_err());
    }

    #[test]
    fn test_admin_credentials_need_both_halves() {
        let mut config = Config {
            database_url: "postgres://localhost/apu".to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            port: 8000,
            session_cookie_secure: true,
            admin_username: Some("admin".to_string()),
            admin_password: None,
            rust_log: "info".to_string(),
        };
        assert!(config.admin_credentials().is_none());

        config.admin_password = Some("secreto".to_string());
        assert_eq!(config.admin_credentials(), Some(("admin", "secreto")));
    }
}
