mod auth;
mod catalog;
mod config;
mod db;
mod errors;
mod ia;
mod llm_client;
mod models;
mod money;
mod proyectos;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::users::{self, UserWrite};
use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

const SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 7;

#[derive(Parser)]
#[command(name = "apu-api", about = "Backend for the APU Builder cost-estimation tool")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Apply database migrations and exit
    Migrate,
    /// Create a user, or update one with --force
    CreateUser {
        /// Username
        username: String,
        /// Plain-text password (stored as an Argon2id hash)
        password: String,
        /// Mark the user as administrator
        #[arg(long)]
        admin: bool,
        /// Replace password and admin flag if the user already exists
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Migrate => {
            let db = create_pool(&config.database_url).await?;
            run_migrations(&db).await?;
            info!("Migrations complete");
            Ok(())
        }
        Commands::CreateUser {
            username,
            password,
            admin,
            force,
        } => {
            let db = create_pool(&config.database_url).await?;
            run_migrations(&db).await?;
            match users::create_user(&db, &username, &password, admin, force).await? {
                UserWrite::Skipped => {
                    println!("User '{username}' already exists. Use --force to update it.")
                }
                UserWrite::Created => println!("User '{username}' created. Admin={admin}"),
                UserWrite::Updated => println!("User '{username}' updated. Admin={admin}"),
            }
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting APU Builder API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    let session_store = run_migrations(&db).await?;

    if let Some((username, password)) = config.admin_credentials() {
        users::seed_admin(&db, username, password).await?;
    }

    // Initialize LLM client (optional)
    let llm = build_llm(&config)?;

    // Sessions: SameSite=None so a frontend on another origin can send the cookie.
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.session_cookie_secure)
        .with_same_site(SameSite::None)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(SESSION_TTL_SECS).try_into()?,
        ));

    // Build app state
    let state = AppState {
        db,
        llm,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_llm(config: &Config) -> Result<Option<Arc<dyn TextGenerator>>> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        warn!("GEMINI_API_KEY not set; AI endpoints will answer with placeholders");
        return Ok(None);
    };

    let client = GeminiClient::new(
        api_key,
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
    )
    .context("Failed to build Gemini HTTP client")?;
    info!("LLM client initialized (model: {})", client.model());

    Ok(Some(Arc::new(client)))
}
