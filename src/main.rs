use anyhow::{Context, Result};
use campus_portal::api::{create_pages_router, PagesAppState};
use campus_portal::clock::SystemClock;
use campus_portal::config::{load_config_or_default, PortalConfig};
use campus_portal::portal::Portal;
use campus_portal::store::{builtin_seed, load_seed_file, StaticStore};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus_portal=info".into()),
        )
        .init();

    info!("Campus portal starting...");

    let config = load_configuration()?;
    let offset = config.locale.offset()?;

    let seed = match config.data.seed_path {
        Some(ref path) => {
            info!(path = %path.display(), "Loading seed file");
            load_seed_file(path)?
        }
        None => {
            info!("Using built-in campus data");
            builtin_seed(Utc::now())
        }
    };
    let store = StaticStore::from_seed(seed).context("Invalid seed data")?;

    let portal = Portal::new(
        Arc::new(store),
        Arc::new(SystemClock),
        offset,
        config.home.featured_count,
    );

    let mut app = create_pages_router(Arc::new(PagesAppState { portal }));
    if config.server.cors_enabled {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;
    info!(addr = %config.server.bind_addr, "Campus portal listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received");
        })
        .await
        .context("Server error")?;

    Ok(())
}

/// File named by `PORTAL_CONFIG` (default `portal.toml`), then env overrides
fn load_configuration() -> Result<PortalConfig> {
    let path = std::env::var("PORTAL_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("portal.toml"));

    let mut config = load_config_or_default(&path)?;
    config.apply_env();

    info!(
        config = %path.display(),
        bind_addr = %config.server.bind_addr,
        utc_offset_minutes = config.locale.utc_offset_minutes,
        "Configuration loaded"
    );
    Ok(config)
}
