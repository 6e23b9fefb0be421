//! wordfreq-lookup - Word-frequency lookup microservice
//!
//! Serves `GET /api/word-to-word?word=...` from a SQLite `word_frequencies`
//! table populated by a separate ingestion step.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wordfreq_common::config::TomlConfig;
use wordfreq_common::db;
use wordfreq_lookup::settings::{CliArgs, Settings};
use wordfreq_lookup::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Loading does not log; the origin is reported below once the subscriber
    // exists, so a missing config file still produces its warning.
    let (config, origin) = TomlConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    let settings = Settings::resolve(args, config);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting wordfreq-lookup v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    origin.log();

    info!("Database path: {}", settings.database_path.display());
    info!(
        "Match policy: case_sensitive={} trim_whitespace={}",
        settings.matching.case_sensitive, settings.matching.trim_whitespace
    );

    let pool = if settings.init_db {
        db::init_database(&settings.database_path).await
    } else {
        db::connect_readonly(&settings.database_path).await
    };
    let pool = match pool {
        Ok(pool) => {
            info!("Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::from_pool(pool, settings.matching);
    let app = build_router(state);

    let listener = settings
        .bind()
        .await
        .with_context(|| format!("Failed to bind to {}:{}", settings.host, settings.port))?;
    let addr = listener.local_addr().context("Failed to read bound address")?;
    info!("wordfreq-lookup listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
