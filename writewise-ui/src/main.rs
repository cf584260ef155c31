//! writewise-ui - Writing feedback web module
//!
//! Serves a single-page tool: paste text, get a composite grade, readability
//! statistics, a grammar verdict, and an AI rewrite suggestion. Grammar and
//! rewrite models live in a separate inference backend; when that backend is
//! unreachable the session runs in degraded mode with stand-in oracles.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use writewise_common::config::ServiceConfig;
use writewise_ui::{build_router, oracles::OracleSet, AppState};

/// WriteWise writing feedback service
#[derive(Debug, Parser)]
#[command(name = "writewise-ui", version)]
struct Cli {
    /// HTTP listen port
    #[arg(long)]
    port: Option<u16>,

    /// Base URL of the inference backend
    #[arg(long)]
    inference_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting WriteWise (writewise-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let config = ServiceConfig::resolve(cli.port, cli.inference_url.as_deref())?;
    info!("Inference backend: {}", config.inference_url);

    // One-time oracle selection; reused for the lifetime of the session
    let oracles = OracleSet::connect(&config.inference_url).await;
    if oracles.degraded {
        warn!("⚠ AI models offline - running in reduced functionality mode");
    } else {
        info!("✓ AI models online");
    }

    let state = AppState::new(oracles);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("writewise-ui listening on http://127.0.0.1:{}", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
