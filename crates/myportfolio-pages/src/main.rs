//! MyPortfolio Pages - HTTP server for public profile pages.
//!
//! Serves crawlable profile pages and the sitemap, designed to be placed
//! behind a CDN for edge caching.

use axum::http::Request;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use myportfolio_pages::{AppState, Config, router};

/// MyPortfolio Pages - server-rendered profile pages.
#[derive(Parser, Debug)]
#[command(name = "myportfolio-pages")]
#[command(about = "Server-rendered public profile pages for MyPortfolio", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();

    // Create application state; connects the record store
    let state = AppState::new(config)?;

    // Build router with middleware
    let app = router(state).layer(TraceLayer::new_for_http().make_span_with(
        |request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ));

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting pages server");

    axum::serve(listener, app).await?;

    Ok(())
}
