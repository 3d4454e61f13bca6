//! RefRank site server
//!
//! ## Usage
//!
//! ```bash
//! refrank-web                          # Start on default port 3000
//! refrank-web --port 8080              # Custom port
//! refrank-web --host 0.0.0.0           # Listen on all interfaces
//! refrank-web --config refrank.yaml    # Load settings from YAML
//! refrank-web --routes                 # List routes and exit
//! ```

use anyhow::Context;
use clap::Parser;
use refrank_web::config::Overrides;
use refrank_web::{serve, AppState, WebConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "refrank-web")]
#[command(author, version, about = "RefRank project site", long_about = None)]
struct Cli {
    /// Host to bind to [default: 127.0.0.1]
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on [default: 3000]
    #[arg(short, long)]
    port: Option<u16>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "refrank_web=debug"
    #[arg(long)]
    log: Option<String>,

    /// Print the route table and exit
    #[arg(long)]
    routes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.routes {
        refrank_web::routes::print_routes();
        return Ok(());
    }

    let overrides = Overrides {
        host: cli.host,
        port: cli.port,
        log_filter: cli.log,
    };
    let config = WebConfig::load(cli.config.as_deref(), |key| std::env::var(key).ok(), overrides)
        .context("failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.bind_addr();
    tracing::info!(htmx = %config.htmx_src, "starting RefRank site");
    tracing::debug!(
        config = %serde_json::to_string(&config).unwrap_or_default(),
        "resolved configuration"
    );

    let state = Arc::new(AppState::new(config));
    serve(state, &addr)
        .await
        .with_context(|| format!("server on {addr} failed"))?;

    Ok(())
}
