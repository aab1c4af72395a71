use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use grandmaster::config::Config;
use grandmaster::server::{AppState, build_app};

#[derive(Parser)]
#[command(name = "grandmaster", version, about = "LLM chess move suggestion server")]
struct Cli {
    /// Path to the YAML config file. Missing file falls back to defaults.
    #[arg(long, default_value = "grandmaster.yaml")]
    config: PathBuf,

    /// Override the configured bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the configured bind port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grandmaster=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config).await.context("loading config")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let state = AppState { llm: config.llm };
    let app = build_app(state, config.server.request_timeout_seconds);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(
        "grandmaster v{} listening on {addr}",
        env!("CARGO_PKG_VERSION")
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
