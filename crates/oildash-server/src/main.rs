use anyhow::Context;
use clap::Parser;
use oildash_server::{app, config};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "oildash")]
#[command(about = "Vegetable oil sustainability dashboard")]
struct Cli {
    /// Optional YAML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to serve on (overrides the config file).
    #[arg(long)]
    listen: Option<SocketAddr>,

    /// Default the log filter to debug.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => config::ServerConfig::default(),
    };
    if let Some(listen) = cli.listen {
        cfg.listen = listen;
    }
    cfg.debug |= cli.debug;

    init_tracing(cfg.debug);

    let state = Arc::new(app::AppState::new());
    info!(varieties = state.dataset.len(), "loaded reference dataset");

    let router = app::router(state);
    let listener = tokio::net::TcpListener::bind(cfg.listen)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen))?;
    info!(addr = %cfg.listen, "serving dashboard");

    axum::serve(listener, router).await?;
    Ok(())
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
