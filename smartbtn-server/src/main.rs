//! Smart Buttons Server
//!
//! Serves the smart payment button page: each request's query string and
//! cookies are normalized into render parameters and rendered as HTML under
//! a per-response CSP nonce.

mod api;
mod config;
mod server;
mod shutdown;
mod state;

use clap::Parser;
use config::ConfigLoader;
use server::{build_router, run_server};
use shutdown::spawn_config_reload_handler;
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Smart payment button page server
#[derive(Parser, Debug)]
#[command(name = "smartbtn-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file with listen address, button defaults and locale table
    #[arg(short, long, default_value = "./smartbtn-config.toml")]
    config: PathBuf,

    /// Listen address, taking precedence over `[server] listen`
    #[arg(short, long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "smartbtn-server starting");

    // A bad locale table stops startup here rather than failing requests later.
    let config_loader = Arc::new(ConfigLoader::new(&args.config, args.listen));
    let loaded_config = config_loader.load().map_err(|e| {
        tracing::error!(error = %e, path = ?args.config, "Configuration rejected");
        e
    })?;
    let listen_addr = loaded_config.server.listen;

    let state = AppState::new(loaded_config.into_shared());
    let reload_stop = spawn_config_reload_handler(state.clone(), config_loader);

    let result = run_server(build_router(state), listen_addr).await;

    reload_stop.notify_one();
    tracing::info!("smartbtn-server stopped");

    result.map_err(Into::into)
}

/// Log to stdout, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
