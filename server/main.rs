//! sobel-edge server
//!
//! Accepts an image upload and answers with its Sobel edge map.
//! Served by a synchronous tiny_http server.
//!
//! Run with:
//!   cargo run --bin server --release -- --config sobel.json
//! Then:
//!   curl -F img=@photo.jpg http://127.0.0.1:8080/filter -o edges.jpg
//!
//! Routes:
//!   POST /filter  multipart upload (field `img`), PNG or JPEG
//!   GET  /health  liveness probe

mod config;
mod routes;
mod handlers;
mod util;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::info;
use tiny_http::Server;

use config::ServerConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve Sobel edge detection over HTTP", long_about = None)]
struct Cli {
    /// JSON config file; defaults apply to anything it leaves out
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, overriding the config file
    #[arg(short, long)]
    addr: Option<String>,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = load_config(&cli)?;
    let server = Server::http(&config.addr)
        .map_err(|e| anyhow!("failed to bind {}: {e}", config.addr))?;

    info!(
        "listening on http://{} (field `{}`, {} workers per request, {:?} saturation)",
        config.addr,
        config.field_name,
        config.filter.worker_count(),
        config.filter.saturation
    );

    let config = Arc::new(config);

    // Each request is handled on its own thread; the filter inside spawns
    // its own scoped worker pool.
    for request in server.incoming_requests() {
        let config = Arc::clone(&config);
        std::thread::spawn(move || {
            routes::dispatch(request, &config);
        });
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ServerConfig> {
    let mut config = match &cli.config {
        Some(path) => ServerConfig::load_json(path)?,
        None => ServerConfig::default(),
    };
    if let Some(addr) = &cli.addr {
        config.addr = addr.clone();
    }
    Ok(config)
}
