//! Timer Stream Logging Demo
//!
//! A small web service built with Tokio and Axum that demonstrates a
//! structured logging pipeline alongside a timer event stream.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌───────────────────────────────────────────┐
//!                       │               TIMER STREAM                 │
//!                       │                                            │
//!     GET /timer_stream │  ┌─────────┐    ┌─────────┐   ┌────────┐  │
//!     ──────────────────┼─▶│  http   │───▶│  timer  │──▶│  rng   │  │
//!                       │  │ server  │    │ stream  │   │ source │  │
//!     chunked body      │  └─────────┘    └────┬────┘   └───┬────┘  │
//!     ◀─────────────────┼───────────────────── ┘            │       │
//!                       │                                   ▼       │
//!                       │  ┌─────────────────────────────────────┐  │
//!                       │  │           observability              │  │
//!                       │  │  console │ app.log │ app.json │      │  │
//!                       │  │          │ error.json (rotating)     │  │
//!                       │  └─────────────────────────────────────┘  │
//!                       └───────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use timer_stream::config::{loader, AppConfig};
use timer_stream::http::HttpServer;
use timer_stream::observability::logging;

#[derive(Parser, Debug)]
#[command(
    name = "timer-stream",
    about = "Structured-logging demo serving a timer event stream"
)]
struct Args {
    /// Path to a TOML config file; built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. "127.0.0.1:1111").
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    // Install the logging pipeline before anything else runs.
    logging::init(&config.logging)?;

    tracing::info!("timer-stream v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        log_directory = %config.logging.directory,
        ticks = config.timer.ticks,
        interval_ms = config.timer.interval_ms,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
