//! matchd - TCP front end for the concurrent matching engine.
//!
//! Accepts BUY/SELL/CANCEL command connections and writes every resulting
//! log record (ADDED/EXECUTED/DELETED) to stdout, one line at a time.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use matchd::{Engine, WriterSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "matchd", version, about = "Concurrent multi-instrument matching engine")]
struct Cli {
    /// Address to accept command connections on.
    #[arg(long, default_value = "0.0.0.0:7000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let sink = Arc::new(WriterSink::new(std::io::stdout()));
    let engine = Arc::new(Engine::new(sink));

    info!(addr = %cli.listen, "matchd starting");
    matchd::run_server(cli.listen, engine).await
}
