//! TCP front door: one task per connection, each reading newline-delimited
//! commands and handing them to the shared `Engine`.
//!
//! The protocol is fire-and-forget. A connection's commands feed the
//! engine, and the engine's resulting log records go only to the
//! process-wide `OutputSink` — never echoed back down the connection that
//! caused them. A client that wants to observe order state reads the
//! engine's log stream (e.g. stdout), not its own socket.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::codec::parse_command;
use crate::engine::Engine;

/// Binds `addr` and serves connections until the process is killed.
pub async fn run_server(addr: std::net::SocketAddr, engine: Arc<Engine>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    loop {
        let (socket, peer) = listener.accept().await?;
        let engine = engine.clone();
        tokio::spawn(async move {
            tracing::debug!(%peer, "connection opened");
            handle_connection(socket, engine).await;
            tracing::debug!(%peer, "connection closed");
        });
    }
}

/// Drains one connection's command stream. A malformed line or I/O error
/// ends this connection only; every other connection and the engine's
/// state are unaffected.
async fn handle_connection(socket: TcpStream, engine: Arc<Engine>) {
    let mut lines = BufReader::new(socket).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => return,
            Err(err) => {
                tracing::warn!(%err, "connection read error");
                return;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(cmd) => engine.dispatch(cmd).await,
            Err(err) => {
                tracing::warn!(%err, "dropping malformed command");
                return;
            }
        }
    }
}
