//! matchctl - one-shot command line client for matchd's TCP protocol.
//!
//! Connects, writes a single BUY/SELL/CANCEL line, and prints whatever
//! the engine's log stream happens to produce on stdout in the time
//! before the connection is dropped. The protocol is fire-and-forget:
//! matchctl does not read anything back over its own connection, since
//! the engine never echoes log records to the connection that caused
//! them (see matchd's transport module).

use clap::{Parser, Subcommand};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

#[derive(Parser)]
#[command(name = "matchctl", about = "Command line client for matchd")]
struct Cli {
    /// Address matchd is listening on.
    #[arg(short, long, default_value = "127.0.0.1:7000")]
    server: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a new buy order.
    Buy {
        #[arg(short, long)]
        order_id: u32,
        #[arg(short, long)]
        instrument: String,
        #[arg(short, long)]
        price: u32,
        #[arg(short, long)]
        count: u32,
    },
    /// Submit a new sell order.
    Sell {
        #[arg(short, long)]
        order_id: u32,
        #[arg(short, long)]
        instrument: String,
        #[arg(short, long)]
        price: u32,
        #[arg(short, long)]
        count: u32,
    },
    /// Cancel a resting order by id.
    Cancel {
        #[arg(short, long)]
        order_id: u32,
    },
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let line = match cli.command {
        Commands::Buy { order_id, instrument, price, count } => {
            format!("BUY {order_id} {instrument} {price} {count}")
        }
        Commands::Sell { order_id, instrument, price, count } => {
            format!("SELL {order_id} {instrument} {price} {count}")
        }
        Commands::Cancel { order_id } => format!("CANCEL {order_id}"),
    };

    let mut stream = TcpStream::connect(&cli.server).await?;
    stream.write_all(line.as_bytes()).await?;
    stream.write_all(b"\n").await?;
    stream.shutdown().await?;

    println!("sent: {line}");
    Ok(())
}
