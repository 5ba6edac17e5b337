//! Bilingo chat client with reconnection support.
//!
//! Joins the chat with a display name and sends messages from stdin.
//! Received messages in Chinese or English are annotated with a translation.
//! Automatically reconnects on disconnection (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin bilingo-client -- --name Alice
//! cargo run --bin bilingo-client -- -n 小明 --no-translate
//! ```

use bilingo_client::{ClientConfig, run_client};
use bilingo_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bilingo-client")]
#[command(about = "Chat client with automatic Chinese / English translation", long_about = None)]
struct Args {
    /// Display name shown to other participants
    #[arg(short = 'n', long)]
    name: String,

    /// WebSocket URL of the chat server
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:3000/ws")]
    url: String,

    /// Base URL of the server's HTTP API
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    api_url: String,

    /// Start with auto-translation turned off (toggle with /translate)
    #[arg(long)]
    no_translate: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let config = ClientConfig {
        url: args.url,
        api_url: args.api_url,
        name: args.name,
        auto_translate: !args.no_translate,
    };

    if let Err(e) = run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
