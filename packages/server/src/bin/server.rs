//! Bilingo chat server.
//!
//! Hosts the chat hub on `/ws` and the translation endpoint on `/api/translate`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin bilingo-server
//! cargo run --bin bilingo-server -- --host 0.0.0.0 --port 3000
//! PORT=8080 cargo run --bin bilingo-server
//! ```

use std::{collections::HashMap, sync::Arc, time::Duration};

use bilingo_server::{
    domain::{LanguageCode, Roster, TranslationProvider},
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::InMemoryRosterRepository,
        translation::{
            DEFAULT_PROVIDER_TIMEOUT, GoogleTranslateProvider, MyMemoryProvider, google, mymemory,
        },
    },
    ui::Server,
    usecase::{HubDispatcher, TranslateTextUseCase},
};
use bilingo_shared::{logger::setup_logger, time::SystemClock};
use clap::Parser;
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "bilingo-server")]
#[command(about = "Chat server with Chinese / English translation", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Timeout for a single translation provider call, in milliseconds (at least 1)
    #[arg(
        long,
        env = "BILINGO_PROVIDER_TIMEOUT_MS",
        default_value_t = DEFAULT_PROVIDER_TIMEOUT.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    provider_timeout_ms: u64,

    /// Base URL of the MyMemory API
    #[arg(long, env = "BILINGO_MYMEMORY_URL", default_value = mymemory::DEFAULT_BASE_URL)]
    mymemory_url: String,

    /// Base URL of the Google Translate gtx endpoint
    #[arg(long, env = "BILINGO_GOOGLE_URL", default_value = google::DEFAULT_BASE_URL)]
    google_url: String,

    /// Source language sent to MyMemory when the request asks for auto detection
    #[arg(long, env = "BILINGO_DEFAULT_SOURCE", default_value = "en")]
    default_source: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository / MessagePusher / Clock
    // 2. Hub dispatcher
    // 3. Translation providers and pipeline
    // 4. Server

    // 1. Create Repository (in-memory roster) and MessagePusher (WebSocket implementation)
    let roster = Arc::new(Mutex::new(Roster::new()));
    let repository = Arc::new(InMemoryRosterRepository::new(roster));
    let message_pusher_clients = Arc::new(Mutex::new(HashMap::new()));
    let message_pusher = Arc::new(WebSocketMessagePusher::new(message_pusher_clients));
    let clock = Arc::new(SystemClock);

    // 2. Start the hub dispatcher
    let (hub, _dispatcher_task) = HubDispatcher::new(repository, message_pusher, clock).spawn();

    // 3. Create translation providers (tried in order)
    let timeout = Duration::from_millis(args.provider_timeout_ms);
    let default_source = match LanguageCode::new(args.default_source.clone()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Invalid --default-source '{}': {}", args.default_source, e);
            std::process::exit(1);
        }
    };
    let providers = match build_providers(&args, timeout, default_source) {
        Ok(providers) => providers,
        Err(e) => {
            tracing::error!("Failed to create translation providers: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Translation providers: {} (timeout {:?} each)",
        providers
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(" -> "),
        timeout
    );
    let translate_text_usecase = Arc::new(TranslateTextUseCase::new(providers));

    // 4. Create and run the server
    let server = Server::new(hub, translate_text_usecase);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn build_providers(
    args: &Args,
    timeout: Duration,
    default_source: LanguageCode,
) -> Result<Vec<Arc<dyn TranslationProvider>>, reqwest::Error> {
    Ok(vec![
        Arc::new(MyMemoryProvider::new(
            args.mymemory_url.clone(),
            timeout,
            default_source,
        )?),
        Arc::new(GoogleTranslateProvider::new(args.google_url.clone(), timeout)?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        // テスト項目: 引数を省略した場合のデフォルト値
        // given (前提条件):
        let argv = ["bilingo-server"];

        // when (操作):
        let args = Args::try_parse_from(argv).unwrap();

        // then (期待する結果):
        assert_eq!(args.provider_timeout_ms, 5000);
        assert_eq!(args.default_source, "en");
    }

    #[test]
    fn test_args_reject_zero_provider_timeout() {
        // テスト項目: タイムアウト 0 は起動時に拒否される
        // given (前提条件):
        let argv = ["bilingo-server", "--provider-timeout-ms", "0"];

        // when (操作):
        let result = Args::try_parse_from(argv);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_args_accept_positive_provider_timeout() {
        // テスト項目: 1 以上のタイムアウトは受け付ける
        let args = Args::try_parse_from(["bilingo-server", "--provider-timeout-ms", "1"]).unwrap();

        assert_eq!(args.provider_timeout_ms, 1);
    }
}
