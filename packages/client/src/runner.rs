//! Client execution logic with reconnection support.

use std::{
    sync::{Arc, atomic::AtomicBool},
    time::Duration,
};

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

use super::{
    domain::{should_attempt_reconnect, validate_name},
    error::ClientError,
    session::{SessionContext, run_client_session},
    translator::TranslatorClient,
};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 5;

/// Client settings taken from the command line
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WebSocket URL of the chat hub
    pub url: String,
    /// Base URL of the HTTP API
    pub api_url: String,
    /// Display name
    pub name: String,
    /// Whether received messages are translated
    pub auto_translate: bool,
}

/// Run the chat client with reconnection logic
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let name = validate_name(&config.name)?;
    let context = SessionContext {
        url: config.url,
        name: name.clone(),
        auto_translate: Arc::new(AtomicBool::new(config.auto_translate)),
        translator: TranslatorClient::new(&config.api_url)?,
    };

    // Readline lives for the whole process so that input survives reconnects
    let mut input_rx = spawn_readline(name.clone());
    let mut reconnect_count = 0;

    loop {
        tracing::info!(
            "Attempting to connect to {} as '{}' (attempt {}/{})",
            context.url,
            name,
            reconnect_count + 1,
            MAX_RECONNECT_ATTEMPTS
        );

        match run_client_session(&context, &mut input_rx).await {
            Ok(()) => {
                tracing::info!("Client session ended normally");
                break;
            }
            Err(e) => {
                tracing::warn!("Connection lost: {}", e);
                reconnect_count += 1;

                if !should_attempt_reconnect(&e, reconnect_count, MAX_RECONNECT_ATTEMPTS) {
                    tracing::error!(
                        "Failed to reconnect after {} attempts. Exiting.",
                        MAX_RECONNECT_ATTEMPTS
                    );
                    return Err(e);
                }

                tracing::info!(
                    "Reconnecting in {} seconds... (attempt {}/{})",
                    RECONNECT_INTERVAL_SECS,
                    reconnect_count + 1,
                    MAX_RECONNECT_ATTEMPTS
                );

                tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
            }
        }
    }

    Ok(())
}

/// Spawn a blocking thread for rustyline (synchronous readline)
///
/// The returned channel closes when the user presses Ctrl+C or Ctrl+D.
fn spawn_readline(name: String) -> mpsc::UnboundedReceiver<String> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };

        let prompt = format!("{}> ", name);

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    input_rx
}
