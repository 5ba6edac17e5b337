//! WebSocket client session management.

use std::{
    fmt::Display,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use bilingo_server::infrastructure::dto::websocket::{
    ChatMessageDto, ClientEvent, MessagePayload, ServerEvent, TypingPayload,
};
use futures_util::{
    sink::{Sink, SinkExt},
    stream::StreamExt,
};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use super::{
    domain::{
        Input, TypingUsers, is_own_message, is_useful_translation, parse_input, translation_pair,
    },
    error::ClientError,
    formatter::MessageFormatter,
    translator::TranslatorClient,
    ui::redisplay_prompt,
};

/// State that outlives a single connection
pub struct SessionContext {
    pub url: String,
    pub name: String,
    pub auto_translate: Arc<AtomicBool>,
    pub translator: TranslatorClient,
}

/// Run one WebSocket client session
///
/// Returns `Ok(())` when the user quits, and an error when the connection is lost.
pub async fn run_client_session(
    context: &SessionContext,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(context.url.as_str())
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chat server!");
    println!(
        "\nYou are '{}'. Type messages and press Enter to send. \
         /translate toggles auto-translation, /quit exits.\n",
        context.name
    );

    let (mut write, mut read) = ws_stream.split();
    send_event(&mut write, &ClientEvent::Join(context.name.clone())).await?;

    let name_for_read = context.name.clone();
    let auto_translate = context.auto_translate.clone();
    let translator = context.translator.clone();

    // Spawn a task to handle incoming events
    let mut read_task = tokio::spawn(async move {
        let mut typing = TypingUsers::new();

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    match serde_json::from_str::<ServerEvent>(&text) {
                        Ok(event) => render_event(
                            event,
                            &name_for_read,
                            &mut typing,
                            &auto_translate,
                            &translator,
                        ),
                        Err(e) => {
                            tracing::debug!("Unrecognised frame: {}", e);
                            print!("{}", MessageFormatter::format_raw_message(&text));
                        }
                    }
                    redisplay_prompt(&name_for_read);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    });

    loop {
        tokio::select! {
            _ = &mut read_task => {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
            line = input_rx.recv() => {
                let Some(line) = line else {
                    // readline stopped (Ctrl+C / Ctrl+D)
                    read_task.abort();
                    let _ = write.close().await;
                    return Ok(());
                };

                match parse_input(&line) {
                    Input::Empty => {}
                    Input::Quit => {
                        read_task.abort();
                        let _ = write.close().await;
                        return Ok(());
                    }
                    Input::ToggleTranslate => {
                        let enabled = !context.auto_translate.fetch_xor(true, Ordering::SeqCst);
                        print!("{}", MessageFormatter::format_translate_status(enabled));
                        redisplay_prompt(&context.name);
                    }
                    Input::Message(message) => {
                        send_event(&mut write, &ClientEvent::Message(MessagePayload { message }))
                            .await?;
                        send_event(
                            &mut write,
                            &ClientEvent::Typing(TypingPayload { is_typing: false }),
                        )
                        .await?;
                    }
                }
            }
        }
    }
}

async fn send_event<W>(write: &mut W, event: &ClientEvent) -> Result<(), ClientError>
where
    W: Sink<Message> + Unpin,
    W::Error: Display,
{
    let json = serde_json::to_string(event)
        .map_err(|e| ClientError::ConnectionError(format!("Failed to encode event: {}", e)))?;
    write.send(Message::Text(json.into())).await.map_err(|e| {
        tracing::warn!("Failed to send event: {}", e);
        ClientError::ConnectionError(e.to_string())
    })
}

fn render_event(
    event: ServerEvent,
    local_name: &str,
    typing: &mut TypingUsers,
    auto_translate: &AtomicBool,
    translator: &TranslatorClient,
) {
    match event {
        ServerEvent::Message(message) => {
            typing.update(&message.username, false);
            print!(
                "{}",
                MessageFormatter::format_chat_message(
                    &message.username,
                    &message.message,
                    &message.timestamp,
                    is_own_message(&message.username, local_name),
                )
            );
            if auto_translate.load(Ordering::SeqCst) {
                spawn_translation(message, local_name.to_string(), translator.clone());
            }
        }
        ServerEvent::UserJoined(notice) | ServerEvent::UserLeft(notice) => {
            print!(
                "{}",
                MessageFormatter::format_notice(&notice.message, &notice.timestamp)
            );
        }
        ServerEvent::UserList(names) => {
            typing.retain_present(&names);
            print!("{}", MessageFormatter::format_user_list(&names, local_name));
        }
        ServerEvent::Typing(signal) => {
            typing.update(&signal.username, signal.is_typing);
            if let Some(indicator) = typing.indicator() {
                print!("{}", MessageFormatter::format_typing(&indicator));
            }
        }
    }
}

/// Translate a received message in the background and print it when useful
fn spawn_translation(message: ChatMessageDto, local_name: String, translator: TranslatorClient) {
    let Some((from, to)) = translation_pair(&message.message) else {
        tracing::debug!("Skipping translation, language not detected");
        return;
    };

    tokio::spawn(async move {
        match translator.translate(&message.message, from, to).await {
            Ok(response) if is_useful_translation(&message.message, &response.translated_text) => {
                let formatted = MessageFormatter::format_translation(
                    &message.username,
                    &response.translated_text,
                );
                print!("{}", formatted);
                redisplay_prompt(&local_name);
            }
            Ok(_) => tracing::debug!("Translation identical to original, not shown"),
            Err(e) => tracing::debug!("{}", e),
        }
    });
}
