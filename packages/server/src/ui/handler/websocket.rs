//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, DisplayName},
    infrastructure::dto::websocket::{ClientEvent, MessagePayload, TypingPayload},
    ui::state::AppState,
    usecase::HubUnavailableError,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let connection_id = ConnectionId::generate();
    ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound flow: events fanned out by the hub (via rx channel)
/// are written to this client's WebSocket connection.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: ConnectionId) {
    let (tx, rx) = mpsc::unbounded_channel();
    if let Err(e) = state.hub.connect(connection_id, tx) {
        tracing::error!("Cannot accept connection '{}': {}", connection_id, e);
        return;
    }
    tracing::info!("Connection '{}' opened", connection_id);

    let (sender, mut receiver) = socket.split();
    let state_clone = state.clone();

    // Spawn a task to receive frames from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received frame from '{}': {}", connection_id, text);
                    let event = match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!(
                                "Ignoring unparseable frame from '{}': {}",
                                connection_id,
                                e
                            );
                            continue;
                        }
                    };
                    if handle_client_event(&state_clone, connection_id, event).is_err() {
                        tracing::error!("Hub dispatcher is gone, closing '{}'", connection_id);
                        break;
                    }
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to write hub events to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    if let Err(e) = state.hub.disconnect(connection_id) {
        tracing::warn!("Failed to report disconnect of '{}': {}", connection_id, e);
    }
    tracing::info!("Connection '{}' closed", connection_id);
}

/// Convert a client event into a hub command
fn handle_client_event(
    state: &AppState,
    connection_id: ConnectionId,
    event: ClientEvent,
) -> Result<(), HubUnavailableError> {
    match event {
        ClientEvent::Join(name) => match DisplayName::new(name) {
            Ok(name) => state.hub.join(connection_id, name),
            Err(e) => {
                tracing::warn!("Ignoring join from '{}': {}", connection_id, e);
                Ok(())
            }
        },
        ClientEvent::Message(MessagePayload { message }) => {
            state.hub.send_message(connection_id, message)
        }
        ClientEvent::Typing(TypingPayload { is_typing }) => {
            state.hub.set_typing(connection_id, is_typing)
        }
    }
}
