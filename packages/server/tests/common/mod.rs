//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use bilingo_server::{
    domain::TranslationProvider,
    infrastructure::{
        dto::websocket::{ClientEvent, ServerEvent},
        message_pusher::WebSocketMessagePusher,
        repository::InMemoryRosterRepository,
    },
    ui::Server,
    usecase::{HubDispatcher, TranslateTextUseCase},
};
use bilingo_shared::time::SystemClock;
use futures_util::{SinkExt, StreamExt};
use tokio::{net::TcpStream, task::JoinHandle};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// In-process server bound to an ephemeral port
pub struct TestServer {
    addr: SocketAddr,
    serve_task: JoinHandle<()>,
    dispatcher_task: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with the given translation providers
    pub async fn start(providers: Vec<Arc<dyn TranslationProvider>>) -> Self {
        let repository = Arc::new(InMemoryRosterRepository::default());
        let message_pusher = Arc::new(WebSocketMessagePusher::default());
        let (hub, dispatcher_task) =
            HubDispatcher::new(repository, message_pusher, Arc::new(SystemClock)).spawn();
        let server = Server::new(hub, Arc::new(TranslateTextUseCase::new(providers)));
        let app = server.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().unwrap();
        let serve_task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            addr,
            serve_task,
            dispatcher_task,
        }
    }

    /// Get the WebSocket URL for this server
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Get the URL of an HTTP endpoint on this server
    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.serve_task.abort();
        self.dispatcher_task.abort();
    }
}

pub async fn connect(server: &TestServer) -> WsClient {
    let (ws, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect to test server");
    ws
}

pub async fn send(ws: &mut WsClient, event: &ClientEvent) {
    let frame = serde_json::to_string(event).unwrap();
    ws.send(Message::Text(frame.into())).await.unwrap();
}

/// Wait for the next server event, failing the test after a few seconds
pub async fn next_event(ws: &mut WsClient) -> ServerEvent {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(3), ws.next())
            .await
            .expect("timed out waiting for a server event")
            .expect("connection closed")
            .expect("websocket error");
        if let Message::Text(text) = frame {
            return serde_json::from_str(&text).expect("frame should be a ServerEvent");
        }
    }
}

/// Skip events until a userList equal to `expected` arrives
pub async fn wait_for_user_list(ws: &mut WsClient, expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|n| n.to_string()).collect();
    loop {
        if let ServerEvent::UserList(names) = next_event(ws).await {
            if names == expected {
                return;
            }
        }
    }
}
