//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を管理
//! - `HubEvent` をワイヤフォーマット（JSON）にエンコード
//! - クライアントへのメッセージ送信（broadcast）
//!
//! WebSocket の受付と sender の生成は UI 層（`ui/handler/websocket.rs`）で行い、
//! この実装は受け取った sender をメッセージ送信にのみ使用します。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, HubEvent, MessagePushError, MessagePusher, PusherChannel},
    infrastructure::dto::websocket::ServerEvent,
};

/// `HubEvent` を `{"event": ..., "data": ...}` 形式の JSON にエンコード
pub fn encode_event(event: &HubEvent) -> Result<String, MessagePushError> {
    serde_json::to_string(&ServerEvent::from(event))
        .map_err(|e| MessagePushError::EncodeFailed(e.to_string()))
}

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let clients = Arc::new(Mutex::new(HashMap::new()));
/// let pusher = WebSocketMessagePusher::new(clients.clone());
///
/// pusher.broadcast(vec![connection_id], &HubEvent::UserList(vec![])).await?;
/// ```
pub struct WebSocketMessagePusher {
    /// Key: 接続 ID, Value: その接続の WebSocket 送信チャンネル
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self { clients }
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(HashMap::new())))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(connection_id, sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id);
        tracing::debug!(
            "Connection '{}' unregistered from MessagePusher",
            connection_id
        );
    }

    async fn registered_clients(&self) -> Vec<ConnectionId> {
        let clients = self.clients.lock().await;
        clients.keys().copied().collect()
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &HubEvent,
    ) -> Result<(), MessagePushError> {
        let content = encode_event(event)?;
        let clients = self.clients.lock().await;

        for target in targets {
            match clients.get(&target) {
                // 到達できない接続への送信失敗はトランスポート層の問題として許容
                Some(sender) => {
                    if let Err(e) = sender.send(content.clone()) {
                        tracing::warn!("Failed to push message to connection '{}': {}", target, e);
                    } else {
                        tracing::debug!("Broadcasted '{}' to connection '{}'", event.name(), target);
                    }
                }
                None => {
                    tracing::warn!(
                        "Connection '{}' not found during broadcast, skipping",
                        target
                    );
                }
            }
        }

        Ok(())
    }
}
