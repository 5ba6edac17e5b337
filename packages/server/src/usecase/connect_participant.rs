//! UseCase: 接続の登録
//!
//! WebSocket 接続が確立した時点で送信チャンネルを登録する。
//! Roster には触れない（表示名は join で登録される）。
//! join 前の接続もブロードキャストの対象になる。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel};

/// 接続登録のユースケース
pub struct ConnectParticipantUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectParticipantUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    pub async fn execute(&self, connection_id: ConnectionId, sender: PusherChannel) {
        self.message_pusher
            .register_client(connection_id, sender)
            .await;
        tracing::info!("Connection '{}' registered", connection_id);
    }
}
