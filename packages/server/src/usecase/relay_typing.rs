//! UseCase: 入力中状態のリレー
//!
//! Hub は入力中状態を保持しない。送信者以外の全ての接続に転送するだけ。

use std::sync::Arc;

use crate::domain::{
    ConnectionId, HubEvent, MessagePushError, MessagePusher, RosterRepository, TypingSignal,
};

/// 入力中状態リレーのユースケース
pub struct RelayTypingUseCase {
    repository: Arc<dyn RosterRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RelayTypingUseCase {
    pub fn new(
        repository: Arc<dyn RosterRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 入力中状態を送信者以外にリレー
    ///
    /// # Returns
    ///
    /// リレー先の接続 ID リスト
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        is_typing: bool,
    ) -> Result<Vec<ConnectionId>, MessagePushError> {
        let roster = self.repository.get_roster().await;
        let signal = TypingSignal {
            username: roster.author_of(&connection_id),
            is_typing,
        };

        let targets: Vec<ConnectionId> = self
            .message_pusher
            .registered_clients()
            .await
            .into_iter()
            .filter(|id| id != &connection_id)
            .collect();

        self.message_pusher
            .broadcast(targets.clone(), &HubEvent::Typing(signal))
            .await?;

        Ok(targets)
    }
}
