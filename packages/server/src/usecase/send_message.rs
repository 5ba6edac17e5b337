//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 送信者を含む全ての接続にメッセージが届くことを保証（送信者は自分の
//!   メッセージを発言者名で見分けるため、自分宛ての配信を抑止しない）
//! - タイムスタンプがクライアントではなく Hub の時計で付与されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：join 済みの接続からの送信
//! - エッジケース：join 前の接続からの送信（anonymous として配信）

use std::sync::Arc;

use bilingo_shared::time::Clock;

use crate::domain::{
    ANONYMOUS_LABEL, ChatMessage, ConnectionId, HubEvent, MessagePushError, MessagePusher,
    RosterRepository, Timestamp,
};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    repository: Arc<dyn RosterRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(
        repository: Arc<dyn RosterRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// 内容の再検証は行わない（空文字列の拒否は送信側の責務）。
    ///
    /// # Returns
    ///
    /// ブロードキャストした `ChatMessage`
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        text: String,
    ) -> Result<ChatMessage, MessagePushError> {
        let author = match self.repository.find_name(&connection_id).await {
            Some(name) => name.into_string(),
            None => {
                tracing::debug!(
                    "Connection '{}' sent a message before joining",
                    connection_id
                );
                ANONYMOUS_LABEL.to_string()
            }
        };

        let message = ChatMessage::new(
            author,
            text,
            Timestamp::new(self.clock.now_millis()),
            connection_id,
        );
        tracing::info!("Message from '{}': {}", message.author, message.text);

        let targets = self.message_pusher.registered_clients().await;
        self.message_pusher
            .broadcast(targets, &HubEvent::Message(message.clone()))
            .await?;

        Ok(message)
    }
}
