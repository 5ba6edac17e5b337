//! UseCase: 参加者切断処理（leave）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - Roster から同期的に削除された後に userList がブロードキャストされることを保証
//! - join していない接続の切断が何もブロードキャストしないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：join 済みの参加者の切断
//! - エッジケース：最後の参加者の切断（通知対象なし）
//! - エッジケース：join 前の接続の切断（no-op）

use std::sync::Arc;

use bilingo_shared::time::Clock;

use crate::domain::{
    ConnectionId, DisplayName, HubEvent, MessagePushError, MessagePusher, Notice,
    RosterRepository, Timestamp,
};

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    repository: Arc<dyn RosterRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl DisconnectParticipantUseCase {
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

    /// 参加者切断を実行
    ///
    /// 1. 送信チャンネルを登録解除
    /// 2. Roster にエントリがあれば削除し、残りの接続に userLeft と userList をブロードキャスト
    ///
    /// # Returns
    ///
    /// * `Ok(Some(name))` - 退室した参加者の表示名
    /// * `Ok(None)` - join していない接続だった（何もブロードキャストしない）
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
    ) -> Result<Option<DisplayName>, MessagePushError> {
        self.message_pusher.unregister_client(&connection_id).await;

        let Some(name) = self.repository.remove_member(&connection_id).await else {
            tracing::debug!(
                "Connection '{}' closed without joining, nothing to announce",
                connection_id
            );
            return Ok(None);
        };
        tracing::info!("'{}' left (connection '{}')", name, connection_id);

        let timestamp = Timestamp::new(self.clock.now_millis());
        let targets = self.message_pusher.registered_clients().await;
        self.message_pusher
            .broadcast(
                targets.clone(),
                &HubEvent::UserLeft(Notice::left(name.clone(), timestamp)),
            )
            .await?;

        let names = self.repository.list_names().await;
        self.message_pusher
            .broadcast(targets, &HubEvent::UserList(names))
            .await?;

        Ok(Some(name))
    }
}
