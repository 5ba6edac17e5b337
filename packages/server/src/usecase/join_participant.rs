//! UseCase: 参加者の入室（join）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinParticipantUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - userJoined と userList が入室した本人を含む全ての接続に届くことを保証
//! - userList が常に現在の Roster と一致することを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：1 人目、2 人目の入室
//! - エッジケース：同じ接続の再 join（上書き）、異なる接続の同名
//! - エッジケース：join 前の接続も userList を受け取る

use std::sync::Arc;

use bilingo_shared::time::Clock;

use crate::domain::{
    ConnectionId, DisplayName, HubEvent, MessagePushError, MessagePusher, Notice,
    RosterRepository, Timestamp,
};

/// 入室のユースケース
pub struct JoinParticipantUseCase {
    repository: Arc<dyn RosterRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl JoinParticipantUseCase {
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

    /// 入室を実行
    ///
    /// 1. Roster に表示名を登録（同じ接続なら上書き）
    /// 2. 全ての接続に userJoined をブロードキャスト
    /// 3. 全ての接続に userList をブロードキャスト
    ///
    /// # Returns
    ///
    /// ブロードキャストした userList（join 順）
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        name: DisplayName,
    ) -> Result<Vec<DisplayName>, MessagePushError> {
        self.repository
            .upsert_member(connection_id, name.clone())
            .await;
        tracing::info!("'{}' joined on connection '{}'", name, connection_id);

        let timestamp = Timestamp::new(self.clock.now_millis());
        let targets = self.message_pusher.registered_clients().await;
        self.message_pusher
            .broadcast(
                targets.clone(),
                &HubEvent::UserJoined(Notice::joined(name, timestamp)),
            )
            .await?;

        let names = self.repository.list_names().await;
        self.message_pusher
            .broadcast(targets, &HubEvent::UserList(names.clone()))
            .await?;

        Ok(names)
    }
}
