//! MessagePusher trait 定義
//!
//! 接続中のクライアントへメッセージを届けるためのインターフェース。
//! 具体的な実装（WebSocket など）は Infrastructure 層が提供します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{entity::HubEvent, error::MessagePushError, value_object::ConnectionId};

/// クライアントへの送信チャンネル（エンコード済みのフレームを流す）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// メッセージ送信（通知）の抽象化
///
/// Roster に join していない接続も登録対象。ブロードキャストは
/// 「全ての接続」に対して行われるため、送信先の一覧はここで管理する。
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続の送信チャンネルを登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続の送信チャンネルを登録解除
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 登録中の全ての接続 ID
    async fn registered_clients(&self) -> Vec<ConnectionId>;

    /// 複数の接続に送信（一部の送信失敗は許容する）
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &HubEvent,
    ) -> Result<(), MessagePushError>;
}
