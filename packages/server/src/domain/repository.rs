//! Repository trait 定義
//!
//! Roster へのアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{
    entity::Roster,
    value_object::{ConnectionId, DisplayName},
};

/// Roster Repository trait
///
/// インメモリの単一インスタンスを前提とし、操作は失敗しない。
/// 書き込みは Hub のディスパッチャ上で実行されるユースケースからのみ行う。
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Roster のスナップショットを取得
    async fn get_roster(&self) -> Roster;

    /// 表示名を登録（同じ接続の既存エントリは上書き）
    async fn upsert_member(&self, connection_id: ConnectionId, name: DisplayName);

    /// エントリを削除し、削除した表示名を返す
    async fn remove_member(&self, connection_id: &ConnectionId) -> Option<DisplayName>;

    /// 接続の表示名を取得
    async fn find_name(&self, connection_id: &ConnectionId) -> Option<DisplayName>;

    /// 表示名の一覧（join 順）
    async fn list_names(&self) -> Vec<DisplayName>;
}
