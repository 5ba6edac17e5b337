//! InMemory Roster Repository 実装
//!
//! ドメイン層が定義する RosterRepository trait の具体的な実装。
//! `Roster` ドメインモデルをそのままストレージとして使用します。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, DisplayName, Roster, RosterRepository};

/// インメモリ Roster Repository 実装
pub struct InMemoryRosterRepository {
    roster: Arc<Mutex<Roster>>,
}

impl InMemoryRosterRepository {
    /// 新しい InMemoryRosterRepository を作成
    pub fn new(roster: Arc<Mutex<Roster>>) -> Self {
        Self { roster }
    }
}

impl Default for InMemoryRosterRepository {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(Roster::new())))
    }
}

#[async_trait]
impl RosterRepository for InMemoryRosterRepository {
    async fn get_roster(&self) -> Roster {
        self.roster.lock().await.clone()
    }

    async fn upsert_member(&self, connection_id: ConnectionId, name: DisplayName) {
        let mut roster = self.roster.lock().await;
        if roster.join(connection_id, name) {
            tracing::debug!("Connection '{}' renamed in roster", connection_id);
        }
    }

    async fn remove_member(&self, connection_id: &ConnectionId) -> Option<DisplayName> {
        self.roster.lock().await.leave(connection_id)
    }

    async fn find_name(&self, connection_id: &ConnectionId) -> Option<DisplayName> {
        self.roster.lock().await.name_of(connection_id).cloned()
    }

    async fn list_names(&self) -> Vec<DisplayName> {
        self.roster.lock().await.names()
    }
}
