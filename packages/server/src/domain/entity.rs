//! Entities
//!
//! - `Roster`: 接続 ID と表示名の対応表（オンライン中のユーザーの唯一の情報源）
//! - `ChatMessage`: Hub が採番したブロードキャスト用のメッセージ（保存しない）
//! - `Notice`: 入室・退室のシステム通知
//! - `TypingSignal`: 入力中状態のリレー（Hub は状態を保持しない）
//! - `HubEvent`: Hub が接続へ配信するイベント

use super::value_object::{ConnectionId, DisplayName, Timestamp};

/// Roster に存在しない接続の発言者名
pub const ANONYMOUS_LABEL: &str = "anonymous";

/// Roster の 1 エントリ
#[derive(Debug, Clone, PartialEq, Eq)]
struct RosterEntry {
    connection_id: ConnectionId,
    name: DisplayName,
}

/// 接続 ID → 表示名の対応表
///
/// 最初に join した順序を保持する。同じ接続が再度 join した場合は
/// その位置のまま名前だけを上書きする（1 接続につき名前は 1 つ）。
/// 異なる接続が同じ名前を持つことは許容する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// 表示名を登録する。既存エントリを上書きした場合は `true` を返す。
    pub fn join(&mut self, connection_id: ConnectionId, name: DisplayName) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.connection_id == connection_id)
        {
            Some(entry) => {
                entry.name = name;
                true
            }
            None => {
                self.entries.push(RosterEntry {
                    connection_id,
                    name,
                });
                false
            }
        }
    }

    /// エントリを削除し、削除した表示名を返す。存在しなければ `None`。
    pub fn leave(&mut self, connection_id: &ConnectionId) -> Option<DisplayName> {
        let index = self
            .entries
            .iter()
            .position(|entry| &entry.connection_id == connection_id)?;
        Some(self.entries.remove(index).name)
    }

    pub fn name_of(&self, connection_id: &ConnectionId) -> Option<&DisplayName> {
        self.entries
            .iter()
            .find(|entry| &entry.connection_id == connection_id)
            .map(|entry| &entry.name)
    }

    /// 発言者名を解決する。未 join の接続は `ANONYMOUS_LABEL`。
    pub fn author_of(&self, connection_id: &ConnectionId) -> String {
        self.name_of(connection_id)
            .map(|name| name.as_str().to_string())
            .unwrap_or_else(|| ANONYMOUS_LABEL.to_string())
    }

    /// 表示名の一覧（join 順）
    pub fn names(&self) -> Vec<DisplayName> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }
}

/// ブロードキャストされるチャットメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    pub timestamp: Timestamp,
    pub connection_id: ConnectionId,
}

impl ChatMessage {
    pub fn new(
        author: String,
        text: String,
        timestamp: Timestamp,
        connection_id: ConnectionId,
    ) -> Self {
        Self {
            author,
            text,
            timestamp,
            connection_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Joined,
    Left,
}

/// 入室・退室のシステム通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub username: DisplayName,
    pub timestamp: Timestamp,
}

impl Notice {
    pub fn joined(username: DisplayName, timestamp: Timestamp) -> Self {
        Self {
            kind: NoticeKind::Joined,
            username,
            timestamp,
        }
    }

    pub fn left(username: DisplayName, timestamp: Timestamp) -> Self {
        Self {
            kind: NoticeKind::Left,
            username,
            timestamp,
        }
    }

    /// 人が読むための通知文
    pub fn message(&self) -> String {
        match self.kind {
            NoticeKind::Joined => format!("{} joined the chat", self.username),
            NoticeKind::Left => format!("{} left the chat", self.username),
        }
    }
}

/// 入力中状態のリレー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSignal {
    pub username: String,
    pub is_typing: bool,
}

/// Hub が接続へ配信するイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubEvent {
    Message(ChatMessage),
    UserJoined(Notice),
    UserLeft(Notice),
    UserList(Vec<DisplayName>),
    Typing(TypingSignal),
}

impl HubEvent {
    /// ログ用のイベント名（ワイヤ上のイベント名と同じ）
    pub fn name(&self) -> &'static str {
        match self {
            HubEvent::Message(_) => "message",
            HubEvent::UserJoined(_) => "userJoined",
            HubEvent::UserLeft(_) => "userLeft",
            HubEvent::UserList(_) => "userList",
            HubEvent::Typing(_) => "typing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> DisplayName {
        DisplayName::new(value.to_string()).unwrap()
    }

    #[test]
    fn test_roster_keeps_join_order() {
        // テスト項目: Roster は join 順に表示名を返す
        // given (前提条件):
        let mut roster = Roster::new();
        let alice = ConnectionId::generate();
        let bob = ConnectionId::generate();

        // when (操作):
        roster.join(alice, name("Alice"));
        roster.join(bob, name("Bob"));

        // then (期待する結果):
        assert_eq!(roster.names(), vec![name("Alice"), name("Bob")]);
    }

    #[test]
    fn test_roster_rejoin_overwrites_in_place() {
        // テスト項目: 同じ接続の再 join は位置を保ったまま名前を上書きする
        // given (前提条件):
        let mut roster = Roster::new();
        let first = ConnectionId::generate();
        let second = ConnectionId::generate();
        roster.join(first, name("Alice"));
        roster.join(second, name("Bob"));

        // when (操作):
        let overwritten = roster.join(first, name("Alicia"));

        // then (期待する結果):
        assert!(overwritten);
        assert_eq!(roster.names(), vec![name("Alicia"), name("Bob")]);
    }

    #[test]
    fn test_roster_allows_duplicate_names_across_connections() {
        // テスト項目: 異なる接続が同じ表示名を持てる
        let mut roster = Roster::new();
        roster.join(ConnectionId::generate(), name("Alice"));
        roster.join(ConnectionId::generate(), name("Alice"));

        assert_eq!(roster.names(), vec![name("Alice"), name("Alice")]);
    }

    #[test]
    fn test_roster_leave() {
        // テスト項目: leave はエントリを削除し表示名を返す。未 join なら None
        // given (前提条件):
        let mut roster = Roster::new();
        let alice = ConnectionId::generate();
        roster.join(alice, name("Alice"));

        // when (操作):
        let removed = roster.leave(&alice);
        let removed_again = roster.leave(&alice);

        // then (期待する結果):
        assert_eq!(removed, Some(name("Alice")));
        assert_eq!(removed_again, None);
        assert!(roster.names().is_empty());
    }

    #[test]
    fn test_author_of_falls_back_to_anonymous() {
        // テスト項目: 未 join の接続の発言者名は anonymous になる
        let mut roster = Roster::new();
        let alice = ConnectionId::generate();
        roster.join(alice, name("Alice"));

        assert_eq!(roster.author_of(&alice), "Alice");
        assert_eq!(roster.author_of(&ConnectionId::generate()), ANONYMOUS_LABEL);
    }

    #[test]
    fn test_notice_message() {
        // テスト項目: 通知文に表示名が含まれる
        let timestamp = Timestamp::new(0);

        assert_eq!(
            Notice::joined(name("Alice"), timestamp).message(),
            "Alice joined the chat"
        );
        assert_eq!(
            Notice::left(name("Bob"), timestamp).message(),
            "Bob left the chat"
        );
    }
}
