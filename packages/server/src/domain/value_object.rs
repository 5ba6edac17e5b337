//! Value Objects
//!
//! 生成時に不変条件を検証し、以降は常に正しい値であることを保証します。

use std::fmt;

use bilingo_shared::time::timestamp_to_iso8601;
use uuid::Uuid;

use super::error::ValueObjectError;

/// 接続 ID（トランスポート層が接続ごとに払い出す不透明な ID）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// 新しい接続 ID を生成（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 表示名
///
/// トリム後に空でない文字列。保持する値はトリム済み。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyDisplayName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix タイムスタンプ（ミリ秒、Hub が採番）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// ISO-8601 文字列（例: `2023-01-01T00:00:00.000Z`）
    pub fn to_iso8601(&self) -> String {
        timestamp_to_iso8601(self.0)
    }
}

/// 言語コード（`en`, `zh` など）、または自動検出を表す `auto`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub const AUTO: &'static str = "auto";

    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::EmptyLanguageCode);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn auto() -> Self {
        Self(Self::AUTO.to_string())
    }

    pub fn is_auto(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::AUTO)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_is_trimmed() {
        // テスト項目: 表示名は前後の空白が取り除かれて保持される
        // given (前提条件):
        let raw = "  Alice \n".to_string();

        // when (操作):
        let name = DisplayName::new(raw);

        // then (期待する結果):
        assert_eq!(name.unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_display_name_rejects_blank() {
        // テスト項目: 空白のみの表示名は拒否される
        assert_eq!(
            DisplayName::new("   ".to_string()),
            Err(ValueObjectError::EmptyDisplayName)
        );
        assert_eq!(
            DisplayName::new(String::new()),
            Err(ValueObjectError::EmptyDisplayName)
        );
    }

    #[test]
    fn test_connection_ids_are_unique() {
        // テスト項目: 生成される接続 ID は毎回異なる
        let id1 = ConnectionId::generate();
        let id2 = ConnectionId::generate();

        assert_ne!(id1, id2);
        assert_ne!(id1.to_string(), id2.to_string());
    }

    #[test]
    fn test_timestamp_to_iso8601() {
        // テスト項目: Timestamp が ISO-8601 文字列に変換される
        let timestamp = Timestamp::new(1672531200000);

        assert_eq!(timestamp.to_iso8601(), "2023-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_language_code_auto() {
        // テスト項目: `auto` は大文字小文字を区別せず自動検出として扱われる
        assert!(LanguageCode::auto().is_auto());
        assert!(LanguageCode::new("AUTO".to_string()).unwrap().is_auto());
        assert!(!LanguageCode::new("zh".to_string()).unwrap().is_auto());
    }

    #[test]
    fn test_language_code_rejects_blank() {
        // テスト項目: 空の言語コードは拒否される
        assert_eq!(
            LanguageCode::new(" ".to_string()),
            Err(ValueObjectError::EmptyLanguageCode)
        );
    }
}
