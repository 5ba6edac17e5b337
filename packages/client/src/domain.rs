//! Domain logic for client-side operations.
//!
//! This module contains pure functions that implement business logic
//! without side effects, making them easy to test.

use bilingo_shared::language::{Language, detect_language};

use crate::error::ClientError;

/// A line typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `/quit`
    Quit,
    /// `/translate`
    ToggleTranslate,
    /// Anything else that is not blank
    Message(String),
    /// Blank line
    Empty,
}

/// Classify a line typed by the user.
pub fn parse_input(line: &str) -> Input {
    match line.trim() {
        "" => Input::Empty,
        "/quit" => Input::Quit,
        "/translate" => Input::ToggleTranslate,
        text => Input::Message(text.to_string()),
    }
}

/// Validate the display name before connecting.
///
/// # Returns
///
/// The trimmed name, or `ClientError::EmptyName` when nothing is left
pub fn validate_name(name: &str) -> Result<String, ClientError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ClientError::EmptyName);
    }
    Ok(name.to_string())
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `current_attempt` - The current reconnection attempt count (0-indexed)
/// * `max_attempts` - The maximum number of reconnection attempts allowed
///
/// # Returns
///
/// `true` if reconnection should be attempted, `false` otherwise
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    // A bad name will not get better by reconnecting
    if matches!(error, ClientError::EmptyName) {
        return false;
    }

    current_attempt < max_attempts
}

/// A message is ours when its author matches the local display name.
pub fn is_own_message(author: &str, local_name: &str) -> bool {
    author == local_name
}

/// Language pair to request for a received message, if any.
///
/// Returns `(from, to)` where `from` is the detected language and `to` its
/// counterpart. Text whose language cannot be told is not translated.
pub fn translation_pair(text: &str) -> Option<(Language, Language)> {
    let detected = detect_language(text);
    detected.counterpart().map(|target| (detected, target))
}

/// A translation is worth showing only when it is non-empty and differs from the original.
pub fn is_useful_translation(original: &str, translated: &str) -> bool {
    let translated = translated.trim();
    !translated.is_empty() && translated != original.trim()
}

/// Users currently typing, in the order they started.
#[derive(Debug, Default)]
pub struct TypingUsers {
    users: Vec<String>,
}

impl TypingUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, username: &str, is_typing: bool) {
        let position = self.users.iter().position(|u| u == username);
        match (is_typing, position) {
            (true, None) => self.users.push(username.to_string()),
            (false, Some(index)) => {
                self.users.remove(index);
            }
            _ => {}
        }
    }

    /// Remove users that are no longer in the roster
    pub fn retain_present(&mut self, roster: &[String]) {
        self.users.retain(|u| roster.contains(u));
    }

    /// Human-readable indicator, or `None` when nobody is typing
    pub fn indicator(&self) -> Option<String> {
        match self.users.as_slice() {
            [] => None,
            [only] => Some(format!("{} is typing...", only)),
            [first, second] => Some(format!("{} and {} are typing...", first, second)),
            [first, rest @ ..] => Some(format!(
                "{} and {} others are typing...",
                first,
                rest.len()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_commands() {
        // テスト項目: コマンドと通常のメッセージを区別する
        assert_eq!(parse_input("/quit"), Input::Quit);
        assert_eq!(parse_input("  /translate "), Input::ToggleTranslate);
        assert_eq!(parse_input("   "), Input::Empty);
        assert_eq!(
            parse_input("  你好 "),
            Input::Message("你好".to_string())
        );
    }

    #[test]
    fn test_validate_name_trims() {
        // テスト項目: 表示名は前後の空白を取り除いて受け付ける
        assert_eq!(validate_name("  Alice ").unwrap(), "Alice");
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        // テスト項目: 空白のみの表示名は接続前に拒否される
        assert!(matches!(validate_name("   "), Err(ClientError::EmptyName)));
    }

    #[test]
    fn test_should_attempt_reconnect_with_empty_name() {
        // テスト項目: EmptyName エラーの場合、再接続すべきではないと判定される
        // given (前提条件):
        let error = ClientError::EmptyName;

        // when (操作):
        let result = should_attempt_reconnect(&error, 0, 5);

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_should_attempt_reconnect_within_limit() {
        // テスト項目: 再接続回数が上限未満の場合、再接続すべきと判定される
        // given (前提条件):
        let error = ClientError::ConnectionError("network error".to_string());

        // when (操作):
        let result = should_attempt_reconnect(&error, 4, 5);

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_should_attempt_reconnect_at_limit() {
        // テスト項目: 再接続回数が上限に達した場合、再接続すべきではないと判定される
        // given (前提条件):
        let error = ClientError::ConnectionError("network error".to_string());

        // when (操作):
        let result = should_attempt_reconnect(&error, 5, 5);

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_is_own_message_compares_names() {
        // テスト項目: 自分のメッセージは表示名の一致で判定する
        assert!(is_own_message("Alice", "Alice"));
        assert!(!is_own_message("anonymous", "Alice"));
    }

    #[test]
    fn test_translation_pair() {
        // テスト項目: 検出した言語の反対側の言語に翻訳する
        assert_eq!(translation_pair("你好"), Some((Language::Zh, Language::En)));
        assert_eq!(
            translation_pair("hello world"),
            Some((Language::En, Language::Zh))
        );
        // 判別できないテキストは翻訳しない
        assert_eq!(translation_pair("ok"), None);
    }

    #[test]
    fn test_is_useful_translation() {
        // テスト項目: 空や原文と同じ翻訳は表示しない
        assert!(is_useful_translation("hello", "你好"));
        assert!(!is_useful_translation("hello", "  "));
        assert!(!is_useful_translation(" OK ", "OK"));
    }

    #[test]
    fn test_typing_indicator_text() {
        // テスト項目: 入力中の人数に応じて表示が変わる
        // given (前提条件):
        let mut typing = TypingUsers::new();
        assert_eq!(typing.indicator(), None);

        // when (操作) / then (期待する結果):
        typing.update("Alice", true);
        assert_eq!(typing.indicator().as_deref(), Some("Alice is typing..."));

        typing.update("Bob", true);
        assert_eq!(
            typing.indicator().as_deref(),
            Some("Alice and Bob are typing...")
        );

        typing.update("Carol", true);
        assert_eq!(
            typing.indicator().as_deref(),
            Some("Alice and 2 others are typing...")
        );

        typing.update("Alice", false);
        typing.update("Bob", false);
        assert_eq!(typing.indicator().as_deref(), Some("Carol is typing..."));
    }

    #[test]
    fn test_typing_users_ignore_repeats_and_departures() {
        // テスト項目: 同じユーザーの重複登録はせず、退室したユーザーは取り除く
        // given (前提条件):
        let mut typing = TypingUsers::new();
        typing.update("Alice", true);
        typing.update("Alice", true);
        typing.update("Bob", true);

        // when (操作):
        typing.retain_present(&["Bob".to_string()]);

        // then (期待する結果):
        assert_eq!(typing.indicator().as_deref(), Some("Bob is typing..."));
    }
}
