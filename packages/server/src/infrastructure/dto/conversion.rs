//! Conversion logic between DTOs and domain entities.

use crate::domain::{ChatMessage, HubEvent, Notice, Translation, TypingSignal};
use crate::infrastructure::dto::{http as http_dto, websocket as dto};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&ChatMessage> for dto::ChatMessageDto {
    fn from(model: &ChatMessage) -> Self {
        Self {
            username: model.author.clone(),
            message: model.text.clone(),
            timestamp: model.timestamp.to_iso8601(),
            connection_id: model.connection_id.to_string(),
        }
    }
}

impl From<&Notice> for dto::NoticeDto {
    fn from(model: &Notice) -> Self {
        Self {
            username: model.username.as_str().to_string(),
            message: model.message(),
            timestamp: model.timestamp.to_iso8601(),
        }
    }
}

impl From<&TypingSignal> for dto::TypingDto {
    fn from(model: &TypingSignal) -> Self {
        Self {
            username: model.username.clone(),
            is_typing: model.is_typing,
        }
    }
}

impl From<&HubEvent> for dto::ServerEvent {
    fn from(event: &HubEvent) -> Self {
        match event {
            HubEvent::Message(message) => Self::Message(message.into()),
            HubEvent::UserJoined(notice) => Self::UserJoined(notice.into()),
            HubEvent::UserLeft(notice) => Self::UserLeft(notice.into()),
            HubEvent::UserList(names) => Self::UserList(
                names
                    .iter()
                    .map(|name| name.as_str().to_string())
                    .collect(),
            ),
            HubEvent::Typing(signal) => Self::Typing(signal.into()),
        }
    }
}

impl From<Translation> for http_dto::TranslateResponseDto {
    fn from(model: Translation) -> Self {
        Self {
            translated_text: model.text,
            detected_language: model.detected_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, DisplayName, Timestamp};

    fn name(value: &str) -> DisplayName {
        DisplayName::new(value.to_string()).unwrap()
    }

    #[test]
    fn test_chat_message_to_dto() {
        // テスト項目: ChatMessage がタイムスタンプ・接続 ID 付きの DTO に変換される
        // given (前提条件):
        let connection_id = ConnectionId::generate();
        let model = ChatMessage::new(
            "Alice".to_string(),
            "Hello there".to_string(),
            Timestamp::new(1672531200000),
            connection_id,
        );

        // when (操作):
        let event: dto::ServerEvent = (&HubEvent::Message(model)).into();

        // then (期待する結果):
        assert_eq!(
            event,
            dto::ServerEvent::Message(dto::ChatMessageDto {
                username: "Alice".to_string(),
                message: "Hello there".to_string(),
                timestamp: "2023-01-01T00:00:00.000Z".to_string(),
                connection_id: connection_id.to_string(),
            })
        );
    }

    #[test]
    fn test_notices_to_dto() {
        // テスト項目: 入室・退室の通知が通知文付きの DTO に変換される
        // given (前提条件):
        let timestamp = Timestamp::new(1672531200000);
        let joined = HubEvent::UserJoined(Notice::joined(name("Alice"), timestamp));
        let left = HubEvent::UserLeft(Notice::left(name("Alice"), timestamp));

        // when (操作):
        let joined_dto: dto::ServerEvent = (&joined).into();
        let left_dto: dto::ServerEvent = (&left).into();

        // then (期待する結果):
        assert!(matches!(
            joined_dto,
            dto::ServerEvent::UserJoined(ref n) if n.message == "Alice joined the chat"
        ));
        assert!(matches!(
            left_dto,
            dto::ServerEvent::UserLeft(ref n) if n.message == "Alice left the chat"
        ));
    }

    #[test]
    fn test_user_list_keeps_order() {
        // テスト項目: userList は Roster の順序のまま変換される
        let event = HubEvent::UserList(vec![name("Bob"), name("Alice")]);

        let dto_event: dto::ServerEvent = (&event).into();

        assert_eq!(
            dto_event,
            dto::ServerEvent::UserList(vec!["Bob".to_string(), "Alice".to_string()])
        );
    }

    #[test]
    fn test_translation_to_response_dto() {
        // テスト項目: 翻訳結果がレスポンス DTO に変換される
        let model = Translation {
            text: "你好".to_string(),
            detected_language: "en".to_string(),
        };

        let response: http_dto::TranslateResponseDto = model.into();

        assert_eq!(response.translated_text, "你好");
        assert_eq!(response.detected_language, "en");
    }
}
