//! ドメイン層
//!
//! チャットルームの在席状況（Roster）、チャットメッセージ、翻訳の抽象を定義します。
//! 永続化・通知・外部翻訳サービスへのアクセスは trait として定義し、
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

pub mod entity;
pub mod error;
pub mod pusher;
pub mod repository;
pub mod translation;
pub mod value_object;

pub use entity::{
    ANONYMOUS_LABEL, ChatMessage, HubEvent, Notice, NoticeKind, Roster, TypingSignal,
};
pub use error::{MessagePushError, ProviderError, ValueObjectError};
pub use pusher::{MessagePusher, PusherChannel};
pub use repository::RosterRepository;
pub use translation::{Translation, TranslationProvider, TranslationRequest};
pub use value_object::{ConnectionId, DisplayName, LanguageCode, Timestamp};
