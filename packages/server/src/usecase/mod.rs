//! UseCase 層
//!
//! Hub の各操作（connect / join / message / typing / disconnect）と翻訳パイプライン。
//! Hub の操作は `HubDispatcher` が 1 つずつ順番に実行するため、
//! Roster の更新とブロードキャストは他の操作と交互に実行されることがない。

mod connect_participant;
mod disconnect_participant;
mod dispatcher;
mod error;
mod join_participant;
mod relay_typing;
mod send_message;
mod translate_text;

pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use dispatcher::{HubCommand, HubDispatcher, HubHandle};
pub use error::{HubUnavailableError, TranslateError};
pub use join_participant::JoinParticipantUseCase;
pub use relay_typing::RelayTypingUseCase;
pub use send_message::SendMessageUseCase;
pub use translate_text::TranslateTextUseCase;
