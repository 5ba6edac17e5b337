//! Server state shared by the handlers.

use std::sync::Arc;

use crate::usecase::{HubHandle, TranslateTextUseCase};

/// Shared application state
pub struct AppState {
    /// Hub のディスパッチャへの送信口
    pub hub: HubHandle,
    /// TranslateTextUseCase（翻訳のユースケース）
    pub translate_text_usecase: Arc<TranslateTextUseCase>,
}
