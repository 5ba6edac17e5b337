//! 翻訳の抽象
//!
//! 外部翻訳サービス（Provider）ごとの差異は `TranslationProvider` の実装に閉じ込め、
//! フォールバックチェーンは一様なインターフェースの上で組み立てる。

use async_trait::async_trait;

use super::{error::ProviderError, value_object::LanguageCode};

/// 翻訳リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
}

impl TranslationRequest {
    pub fn new(text: String, from: LanguageCode, to: LanguageCode) -> Self {
        Self { text, from, to }
    }
}

/// 翻訳結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// Provider が報告した元言語。報告がなければリクエストの `from`。
    pub detected_language: String,
}

/// 外部翻訳サービス 1 つ分
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// ログ用の名前
    fn name(&self) -> &'static str;

    /// 1 回だけ翻訳を試みる（リトライしない）
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, ProviderError>;
}
