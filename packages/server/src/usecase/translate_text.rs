//! UseCase: 翻訳（Provider のフォールバックチェーン）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - TranslateTextUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 先頭の Provider が成功したら後続の Provider を呼ばないことを保証
//! - Provider の失敗が呼び出し側に伝播せず、次の Provider に切り替わることを保証
//! - 全ての Provider が失敗しても panic せず、構造化されたエラーを返すことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：Provider A が成功
//! - 異常系：Provider A が失敗し B が成功、両方失敗
//! - エッジケース：同じ入力の連続呼び出し（キャッシュしない）

use std::sync::Arc;

use crate::domain::{Translation, TranslationProvider, TranslationRequest};

use super::error::TranslateError;

/// 翻訳のユースケース
///
/// Provider を先頭から順に試し、最初の成功を返す。同じ Provider の再試行はしない。
pub struct TranslateTextUseCase {
    providers: Vec<Arc<dyn TranslationProvider>>,
}

impl TranslateTextUseCase {
    pub fn new(providers: Vec<Arc<dyn TranslationProvider>>) -> Self {
        Self { providers }
    }

    pub async fn execute(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslateError> {
        for provider in &self.providers {
            match provider.translate(request).await {
                Ok(translation) => {
                    tracing::debug!(
                        "Translated {}→{} with '{}'",
                        request.from,
                        request.to,
                        provider.name()
                    );
                    return Ok(translation);
                }
                Err(e) => {
                    tracing::warn!("Translation provider '{}' failed: {}", provider.name(), e);
                }
            }
        }

        tracing::error!(
            "All {} translation providers failed for {}→{}",
            self.providers.len(),
            request.from,
            request.to
        );
        Err(TranslateError::ServiceUnavailable)
    }
}
