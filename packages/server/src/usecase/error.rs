//! UseCase 層のエラー型

use thiserror::Error;

/// 翻訳パイプラインのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// 全ての Provider が失敗した
    #[error("Translation service is temporarily unavailable")]
    ServiceUnavailable,
}

/// Hub のディスパッチャが停止している
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Hub dispatcher is not running")]
pub struct HubUnavailableError;
