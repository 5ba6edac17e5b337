//! Error types for the domain layer.

use thiserror::Error;

/// Value Object の生成に失敗した場合のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// 表示名が空（トリム後）
    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// 言語コードが空（トリム後）
    #[error("language code must not be empty")]
    EmptyLanguageCode,
}

/// メッセージ送信（通知）のエラー
///
/// 個々の接続への配送失敗はブロードキャスト内で記録して読み飛ばすため、ここには現れない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// イベントをワイヤフォーマットに変換できない
    #[error("Failed to encode event: {0}")]
    EncodeFailed(String),
}

/// 翻訳プロバイダ 1 回分の呼び出しの失敗理由
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("response contained no translation")]
    EmptyTranslation,
}
