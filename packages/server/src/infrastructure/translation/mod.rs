//! 外部翻訳サービスの実装
//!
//! - `mymemory`: MyMemory（言語ペアの明示が必要）
//! - `google`: Google 翻訳の公開エンドポイント（`auto` を受け付ける）
//!
//! どちらも reqwest クライアント単位のタイムアウトを持ち、失敗は
//! `ProviderError` として返す（panic しない）。

pub mod google;
pub mod mymemory;

use std::time::Duration;

use crate::domain::ProviderError;

pub use google::GoogleTranslateProvider;
pub use mymemory::MyMemoryProvider;

/// Provider 呼び出しのデフォルトのタイムアウト
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

/// タイムアウト付きの HTTP クライアントを生成
fn build_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("bilingo/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// reqwest のエラーを Provider のエラーに分類
fn classify_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout
    } else if let Some(status) = error.status() {
        ProviderError::Status(status.as_u16())
    } else if error.is_decode() {
        ProviderError::Malformed(error.to_string())
    } else {
        ProviderError::Request(error.to_string())
    }
}

/// エンドポイントの URL を組み立てる（base の末尾の `/` は無視）
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        // テスト項目: base URL の末尾のスラッシュの有無に関わらず同じ URL になる
        assert_eq!(endpoint("http://a.test/", "get"), "http://a.test/get");
        assert_eq!(endpoint("http://a.test", "get"), "http://a.test/get");
    }
}
