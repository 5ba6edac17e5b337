//! Google Translate provider (public `gtx` endpoint).
//!
//! `GET {base}/translate_a/single?client=gtx&sl=<from>&tl=<to>&dt=t&q=<text>`
//!
//! Accepts `auto` as source. The response is a nested JSON array:
//! element `[0]` holds the translated segments (`[0][i][0]`), element `[2]`
//! the detected source language.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ProviderError, Translation, TranslationProvider, TranslationRequest};

use super::{build_http_client, classify_error, endpoint};

pub const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

pub struct GoogleTranslateProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.into(),
        })
    }
}

/// Extract the translation and detected language from a `gtx` response body
fn parse_response(body: &Value, fallback_language: &str) -> Result<Translation, ProviderError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::Malformed("missing translation segments".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();
    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(ProviderError::EmptyTranslation);
    }

    let detected_language = body
        .get(2)
        .and_then(Value::as_str)
        .filter(|lang| !lang.is_empty())
        .unwrap_or(fallback_language)
        .to_string();

    Ok(Translation {
        text,
        detected_language,
    })
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, ProviderError> {
        let response = self
            .client
            .get(endpoint(&self.base_url, "translate_a/single"))
            .query(&[
                ("client", "gtx"),
                ("sl", request.from.as_str()),
                ("tl", request.to.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ])
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: Value = response.json().await.map_err(classify_error)?;
        parse_response(&body, request.from.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
    use serde_json::json;

    use super::*;
    use crate::{domain::LanguageCode, infrastructure::translation::test_support::spawn_stub};

    fn request(text: &str, from: &str, to: &str) -> TranslationRequest {
        TranslationRequest::new(
            text.to_string(),
            LanguageCode::new(from.to_string()).unwrap(),
            LanguageCode::new(to.to_string()).unwrap(),
        )
    }

    #[test]
    fn test_parse_response_joins_segments() {
        // テスト項目: 複数のセグメントが連結され、検出言語が読み取られる
        // given (前提条件):
        let body = json!([
            [["你好，", "Hello, ", null, null, 10], ["世界", "world", null, null, 10]],
            null,
            "en"
        ]);

        // when (操作):
        let result = parse_response(&body, "auto");

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(Translation {
                text: "你好，世界".to_string(),
                detected_language: "en".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_response_falls_back_to_request_language() {
        // テスト項目: 検出言語が無い場合はリクエストの元言語を使う
        let body = json!([[["hello", "你好", null, null, 1]], null, null]);

        let result = parse_response(&body, "zh").unwrap();

        assert_eq!(result.detected_language, "zh");
    }

    #[test]
    fn test_parse_response_rejects_unexpected_shape() {
        // テスト項目: 想定外の形のレスポンスは Malformed / EmptyTranslation になる
        assert!(matches!(
            parse_response(&json!({"error": "nope"}), "auto"),
            Err(ProviderError::Malformed(_))
        ));
        assert_eq!(
            parse_response(&json!([[], null, "en"]), "auto"),
            Err(ProviderError::EmptyTranslation)
        );
    }

    #[tokio::test]
    async fn test_translate_passes_auto_source_through() {
        // テスト項目: 元言語 auto はそのまま sl パラメータとして送られる
        // given (前提条件):
        let router = Router::new().route(
            "/translate_a/single",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let sl = params.get("sl").cloned().unwrap_or_default();
                let tl = params.get("tl").cloned().unwrap_or_default();
                let q = params.get("q").cloned().unwrap_or_default();
                Json(json!([[[format!("{}>{}:{}", sl, tl, q), q, null, null, 1]], null, "en"]))
            }),
        );
        let provider =
            GoogleTranslateProvider::new(spawn_stub(router).await, Duration::from_secs(2)).unwrap();

        // when (操作):
        let result = provider.translate(&request("good morning", "auto", "zh")).await;

        // then (期待する結果):
        let translation = result.unwrap();
        assert_eq!(translation.text, "auto>zh:good morning");
        assert_eq!(translation.detected_language, "en");
    }

    #[tokio::test]
    async fn test_translate_http_error_is_failure() {
        // テスト項目: 非 2xx のレスポンスは Status エラーになる
        // given (前提条件):
        let router = Router::new().route(
            "/translate_a/single",
            get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let provider =
            GoogleTranslateProvider::new(spawn_stub(router).await, Duration::from_secs(2)).unwrap();

        // when (操作):
        let result = provider.translate(&request("hello", "en", "zh")).await;

        // then (期待する結果):
        assert_eq!(result, Err(ProviderError::Status(429)));
    }

    #[tokio::test]
    async fn test_translate_unreachable_host_is_failure() {
        // テスト項目: 接続できないホストへのリクエストは Request エラーになる（panic しない）
        // given (前提条件): 一度 bind して閉じたポート
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let provider =
            GoogleTranslateProvider::new(format!("http://{}", addr), Duration::from_secs(2))
                .unwrap();

        // when (操作):
        let result = provider.translate(&request("hello", "en", "zh")).await;

        // then (期待する結果):
        assert!(matches!(result, Err(ProviderError::Request(_))));
    }
}
