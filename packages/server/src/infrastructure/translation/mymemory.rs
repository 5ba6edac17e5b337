//! MyMemory translation provider.
//!
//! `GET {base}/get?q=<text>&langpair=<from>|<to>`
//!
//! MyMemory requires an explicit language pair, so an `auto` source is
//! replaced by a configured default source language. It does not report the
//! detected source language; the request's `from` is echoed instead.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{
    LanguageCode, ProviderError, Translation, TranslationProvider, TranslationRequest,
};

use super::{build_http_client, classify_error, endpoint};

pub const DEFAULT_BASE_URL: &str = "https://api.mymemory.translated.net";

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
    /// Either a number or a numeric string depending on the error path
    #[serde(rename = "responseStatus")]
    response_status: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// In-body status reported by MyMemory, when present
fn body_status(value: &serde_json::Value) -> Option<u16> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub struct MyMemoryProvider {
    client: reqwest::Client,
    base_url: String,
    default_source: LanguageCode,
}

impl MyMemoryProvider {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        default_source: LanguageCode,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.into(),
            default_source,
        })
    }

    /// `from|to`, with `auto` replaced by the default source language
    pub fn language_pair(&self, request: &TranslationRequest) -> String {
        let from = if request.from.is_auto() {
            &self.default_source
        } else {
            &request.from
        };
        format!("{}|{}", from, request.to)
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    fn name(&self) -> &'static str {
        "mymemory"
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<Translation, ProviderError> {
        let language_pair = self.language_pair(request);
        tracing::debug!("MyMemory request with langpair '{}'", language_pair);

        let response = self
            .client
            .get(endpoint(&self.base_url, "get"))
            .query(&[("q", request.text.as_str()), ("langpair", language_pair.as_str())])
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: MyMemoryResponse = response.json().await.map_err(classify_error)?;

        if let Some(code) = body.response_status.as_ref().and_then(body_status)
            && code != 200
        {
            return Err(ProviderError::Status(code));
        }

        let translated = body
            .response_data
            .and_then(|data| data.translated_text)
            .map(|text| text.trim().to_string())
            .unwrap_or_default();
        if translated.is_empty() {
            return Err(ProviderError::EmptyTranslation);
        }

        Ok(Translation {
            text: translated,
            detected_language: request.from.as_str().to_string(),
        })
    }
}
