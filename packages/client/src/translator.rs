//! HTTP client for the server's translation endpoint.

use std::time::Duration;

use bilingo_server::infrastructure::dto::http::{
    ErrorResponseDto, TranslateRequestDto, TranslateResponseDto,
};
use bilingo_shared::language::Language;

use crate::error::ClientError;

/// The server answers within the providers' own timeouts; this only guards a hung server.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct TranslatorClient {
    client: reqwest::Client,
    endpoint: String,
}

impl TranslatorClient {
    /// # Arguments
    ///
    /// * `api_url` - Base URL of the server, e.g. `http://127.0.0.1:3000`
    pub fn new(api_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::TranslationFailed(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}/api/translate", api_url.trim_end_matches('/')),
        })
    }

    /// Translate `text` from `from` to `to`
    pub async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<TranslateResponseDto, ClientError> {
        let body = TranslateRequestDto {
            text: Some(text.to_string()),
            from: Some(from.as_str().to_string()),
            to: Some(to.as_str().to_string()),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::TranslationFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let reason = match response.json::<ErrorResponseDto>().await {
                Ok(error) => error.error,
                Err(_) => status.to_string(),
            };
            return Err(ClientError::TranslationFailed(reason));
        }

        response
            .json::<TranslateResponseDto>()
            .await
            .map_err(|e| ClientError::TranslationFailed(e.to_string()))
    }
}
