//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    domain::{LanguageCode, TranslationRequest},
    infrastructure::dto::http::{
        ErrorResponseDto, HealthDto, TranslateRequestDto, TranslateResponseDto,
    },
    ui::state::AppState,
};

type ErrorResponse = (StatusCode, Json<ErrorResponseDto>);

fn bad_request(message: impl Into<String>) -> ErrorResponse {
    (StatusCode::BAD_REQUEST, Json(ErrorResponseDto::new(message)))
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}

/// Translate a piece of text
///
/// `from` defaults to `auto`. Blank `text` or `to`, or `to` set to `auto`, is rejected with 400.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequestDto>, JsonRejection>,
) -> Result<Json<TranslateResponseDto>, ErrorResponse> {
    let Json(dto) = payload.map_err(|rejection| {
        tracing::warn!("Rejected translate request: {}", rejection.body_text());
        bad_request(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    let request = to_translation_request(dto).map_err(bad_request)?;

    match state.translate_text_usecase.execute(&request).await {
        Ok(translation) => Ok(Json(translation.into())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponseDto::new(e.to_string())),
        )),
    }
}

/// DTO から Domain Model への変換（入力検証を含む）
fn to_translation_request(dto: TranslateRequestDto) -> Result<TranslationRequest, String> {
    let text = match dto.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err("Missing required field: text".to_string()),
    };
    let to = dto
        .to
        .and_then(|to| LanguageCode::new(to).ok())
        .ok_or_else(|| "Missing required field: to".to_string())?;
    if to.is_auto() {
        return Err(format!("Invalid target language: {}", to));
    }
    let from = dto
        .from
        .and_then(|from| LanguageCode::new(from).ok())
        .unwrap_or_else(LanguageCode::auto);

    Ok(TranslationRequest::new(text, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(text: Option<&str>, from: Option<&str>, to: Option<&str>) -> TranslateRequestDto {
        TranslateRequestDto {
            text: text.map(str::to_string),
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        }
    }

    #[test]
    fn test_to_translation_request_defaults_from_to_auto() {
        // テスト項目: from が省略された場合は auto として扱う
        // given (前提条件):
        let input = dto(Some("hello"), None, Some("zh"));

        // when (操作):
        let result = to_translation_request(input).unwrap();

        // then (期待する結果):
        assert_eq!(result.text, "hello");
        assert!(result.from.is_auto());
        assert_eq!(result.to.as_str(), "zh");
    }

    #[test]
    fn test_to_translation_request_blank_from_is_auto() {
        // テスト項目: 空白のみの from も auto として扱う
        let result = to_translation_request(dto(Some("你好"), Some("  "), Some("en"))).unwrap();

        assert!(result.from.is_auto());
    }

    #[test]
    fn test_to_translation_request_rejects_blank_text() {
        // テスト項目: text が欠落・空白の場合はエラー
        assert_eq!(
            to_translation_request(dto(None, Some("en"), Some("zh"))),
            Err("Missing required field: text".to_string())
        );
        assert_eq!(
            to_translation_request(dto(Some("   "), Some("en"), Some("zh"))),
            Err("Missing required field: text".to_string())
        );
    }

    #[test]
    fn test_to_translation_request_rejects_missing_target() {
        // テスト項目: to が欠落・空白の場合はエラー
        assert_eq!(
            to_translation_request(dto(Some("hello"), Some("en"), None)),
            Err("Missing required field: to".to_string())
        );
        assert_eq!(
            to_translation_request(dto(Some("hello"), Some("en"), Some(""))),
            Err("Missing required field: to".to_string())
        );
    }

    #[test]
    fn test_to_translation_request_rejects_auto_target() {
        // テスト項目: 翻訳先に auto は指定できない
        assert_eq!(
            to_translation_request(dto(Some("hello"), Some("en"), Some("auto"))),
            Err("Invalid target language: auto".to_string())
        );
        assert_eq!(
            to_translation_request(dto(Some("hello"), None, Some("AUTO"))),
            Err("Invalid target language: AUTO".to_string())
        );
    }
}
