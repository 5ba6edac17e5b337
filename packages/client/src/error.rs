//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Display name is empty after trimming
    #[error("Display name must not be empty")]
    EmptyName,

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The translation endpoint failed or was unreachable
    #[error("Translation failed: {0}")]
    TranslationFailed(String),
}
