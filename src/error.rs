//! Request processing errors

use thiserror::Error;

/// Failure while turning a chat request into a reply.
///
/// Every variant is answered with the same apology text; the variant only
/// decides what gets written to the error log.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Reading the request body failed
    #[error("failed to read request body: {0}")]
    BodyRead(Box<dyn std::error::Error + Send + Sync>),

    /// Body exceeded `http.max_body_size`
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// `Content-Type` missing or not a JSON media type
    #[error("unsupported content type: {0}")]
    UnsupportedMediaType(String),

    /// Body was not a JSON object with a string `message`
    #[error("malformed request body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
