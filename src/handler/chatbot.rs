//! Chat endpoint
//!
//! Reads `{ "message": ... }`, classifies the normalized text and answers with
//! `{ "response": ... }`. Every outcome, including failures, is a 200 reply.

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::Response;
use serde::{Deserialize, Serialize};

use crate::classifier::{normalize, responses, Intent};
use crate::config::AppState;
use crate::error::ChatError;
use crate::http;
use crate::logger;

/// Incoming chat payload; a missing `message` is treated as empty
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Outgoing chat payload
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: &'static str,
}

/// Reply text plus the intent that produced it, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub text: &'static str,
    pub intent: Option<Intent>,
}

impl Answer {
    const EMPTY: Self = Self {
        text: responses::EMPTY_MESSAGE,
        intent: None,
    };

    const FAILURE: Self = Self {
        text: responses::TECHNICAL_DIFFICULTIES,
        intent: None,
    };
}

/// Serve one chat request body sent with `content_type`
pub async fn handle_chat<B>(
    content_type: Option<&str>,
    body: B,
    state: &AppState,
) -> (Response<Full<Bytes>>, Option<Intent>)
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let message = match check_content_type(content_type) {
        Ok(()) => read_message(body, state.config.http.max_body_size).await,
        Err(e) => Err(e),
    };
    let reply = match message {
        Ok(message) => answer(&message, state).await,
        Err(e) => {
            logger::log_processing_failure(&e);
            Answer::FAILURE
        }
    };

    let resp = http::build_json_response(&ChatReply {
        response: reply.text,
    });
    (resp, reply.intent)
}

/// Accept `application/json` and `+json` media types, parameters ignored
pub fn check_content_type(content_type: Option<&str>) -> Result<(), ChatError> {
    let raw = content_type.unwrap_or_default();
    let essence = raw
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let is_json = essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"));
    if is_json {
        Ok(())
    } else if raw.is_empty() {
        Err(ChatError::UnsupportedMediaType("<none>".to_string()))
    } else {
        Err(ChatError::UnsupportedMediaType(raw.to_string()))
    }
}

/// Collect the body and return the normalized `message`
pub async fn read_message<B>(body: B, limit: usize) -> Result<String, ChatError>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let bytes = Limited::new(body, limit)
        .collect()
        .await
        .map_err(|e| {
            if e.is::<LengthLimitError>() {
                ChatError::BodyTooLarge { limit }
            } else {
                ChatError::BodyRead(e)
            }
        })?
        .to_bytes();

    // Only a JSON object is accepted; serde would otherwise take `["hi"]` as a struct
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(&bytes)?;
    let request = ChatRequest::deserialize(serde_json::Value::Object(object))?;
    Ok(normalize(&request.message))
}

/// Pick the reply for an already normalized message
pub async fn answer(message: &str, state: &AppState) -> Answer {
    if message.is_empty() {
        return Answer::EMPTY;
    }

    let text = state.classifier.classify(message);
    // The intent is only resolved when something records it
    let intent = (state.debug || state.access_log).then(|| state.classifier.intent(message));
    if let Some(intent) = intent.filter(|_| state.debug) {
        logger::log_classification(message, intent);
    }

    let delay = state.config.response_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    Answer { text, intent }
}
