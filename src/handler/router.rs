//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method checks, path dispatch,
//! common headers and access logging.

use crate::classifier::{responses, Intent};
use crate::config::AppState;
use crate::handler::chatbot;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::CONTENT_TYPE;
use hyper::{Method, Request, Response, StatusCode, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

const READ_ONLY_METHODS: &str = "GET, HEAD, OPTIONS";
const CHAT_METHODS: &str = "POST, OPTIONS";

/// Where a request path lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteTarget {
    Chat,
    Ready,
    Health,
    NotFound,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let started = Instant::now();
    let mut entry = state.access_log.then(|| request_entry(&req, peer_addr));

    let (mut resp, intent) = dispatch(req, &state).await;
    http::apply_common_headers(
        &mut resp,
        &state.config.http.server_name,
        state.config.http.enable_cors,
    );

    if let Some(entry) = entry.as_mut() {
        entry.status = resp.status().as_u16();
        entry.body_bytes = resp.body().size_hint().exact().map_or(0, |n| {
            usize::try_from(n).unwrap_or(usize::MAX)
        });
        entry.intent = intent.map(|i| i.to_string());
        entry.elapsed = started.elapsed();
        logger::log_access(entry, &state.config.logging.access_log_format);
    }

    Ok(resp)
}

async fn dispatch<B>(req: Request<B>, state: &AppState) -> (Response<Full<Bytes>>, Option<Intent>)
where
    B: Body<Data = Bytes>,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let method = req.method().clone();
    let target = resolve_target(req.uri().path(), state);
    let is_head = method == Method::HEAD;

    // Preflight is answered the same way on every path
    if method == Method::OPTIONS {
        return (
            http::build_options_response(state.config.http.enable_cors),
            None,
        );
    }

    match (target, method) {
        (RouteTarget::Chat, Method::POST) => {
            let content_type = req
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string);
            chatbot::handle_chat(content_type.as_deref(), req.into_body(), state).await
        }
        (RouteTarget::Chat, _) => (http::build_405_response(CHAT_METHODS), None),
        (RouteTarget::Ready, Method::GET | Method::HEAD) => (
            http::build_text_response(StatusCode::OK, responses::READY, is_head),
            None,
        ),
        (RouteTarget::Health, Method::GET | Method::HEAD) => {
            (http::build_health_response("ok", is_head), None)
        }
        (RouteTarget::Ready | RouteTarget::Health, method) => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            (http::build_405_response(READ_ONLY_METHODS), None)
        }
        (RouteTarget::NotFound, _) => (http::build_404_response(is_head), None),
    }
}

fn resolve_target(path: &str, state: &AppState) -> RouteTarget {
    let health = &state.config.health;
    if path == state.config.chatbot.path {
        RouteTarget::Chat
    } else if path == "/" {
        RouteTarget::Ready
    } else if health.enabled && (path == health.liveness_path || path == health.readiness_path) {
        RouteTarget::Health
    } else {
        RouteTarget::NotFound
    }
}

fn request_entry<B>(req: &Request<B>, peer_addr: SocketAddr) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.to_string(),
        req.method().to_string(),
        req.uri()
            .path_and_query()
            .map_or_else(|| req.uri().path().to_string(), ToString::to_string),
    );
    entry.http_version = version_label(req.version()).to_string();
    entry.user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    entry
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(&Config::for_tests()))
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    fn request(method: Method, path: &str, body: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Full::new(Bytes::copy_from_slice(body.as_bytes())))
            .unwrap()
    }

    async fn send(state: &Arc<AppState>, req: Request<Full<Bytes>>) -> (StatusCode, String) {
        let resp = handle_request(req, Arc::clone(state), peer()).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_readiness() {
        let state = state();
        let (status, body) = send(&state, request(Method::GET, "/", "")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, responses::READY);
    }

    #[tokio::test]
    async fn test_chat_post() {
        let state = state();
        let (status, body) = send(
            &state,
            request(Method::POST, "/chatbot", r#"{"message":"I forgot my password"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(value["response"]
            .as_str()
            .unwrap()
            .starts_with("🔐 Password reset help"));
    }

    #[tokio::test]
    async fn test_chat_empty_message() {
        let state = state();
        let (status, body) = send(&state, request(Method::POST, "/chatbot", r#"{"message":""}"#)).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["response"], responses::EMPTY_MESSAGE);
    }

    #[tokio::test]
    async fn test_chat_requires_json_content_type() {
        let state = state();
        let req = Request::builder()
            .method(Method::POST)
            .uri("/chatbot")
            .header("content-type", "text/plain")
            .body(Full::new(Bytes::from_static(br#"{"message":"where is my bag"}"#)))
            .unwrap();
        let (status, body) = send(&state, req).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["response"], responses::TECHNICAL_DIFFICULTIES);

        let req = Request::builder()
            .method(Method::POST)
            .uri("/chatbot")
            .header("content-type", "application/json; charset=utf-8")
            .body(Full::new(Bytes::from_static(br#"{"message":"where is my bag"}"#)))
            .unwrap();
        let (_, body) = send(&state, req).await;
        assert!(body.contains("Track your luggage easily"));
    }

    #[tokio::test]
    async fn test_preflight() {
        let state = state();
        let resp = handle_request(request(Method::OPTIONS, "/chatbot", ""), Arc::clone(&state), peer())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(resp.headers()["server"], "EasyFly-Assistant/1.0");
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let state = state();
        let resp = handle_request(request(Method::GET, "/chatbot", ""), Arc::clone(&state), peer())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["allow"], CHAT_METHODS);

        let (status, _) = send(&state, request(Method::DELETE, "/", "")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_health_and_not_found() {
        let state = state();
        let (status, body) = send(&state, request(Method::GET, "/healthz", "")).await;
        assert_eq!((status, body.as_str()), (StatusCode::OK, "ok"));
        let (status, _) = send(&state, request(Method::GET, "/readyz", "")).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&state, request(Method::POST, "/chat", "{}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_disabled() {
        let mut cfg = Config::for_tests();
        cfg.health.enabled = false;
        let state = Arc::new(AppState::new(&cfg));
        let (status, _) = send(&state, request(Method::GET, "/healthz", "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_custom_chat_path() {
        let mut cfg = Config::for_tests();
        cfg.chatbot.path = "/api/chat".to_string();
        let state = Arc::new(AppState::new(&cfg));
        let (status, body) = send(
            &state,
            request(Method::POST, "/api/chat", r#"{"message":"thanks"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("very welcome"));
    }
}
