//! HTTP response building module
//!
//! Builders for the handful of responses the assistant serves, decoupled from
//! routing and classification.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW, CACHE_CONTROL, SERVER};
use hyper::{Response, StatusCode};
use serde::Serialize;

pub const CORS_ALLOW_METHODS: &str = "GET, HEAD, POST, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Build `text/plain` response; HEAD keeps the length but drops the body
pub fn build_text_response(status: StatusCode, text: &str, is_head: bool) -> Response<Full<Bytes>> {
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::copy_from_slice(text.as_bytes())
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", text.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 JSON response
pub fn build_json_response<T: Serialize>(body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_vec(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_text_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "500 Internal Server Error",
                false,
            );
        }
    };

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Content-Length", json.len())
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header("Allow", CORS_ALLOW_METHODS)
        .header("Content-Length", 0);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Methods", CORS_ALLOW_METHODS)
            .header("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS)
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 404 Not Found response
pub fn build_404_response(is_head: bool) -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_FOUND, "404 Not Found", is_head)
}

/// Build 405 Method Not Allowed response
pub fn build_405_response(allow: &'static str) -> Response<Full<Bytes>> {
    let mut resp = build_text_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "405 Method Not Allowed",
        false,
    );
    resp.headers_mut()
        .insert(ALLOW, HeaderValue::from_static(allow));
    resp
}

/// Build health check response
pub fn build_health_response(status: &str, is_head: bool) -> Response<Full<Bytes>> {
    let mut resp = build_text_response(StatusCode::OK, status, is_head);
    resp.headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    resp
}

/// Stamp the `Server` header and, when enabled, the CORS origin header
pub fn apply_common_headers(resp: &mut Response<Full<Bytes>>, server_name: &str, enable_cors: bool) {
    let headers = resp.headers_mut();
    match HeaderValue::from_str(server_name) {
        Ok(v) => {
            headers.insert(SERVER, v);
        }
        Err(e) => crate::logger::log_warning(&format!("Invalid server_name '{server_name}': {e}")),
    }
    if enable_cors {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    }
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
