// Server module entry
// Listener setup, connection serving and graceful shutdown

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is exposed as server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;
pub use signal::start_signal_handler;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::responses;
    use crate::config::{AppState, Config};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn raw_request(addr: SocketAddr, request: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn post(path: &str, body: &str) -> String {
        format!(
            "POST {path} HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[tokio::test]
    async fn test_end_to_end_chat() {
        let state = Arc::new(AppState::new(&Config::for_tests()));
        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(start_server_loop(listener, Arc::clone(&state)));

        let reply = raw_request(addr, &post("/chatbot", r#"{"message":"my flight is delayed"}"#)).await;
        assert!(reply.starts_with("HTTP/1.1 200 OK"), "{reply}");
        assert!(reply.to_ascii_lowercase().contains("access-control-allow-origin: *"));
        assert!(reply.contains("Flight delays can be frustrating"));

        let reply = raw_request(addr, &post("/chatbot", "{oops")).await;
        assert!(reply.starts_with("HTTP/1.1 200 OK"));
        let body = reply.split("\r\n\r\n").nth(1).unwrap();
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(value["response"], responses::TECHNICAL_DIFFICULTIES);

        let reply = raw_request(
            addr,
            "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert!(reply.ends_with(responses::READY));

        state.request_shutdown();
        server.await.unwrap().unwrap();
        assert!(state.is_shutting_down());
        assert!(TcpStream::connect(addr).await.is_err());
    }

    #[tokio::test]
    async fn test_connection_limit() {
        let mut cfg = Config::for_tests();
        cfg.performance.max_connections = Some(0);
        let state = Arc::new(AppState::new(&cfg));
        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(start_server_loop(listener, Arc::clone(&state)));

        // Rejected connections are closed without a response; the peer may
        // also see a reset, so write and read errors are both acceptable
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let _ = stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await;
        let mut buf = Vec::new();
        let _ = stream.read_to_end(&mut buf).await;
        assert!(buf.is_empty());

        state.request_shutdown();
        server.await.unwrap().unwrap();
    }
}
