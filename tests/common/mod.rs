//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a mock backend that answers every request with a fixed status and
/// body, regardless of path.
#[allow(dead_code)]
pub async fn start_mock_backend(addr: SocketAddr, status: u16, body: &'static str) {
    start_programmable_backend(addr, move |_path| async move { (status, body.to_string()) })
        .await;
}

/// Start a programmable mock backend. The handler receives the request path
/// and returns (status, body).
pub async fn start_programmable_backend<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut buf = [0u8; 1024];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let head = String::from_utf8_lossy(&buf[..n]).to_string();
                        let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();

                        let (status, body) = f(path).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Config pointing at a local mock backend, with timings shrunk for tests.
pub fn test_config(addr: SocketAddr) -> keepalive::KeepaliveConfig {
    let mut config = keepalive::KeepaliveConfig::default();
    config.endpoint.base_url = format!("http://{}", addr);
    config.schedule.warmup_ms = 100;
    config.schedule.interval_ms = 200;
    config.schedule.jitter_ms = 0;
    config.probe.timeout_ms = 1_000;
    config
}
