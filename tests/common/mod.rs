//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use airdrop_checker::config::CheckerConfig;

pub const WALLET_A: &str = "0x52908400098527886E0F7030069857D2E4169EE7";
pub const WALLET_B: &str = "0xde709f2102306220921060314715629080e2fb77";

/// Start a programmable mock API on an ephemeral port.
///
/// `f` receives the request path and returns status code and body. Every
/// response closes the connection.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let path = read_request_path(&mut socket).await;
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

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn read_request_path(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buf);
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string()
}

/// One API element in the wire format.
pub fn airdrop_json(wallet: &str, name: &str, symbol: &str, amount: &str, claim_url: &str) -> String {
    format!(
        r#"{{"walletAddress":"{}","Token":{{"name":"{}","symbol":"{}","claimUrl":"{}"}},"amount":"{}"}}"#,
        wallet, name, symbol, claim_url, amount
    )
}

/// Fast-paced config pointing at the mock API and the given files.
pub fn test_config(api: SocketAddr, input: &Path, output: &Path) -> CheckerConfig {
    let mut config = CheckerConfig::default();
    config.api.base_url = format!("http://{}/backend/airdrops/", api);
    config.api.request_timeout_secs = 5;
    config.scheduler.min_interval_ms = 50;
    config.retry.throttle_delay_ms = 100;
    config.files.input_path = input.to_path_buf();
    config.files.output_path = output.to_path_buf();
    config
}
