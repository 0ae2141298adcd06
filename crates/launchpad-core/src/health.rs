//! Backend reachability probe.

use crate::config::ApiConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// `GET <base_url>/health`; `true` only on a 200 response.
///
/// Transport errors, timeouts and any other status all report `false`.
pub async fn check_api_health(config: &ApiConfig) -> bool {
    let client = match build_client(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::debug!(error = %e, "failed to build health check client");
            return false;
        }
    };

    let url = config.url("/health");
    match client.get(&url).send().await {
        Ok(response) => {
            let status = response.status();
            tracing::debug!(url, %status, "health check response");
            status == StatusCode::OK
        }
        Err(e) => {
            tracing::debug!(url, error = %e, "health check failed");
            false
        }
    }
}

fn build_client(config: &ApiConfig) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::debug!(name, "skipping invalid header"),
        }
    }

    Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .default_headers(headers)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one connection, answering `status` to `GET /health` carrying
    /// the JSON accept header and 404 to anything else.
    async fn serve_once(status: &'static str) -> ApiConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let request = String::from_utf8_lossy(&request).to_ascii_lowercase();
            let status = if request.starts_with("get /health ")
                && request.contains("accept: application/json")
            {
                status
            } else {
                "404 Not Found"
            };
            let response =
                format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        ApiConfig::with_base_url(&format!("http://{addr}/"))
    }

    #[tokio::test]
    async fn test_healthy_backend() {
        let config = serve_once("200 OK").await;
        assert!(check_api_health(&config).await);
    }

    #[tokio::test]
    async fn test_unhealthy_status() {
        let config = serve_once("503 Service Unavailable").await;
        assert!(!check_api_health(&config).await);
    }

    #[tokio::test]
    async fn test_non_200_success_is_unhealthy() {
        let config = serve_once("204 No Content").await;
        assert!(!check_api_health(&config).await);
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ApiConfig::with_base_url(&format!("http://{addr}"));
        assert!(!check_api_health(&config).await);
    }

    #[tokio::test]
    async fn test_timeout_is_unhealthy() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let mut config = ApiConfig::with_base_url(&format!("http://{addr}"));
        config.timeout_ms = 100;
        assert!(!check_api_health(&config).await);
        server.abort();
    }
}
