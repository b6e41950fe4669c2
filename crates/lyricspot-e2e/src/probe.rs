//! Reachability probe.
//!
//! One HTTP GET against the application's home URL before any scenario runs.
//! The deployment sleeps when idle, so this both wakes it and proves it is
//! answering. Anything but a plain 200 aborts the whole run; there is no
//! retry.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::info;

use crate::result::{E2eError, E2eResult};

/// Timeout for the single probe request
const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// Issue the probe and require an HTTP 200 answer.
///
/// # Errors
///
/// Returns [`E2eError::Unreachable`] on a connection failure or any
/// non-200 status.
pub async fn check_reachable(url: &str) -> E2eResult<()> {
    let client = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| E2eError::Unreachable {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if status == StatusCode::OK {
        info!(url, "service reachable");
        Ok(())
    } else {
        Err(E2eError::Unreachable {
            url: url.to_string(),
            reason: format!("status {status}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one request with a canned status line, returning the
    /// bound URL.
    async fn one_shot_server(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let response = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            let _ = stream.write_all(response.as_bytes()).await;
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn ok_status_passes() {
        let url = one_shot_server("HTTP/1.1 200 OK").await;
        assert!(check_reachable(&url).await.is_ok());
    }

    #[tokio::test]
    async fn non_ok_status_is_fatal() {
        let url = one_shot_server("HTTP/1.1 503 Service Unavailable").await;
        let err = check_reachable(&url).await.unwrap_err();
        assert!(matches!(err, E2eError::Unreachable { .. }));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn connection_refused_is_fatal() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = check_reachable(&format!("http://{addr}/")).await.unwrap_err();
        assert!(matches!(err, E2eError::Unreachable { .. }));
    }
}
