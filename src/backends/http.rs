// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTTP transport: backends reached over a URL.
//!
//! Mounting an HTTP backend probes the endpoint with one GET so obviously
//! dead backends fail the mount instead of failing the first real request
//! later. The probe result is recorded in the task's [`Diagnostics`].

use tracing::debug;

use crate::errors::FactoryError;
use crate::traits::{BackendProxy, Diagnostics};

/// Live handle to a probed HTTP backend.
#[derive(Debug)]
pub struct HttpProxy {
    endpoint: String,
}

impl BackendProxy for HttpProxy {
    fn transport(&self) -> &'static str {
        "http"
    }

    fn target(&self) -> String {
        self.endpoint.clone()
    }
}

/// Probe `endpoint` with one GET and hand back a proxy if it answers.
///
/// Connection-level failures map to [`FactoryError::Unreachable`]; a backend
/// that answers with a non-success status fails the handshake instead.
pub async fn probe_backend(
    endpoint: &str,
    client: &reqwest::Client,
    diagnostics: &mut Diagnostics,
) -> Result<HttpProxy, FactoryError> {
    if endpoint.trim().is_empty() {
        return Err(FactoryError::InvalidDescriptor {
            details: "http backend has a blank endpoint".to_string(),
        });
    }

    debug!(endpoint = %endpoint, "probing http backend");

    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|source| FactoryError::Unreachable {
            endpoint: endpoint.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FactoryError::Handshake(format!(
            "'{}' answered the probe with {}",
            endpoint, status
        )));
    }

    diagnostics.note(format!("probe: {}", status));

    Ok(HttpProxy {
        endpoint: endpoint.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one request with the given status line, then hang up.
    async fn serve_once(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 1024];
                let _ = socket.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 {}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                    status_line
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn reachable_backend_mounts() {
        let endpoint = serve_once("200 OK").await;
        let mut diagnostics = Diagnostics::new();

        let proxy = probe_backend(&endpoint, &reqwest::Client::new(), &mut diagnostics)
            .await
            .unwrap();

        assert_eq!(proxy.transport(), "http");
        assert_eq!(proxy.target(), endpoint);
        assert_eq!(diagnostics.output(), ["probe: 200 OK"]);
    }

    #[tokio::test]
    async fn error_status_fails_handshake() {
        let endpoint = serve_once("503 Service Unavailable").await;
        let mut diagnostics = Diagnostics::new();

        let result = probe_backend(&endpoint, &reqwest::Client::new(), &mut diagnostics).await;

        match result {
            Err(FactoryError::Handshake(message)) => assert!(message.contains("503")),
            other => panic!("expected handshake failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn connection_refused_is_unreachable() {
        // Bind then drop to find a port with nothing listening on it.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let mut diagnostics = Diagnostics::new();
        let result = probe_backend(&endpoint, &reqwest::Client::new(), &mut diagnostics).await;

        assert!(matches!(result, Err(FactoryError::Unreachable { .. })));
    }

    #[tokio::test]
    async fn blank_endpoint_is_rejected_before_probing() {
        let mut diagnostics = Diagnostics::new();
        let result = probe_backend("", &reqwest::Client::new(), &mut diagnostics).await;

        assert!(matches!(
            result,
            Err(FactoryError::InvalidDescriptor { .. })
        ));
    }
}
