//! HTTP transport for Kodi's `/jsonrpc` endpoint.
//!
//! Kodi only answers when "Allow remote control via HTTP" is enabled;
//! credentials are the web server username and password.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::RpcTransport;
use crate::config::ConnectionSettings;

/// Kodi JSON-RPC over HTTP
pub struct HttpTransport {
    endpoint: String,
    credentials: Option<(String, Option<String>)>,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport without authentication or timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials: None,
            client: reqwest::Client::new(),
        }
    }

    /// Create from resolved connection settings
    pub fn from_settings(settings: &ConnectionSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint: settings.endpoint.clone(),
            credentials: settings
                .username
                .clone()
                .map(|user| (user, settings.password.clone())),
            client,
        })
    }

    /// Endpoint requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    fn name(&self) -> &str {
        "kodi-http"
    }

    async fn send(&self, request: &str) -> Result<String> {
        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(request.to_owned());

        if let Some((user, password)) = &self.credentials {
            builder = builder.basic_auth(user, password.as_ref());
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("Failed to reach Kodi at {}", self.endpoint))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read Kodi response body")?;

        if !status.is_success() {
            anyhow::bail!("Kodi JSON-RPC error ({}): {}", status, body.trim());
        }

        Ok(body)
    }
}
