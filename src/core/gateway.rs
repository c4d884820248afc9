//! JSON-RPC gateway to the host application.
//!
//! Serializes a request, pushes it through an [`RpcTransport`] and decodes
//! the reply. One call per request, no retries.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

use crate::adapters::RpcTransport;

/// JSON-RPC protocol version sent with every request
pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC 2.0 request as the host expects it
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: Value,
    pub id: u32,
}

impl RpcRequest {
    /// Create a request with the fixed id `1`
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: method.into(),
            params,
            id: 1,
        }
    }
}

/// Protocol-level failures in a decoded reply
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("{method} failed on host: {message} (code {code})")]
    Host {
        method: String,
        code: i64,
        message: String,
    },

    #[error("{method} reply has no result")]
    MissingResult { method: String },
}

/// Gateway owning the transport
pub struct JsonRpc {
    transport: Box<dyn RpcTransport>,
}

impl JsonRpc {
    /// Create a gateway over a transport
    pub fn new(transport: impl RpcTransport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Name of the underlying transport
    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }

    /// Send a request and decode the raw reply
    pub async fn call(&self, request: &RpcRequest) -> Result<Value> {
        let body = serde_json::to_string(request)
            .with_context(|| format!("Failed to serialize {} request", request.method))?;

        trace!(
            method = %request.method,
            transport = self.transport.name(),
            "Sending JSON-RPC request"
        );

        let reply = self.transport.send(&body).await?;

        serde_json::from_str(&reply)
            .with_context(|| format!("Failed to parse {} response", request.method))
    }

    /// Send a request and return its `result` member
    pub async fn call_result(&self, request: &RpcRequest) -> Result<Value> {
        let response = self.call(request).await?;
        Ok(take_result(response, &request.method)?)
    }
}

/// Pull `result` out of a decoded reply, surfacing host errors
pub fn take_result(mut response: Value, method: &str) -> Result<Value, RpcError> {
    if let Some(result) = response.get_mut("result") {
        return Ok(result.take());
    }

    if let Some(error) = response.get("error") {
        return Err(RpcError::Host {
            method: method.to_string(),
            code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        });
    }

    Err(RpcError::MissingResult {
        method: method.to_string(),
    })
}
