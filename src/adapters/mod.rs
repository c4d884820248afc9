//! Transports to the host's JSON-RPC endpoint.
//!
//! A transport moves one serialized request to the host and hands back
//! the raw reply text. Encoding and decoding stay in the gateway.

pub mod kodi;

use anyhow::Result;
use async_trait::async_trait;

pub use kodi::HttpTransport;

/// Request/response channel into the host application
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Human-readable transport name
    fn name(&self) -> &str;

    /// Submit a serialized JSON-RPC request and return the reply body
    async fn send(&self, request: &str) -> Result<String>;
}
