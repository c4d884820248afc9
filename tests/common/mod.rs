//! Shared test transport returning canned Kodi replies.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use kodi_sources::{AddonInfo, JsonRpc, Library, RpcTransport};

/// Replies keyed by method, or by `method:media` for source queries.
/// Unknown keys get an empty `result` object.
#[derive(Clone, Default)]
pub struct CannedTransport {
    replies: HashMap<String, String>,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl CannedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `key` with `{"result": result}`
    pub fn with_result(self, key: &str, result: Value) -> Self {
        let body = json!({"id": 1, "jsonrpc": "2.0", "result": result});
        self.with_raw(key, &body.to_string())
    }

    /// Reply to `key` with a verbatim body
    pub fn with_raw(mut self, key: &str, body: &str) -> Self {
        self.replies.insert(key.to_string(), body.to_string());
        self
    }

    /// Handle on the requests seen so far
    pub fn requests(&self) -> Arc<Mutex<Vec<Value>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl RpcTransport for CannedTransport {
    fn name(&self) -> &str {
        "canned"
    }

    async fn send(&self, request: &str) -> Result<String> {
        let value: Value = serde_json::from_str(request)?;
        self.requests.lock().unwrap().push(value.clone());

        let method = value["method"].as_str().unwrap_or_default();
        let key = match value["params"]["media"].as_str() {
            Some(media) => format!("{}:{}", method, media),
            None => method.to_string(),
        };

        Ok(self
            .replies
            .get(&key)
            .cloned()
            .unwrap_or_else(|| json!({"id": 1, "jsonrpc": "2.0", "result": {}}).to_string()))
    }
}

/// Library over a canned transport
pub fn library(transport: CannedTransport) -> Library {
    Library::new(
        JsonRpc::new(transport),
        AddonInfo {
            id: "script.test".to_string(),
            name: "Test".to_string(),
            version: "0.0.1".to_string(),
        },
    )
}

/// `[{"file": ..}, ..]`
pub fn files(paths: &[&str]) -> Value {
    Value::Array(paths.iter().map(|p| json!({"file": p})).collect())
}

/// `[{"file": .., "label": ..}, ..]`
pub fn sources(entries: &[(&str, &str)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(label, file)| json!({"file": file, "label": label}))
            .collect(),
    )
}
