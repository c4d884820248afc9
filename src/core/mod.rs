//! Core logic.
//!
//! This module contains:
//! - Gateway: JSON-RPC request/response handling
//! - Classifier: matching library content against sources

pub mod classifier;
pub mod gateway;

// Re-export commonly used types
pub use classifier::{classify_content, Classification};
pub use gateway::{take_result, JsonRpc, RpcError, RpcRequest};
