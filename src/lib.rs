//! kodi-sources - classify Kodi media sources via JSON-RPC
//!
//! Queries a running Kodi instance for its configured sources and the
//! file paths in its video library, then works out which sources hold
//! movies and which hold TV content.
//!
//! # Modules
//!
//! - `adapters`: Transports to the host (Kodi over HTTP)
//! - `core`: JSON-RPC gateway and the source classifier
//! - `domain`: Data structures (Source, MediaContent, MediaType)
//! - `library`: Path normalization and library queries
//! - `config`: Connection settings and addon identity
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Which sources hold movies?
//! kodi-sources movie-sources
//!
//! # Full classification as JSON
//! kodi-sources --json classify
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use crate::adapters::{HttpTransport, RpcTransport};
pub use crate::config::{AddonInfo, ResolvedConfig};
pub use crate::core::{Classification, JsonRpc, RpcError, RpcRequest};
pub use crate::domain::{ContentKind, MediaContent, MediaType, Source};
pub use crate::library::Library;
