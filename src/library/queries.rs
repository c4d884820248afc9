//! Library and source queries against the host.
//!
//! Every query is one JSON-RPC round trip. A missing array in the reply
//! means the host has nothing of that kind and yields an empty list.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::paths::{normalize_path, unstack, unstack_multipath};
use crate::config::AddonInfo;
use crate::core::gateway::{JsonRpc, RpcRequest};
use crate::domain::{MediaType, Source};

pub const METHOD_GET_MOVIES: &str = "VideoLibrary.GetMovies";
pub const METHOD_GET_TVSHOWS: &str = "VideoLibrary.GetTVShows";
pub const METHOD_GET_EPISODES: &str = "VideoLibrary.GetEpisodes";
pub const METHOD_GET_SOURCES: &str = "Files.GetSources";

/// Library item carrying a file path
#[derive(Debug, Deserialize)]
struct FileItem {
    file: String,
}

/// Entry returned by `Files.GetSources`
#[derive(Debug, Deserialize)]
struct SourceItem {
    file: String,
    label: String,
}

/// Host media library reached through the JSON-RPC gateway
pub struct Library {
    rpc: JsonRpc,
    addon: AddonInfo,
}

impl Library {
    /// Create a library over a gateway
    pub fn new(rpc: JsonRpc, addon: AddonInfo) -> Self {
        Self { rpc, addon }
    }

    /// Addon identity used to prefix diagnostics
    pub fn addon(&self) -> &AddonInfo {
        &self.addon
    }

    /// Issue one request and decode the array stored under `key`
    async fn query_items<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
        key: &str,
    ) -> Result<Vec<T>> {
        let request = RpcRequest::new(method, params);
        let mut result = self.rpc.call_result(&request).await?;

        let Some(result) = result.as_object_mut() else {
            anyhow::bail!("{} result is not an object", method);
        };

        match result.remove(key) {
            Some(items) => serde_json::from_value(items)
                .with_context(|| format!("Failed to decode '{}' from {}", key, method)),
            None => Ok(Vec::new()),
        }
    }

    async fn query_files(&self, method: &str, key: &str) -> Result<Vec<String>> {
        let items: Vec<FileItem> = self
            .query_items(method, json!({"properties": ["file"]}), key)
            .await?;
        Ok(items.into_iter().map(|item| item.file).collect())
    }

    /// Normalized file paths of all library movies, stacks expanded
    pub async fn get_movies(&self) -> Result<Vec<String>> {
        let files = self.query_files(METHOD_GET_MOVIES, "movies").await?;
        Ok(unstack(files).map(|path| normalize_path(&path)).collect())
    }

    /// Normalized root paths of all library TV shows
    pub async fn get_tvshows(&self) -> Result<Vec<String>> {
        let files = self.query_files(METHOD_GET_TVSHOWS, "tvshows").await?;
        Ok(files.iter().map(|path| normalize_path(path)).collect())
    }

    /// Normalized file paths of all library episodes, stacks expanded
    pub async fn get_episodes(&self) -> Result<Vec<String>> {
        let files = self.query_files(METHOD_GET_EPISODES, "episodes").await?;
        Ok(unstack(files).map(|path| normalize_path(&path)).collect())
    }

    /// Sources configured for one media type, multipaths expanded
    pub async fn get_sources_for(&self, media: MediaType) -> Result<Vec<Source>> {
        let items: Vec<SourceItem> = self
            .query_items(METHOD_GET_SOURCES, json!({"media": media.as_str()}), "sources")
            .await?;

        let mut sources = Vec::new();
        for item in items {
            for path in unstack_multipath(&item.file) {
                sources.push(Source::new(item.label.clone(), normalize_path(&path)));
            }
        }
        Ok(sources)
    }

    /// Video sources
    pub async fn get_sources(&self) -> Result<Vec<Source>> {
        self.get_sources_for(MediaType::Video).await
    }

    /// Sources of every media type, in [`MediaType::ALL`] order
    pub async fn get_all_sources(&self) -> Result<Vec<Source>> {
        let mut sources = Vec::new();
        for media in MediaType::ALL {
            sources.extend(self.get_sources_for(media).await?);
        }
        Ok(sources)
    }
}
