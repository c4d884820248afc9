//! Command-line interface for kodi-sources.
//!
//! Provides commands for listing library paths and sources, classifying
//! sources, and showing the resolved configuration.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::adapters::HttpTransport;
use crate::config::{self, ResolvedConfig};
use crate::core::JsonRpc;
use crate::domain::{MediaType, Source};
use crate::library::Library;

/// kodi-sources - classify Kodi media sources
#[derive(Parser, Debug)]
#[command(name = "kodi-sources")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// JSON-RPC endpoint (overrides config file and KODI_JSONRPC_URL)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List movie file paths
    Movies,

    /// List TV show paths
    Tvshows,

    /// List episode file paths
    Episodes,

    /// List configured sources
    Sources {
        /// Media type to query
        #[arg(short, long, value_enum, default_value = "video")]
        media: MediaArg,

        /// Query every media type
        #[arg(short, long, conflicts_with = "media")]
        all: bool,
    },

    /// Classify every video source
    Classify,

    /// List sources holding movies
    MovieSources,

    /// List sources holding TV content
    TvSources,

    /// Map movie files to source labels
    MovieContent,

    /// Map TV files to source labels
    TvContent,

    /// Show resolved configuration (debug)
    Config,
}

/// Media type for CLI (maps to MediaType)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MediaArg {
    Video,
    Music,
    Pictures,
    Files,
    Programs,
}

impl From<MediaArg> for MediaType {
    fn from(m: MediaArg) -> Self {
        match m {
            MediaArg::Video => MediaType::Video,
            MediaArg::Music => MediaType::Music,
            MediaArg::Pictures => MediaType::Pictures,
            MediaArg::Files => MediaType::Files,
            MediaArg::Programs => MediaType::Programs,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let mut cfg = config::load_config()?;
        if let Some(endpoint) = self.endpoint {
            cfg.connection.endpoint = endpoint;
        }

        let library = open_library(&cfg)?;
        let json = self.json;

        match self.command {
            Commands::Movies => print_paths(&library.get_movies().await?, json),
            Commands::Tvshows => print_paths(&library.get_tvshows().await?, json),
            Commands::Episodes => print_paths(&library.get_episodes().await?, json),
            Commands::Sources { media, all } => {
                let sources = if all {
                    library.get_all_sources().await?
                } else {
                    library.get_sources_for(media.into()).await?
                };
                print_sources(&sources, json)
            }
            Commands::Classify => classify(&library, json).await,
            Commands::MovieSources => print_sources(&library.get_movie_sources().await?, json),
            Commands::TvSources => print_sources(&library.get_tv_sources().await?, json),
            Commands::MovieContent => print_content(&library.get_movie_content().await?, json),
            Commands::TvContent => print_content(&library.get_tv_content().await?, json),
            Commands::Config => show_config(&cfg),
        }
    }
}

/// Build the library over an HTTP transport
fn open_library(cfg: &ResolvedConfig) -> Result<Library> {
    let transport = HttpTransport::from_settings(&cfg.connection)?;
    Ok(Library::new(JsonRpc::new(transport), cfg.addon.clone()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_paths(paths: &[String], json: bool) -> Result<()> {
    if json {
        return print_json(paths);
    }
    for path in paths {
        println!("{}", path);
    }
    Ok(())
}

fn print_sources(sources: &[Source], json: bool) -> Result<()> {
    if json {
        return print_json(sources);
    }
    if sources.is_empty() {
        println!("No sources found");
        return Ok(());
    }
    for source in sources {
        println!("{}\t{}", source.name, source.path);
    }
    Ok(())
}

fn print_content(content: &BTreeMap<String, String>, json: bool) -> Result<()> {
    if json {
        return print_json(content);
    }
    for (path, label) in content {
        println!("{}\t{}", label, path);
    }
    Ok(())
}

/// Classify sources and print the whole result
async fn classify(library: &Library, json: bool) -> Result<()> {
    let result = library.classify().await?;

    if json {
        return print_json(&result);
    }

    println!("{:<10} {:<24} {}", "KIND", "LABEL", "PATH");
    println!("{}", "-".repeat(60));
    for (source, kind) in &result.source_kinds {
        println!("{:<10} {:<24} {}", kind.to_string(), source.name, source.path);
    }

    println!();
    println!("Movie content ({} files):", result.movie_content.len());
    for (path, label) in &result.movie_content {
        println!("  [{}] {}", label, path);
    }

    println!();
    println!("TV content ({} files):", result.tv_content.len());
    for (path, label) in &result.tv_content {
        println!("  [{}] {}", label, path);
    }

    Ok(())
}

/// Show resolved configuration
fn show_config(cfg: &ResolvedConfig) -> Result<()> {
    println!("kodi-sources configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Addon:");
    println!("  Id:      {}", cfg.addon.id);
    println!("  Name:    {}", cfg.addon.name);
    println!("  Version: {}", cfg.addon.version);
    println!();
    println!("Connection:");
    println!("  Endpoint: {}", cfg.connection.endpoint);
    println!(
        "  Username: {}",
        cfg.connection.username.as_deref().unwrap_or("(none)")
    );
    println!(
        "  Password: {}",
        if cfg.connection.password.is_some() { "********" } else { "(none)" }
    );
    match cfg.connection.timeout_seconds {
        Some(secs) => println!("  Timeout:  {}s", secs),
        None => println!("  Timeout:  (none)"),
    }

    Ok(())
}
