//! Configuration for kodi-sources.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (KODI_JSONRPC_URL, KODI_USERNAME, KODI_PASSWORD)
//! 2. Config file (.kodi-sources/config.yaml)
//! 3. Defaults (http://localhost:8080/jsonrpc, crate name and version)
//!
//! Config file discovery:
//! - Searches the start directory and its parents for .kodi-sources/config.yaml
//! - Falls back to ~/.kodi-sources/config.yaml
//!
//! The resolved value is built once by the entry point and passed down;
//! nothing here is cached process-wide.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Directory holding the config file
pub const CONFIG_DIR: &str = ".kodi-sources";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/jsonrpc";

pub const ENV_ENDPOINT: &str = "KODI_JSONRPC_URL";
pub const ENV_USERNAME: &str = "KODI_USERNAME";
pub const ENV_PASSWORD: &str = "KODI_PASSWORD";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub addon: AddonSection,
    #[serde(default)]
    pub connection: ConnectionSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddonSection {
    pub id: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionSection {
    pub endpoint: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Identity of the addon, used to prefix diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonInfo {
    pub id: String,
    pub name: String,
    pub version: String,
}

impl Default for AddonInfo {
    fn default() -> Self {
        Self {
            id: env!("CARGO_PKG_NAME").to_string(),
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// How to reach the host's JSON-RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub endpoint: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Request timeout; `None` waits for the host indefinitely
    pub timeout_seconds: Option<u64>,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            username: None,
            password: None,
            timeout_seconds: None,
        }
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub addon: AddonInfo,
    pub connection: ConnectionSettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching `start` and its parents, then the home dir
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge a parsed config file and environment lookups over the defaults
fn resolve(
    file: Option<ConfigFile>,
    config_file: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let defaults = AddonInfo::default();
    let (addon, connection) = match file {
        Some(file) => (file.addon, file.connection),
        None => (AddonSection::default(), ConnectionSection::default()),
    };

    let addon = AddonInfo {
        id: addon.id.unwrap_or(defaults.id),
        name: addon.name.unwrap_or(defaults.name),
        version: addon.version.unwrap_or(defaults.version),
    };

    let connection = ConnectionSettings {
        endpoint: env(ENV_ENDPOINT)
            .or(connection.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        username: env(ENV_USERNAME).or(connection.username),
        password: env(ENV_PASSWORD).or(connection.password),
        timeout_seconds: connection.timeout_seconds,
    };

    ResolvedConfig {
        addon,
        connection,
        config_file,
    }
}

/// Load configuration, searching for a config file from `start`
pub fn load_config_from(start: &Path) -> Result<ResolvedConfig> {
    let config_file = find_config_file(start);
    let file = config_file
        .as_deref()
        .map(load_config_file)
        .transpose()?;

    Ok(resolve(file, config_file, |key| std::env::var(key).ok()))
}

/// Load configuration from all sources, starting at the current directory
pub fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    load_config_from(&cwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, None, no_env);

        assert_eq!(config.connection.endpoint, DEFAULT_ENDPOINT);
        assert!(config.connection.username.is_none());
        assert!(config.connection.timeout_seconds.is_none());
        assert_eq!(config.addon.id, "kodi-sources");
        assert_eq!(config.addon.version, env!("CARGO_PKG_VERSION"));
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();

        let config_path = config_dir.join(CONFIG_FILE);
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
addon:
  id: script.library.sources
  name: Library Sources
connection:
  endpoint: http://kodi.local:8080/jsonrpc
  username: kodi
  timeout_seconds: 30
"#
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.addon.id.as_deref(), Some("script.library.sources"));
        assert!(config.addon.version.is_none());
        assert_eq!(config.connection.timeout_seconds, Some(30));

        let resolved = resolve(Some(config), Some(config_path.clone()), no_env);
        assert_eq!(resolved.addon.id, "script.library.sources");
        assert_eq!(resolved.addon.name, "Library Sources");
        assert_eq!(resolved.addon.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(resolved.connection.endpoint, "http://kodi.local:8080/jsonrpc");
        assert_eq!(resolved.connection.username.as_deref(), Some("kodi"));
        assert_eq!(resolved.config_file, Some(config_path));
    }

    #[test]
    fn test_env_overrides_file() {
        let file: ConfigFile = serde_yaml::from_str(
            r#"
version: "1.0"
connection:
  endpoint: http://from-file:8080/jsonrpc
  username: file-user
  password: file-pass
"#,
        )
        .unwrap();

        let env: HashMap<&str, &str> = [
            (ENV_ENDPOINT, "http://from-env:9090/jsonrpc"),
            (ENV_PASSWORD, "env-pass"),
        ]
        .into_iter()
        .collect();

        let resolved = resolve(Some(file), None, |key| env.get(key).map(|v| v.to_string()));
        assert_eq!(resolved.connection.endpoint, "http://from-env:9090/jsonrpc");
        assert_eq!(resolved.connection.username.as_deref(), Some("file-user"));
        assert_eq!(resolved.connection.password.as_deref(), Some("env-pass"));
    }

    #[test]
    fn test_find_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILE), "version: \"1.0\"\n").unwrap();

        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_config_file(&nested),
            Some(config_dir.join(CONFIG_FILE))
        );
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILE), "connection: [not, a, map]\n").unwrap();

        assert!(load_config_from(temp.path()).is_err());
    }
}
