//! Sources and the library content mapped onto them.

use serde::{Deserialize, Serialize};

/// A named filesystem root configured in the host's media settings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source {
    /// Label shown by the host
    pub name: String,

    /// Normalized root path (never ends with '/')
    pub path: String,
}

impl Source {
    /// Create a new source
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Check whether a normalized file path lives below this source.
    ///
    /// The root must be followed by a separator, so `/movies` does not
    /// contain `/moviesextra/x.mkv`, nor the bare root itself.
    pub fn contains(&self, file_path: &str) -> bool {
        file_path
            .strip_prefix(self.path.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.path)
    }
}

/// A library file attributed to the label of the source holding it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaContent {
    /// Normalized file path
    pub path: String,

    /// Label of the owning source
    pub source: String,
}

impl MediaContent {
    /// Create a new content entry
    pub fn new(path: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }
}
