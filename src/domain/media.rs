//! Media types understood by the host and the content kinds a source
//! can be classified as.

use serde::{Deserialize, Serialize};

/// Media type filter accepted by `Files.GetSources`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Music,
    Pictures,
    Files,
    Programs,
}

impl MediaType {
    /// Every media type, in the order sources are collected
    pub const ALL: [MediaType; 5] = [
        MediaType::Video,
        MediaType::Music,
        MediaType::Pictures,
        MediaType::Files,
        MediaType::Programs,
    ];

    /// Wire name used in request params
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Music => "music",
            MediaType::Pictures => "pictures",
            MediaType::Files => "files",
            MediaType::Programs => "programs",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "video" => Ok(MediaType::Video),
            "music" => Ok(MediaType::Music),
            "pictures" => Ok(MediaType::Pictures),
            "files" => Ok(MediaType::Files),
            "programs" => Ok(MediaType::Programs),
            _ => anyhow::bail!("Unknown media type: {}", s),
        }
    }
}

/// What a source was identified as holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// At least one library movie lives below the source
    Movie,

    /// TV shows or episodes live below the source, and no movies
    Tv,

    /// No known library content
    Unknown,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Movie => write!(f, "movie"),
            ContentKind::Tv => write!(f, "tv"),
            ContentKind::Unknown => write!(f, "unknown"),
        }
    }
}
