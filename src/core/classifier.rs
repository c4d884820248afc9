//! Source classification.
//!
//! A source is a movie source when library movies live below its root
//! and a TV source when TV shows or episodes do. Matching is a plain
//! prefix scan over normalized paths.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::{ContentKind, MediaContent, Source};
use crate::library::Library;

/// Outcome of one classification pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Sources holding movies, first-seen order, no duplicates
    pub movie_sources: Vec<Source>,

    /// Sources holding TV content, one entry per matching TV path
    pub tv_sources: Vec<Source>,

    /// Movie file path -> source label
    pub movie_content: BTreeMap<String, String>,

    /// TV file path -> source label
    pub tv_content: BTreeMap<String, String>,

    /// Every scanned source with the kind it was identified as
    pub source_kinds: Vec<(Source, ContentKind)>,
}

/// Match library paths against sources.
///
/// Movie matches are deduplicated (both sources and path/label pairs);
/// TV matches are not. Content maps keep the last label seen for a path.
pub fn classify_content(
    addon_id: &str,
    sources: &[Source],
    movie_content: &[String],
    tv_content: &[String],
) -> Classification {
    let mut movie_sources: Vec<Source> = Vec::new();
    let mut tv_sources: Vec<Source> = Vec::new();
    let mut new_movie_content: Vec<MediaContent> = Vec::new();
    let mut new_tv_content: Vec<MediaContent> = Vec::new();
    let mut source_kinds = Vec::with_capacity(sources.len());

    for source in sources {
        let mut is_movie_source = false;
        let mut is_tv_source = false;

        for path in movie_content.iter().filter(|path| source.contains(path)) {
            if !movie_sources.contains(source) {
                movie_sources.push(source.clone());
            }
            let entry = MediaContent::new(path.as_str(), source.name.as_str());
            if !new_movie_content.contains(&entry) {
                new_movie_content.push(entry);
            }
            is_movie_source = true;
        }

        for path in tv_content.iter().filter(|path| source.contains(path)) {
            tv_sources.push(source.clone());
            new_tv_content.push(MediaContent::new(path.as_str(), source.name.as_str()));
            is_tv_source = true;
        }

        // Movie wins the diagnostic even when TV content matched too
        let kind = if is_movie_source {
            debug!("{}: source '{}' identified as movie source", addon_id, source.path);
            ContentKind::Movie
        } else if is_tv_source {
            debug!("{}: source '{}' identified as tv source", addon_id, source.path);
            ContentKind::Tv
        } else {
            debug!(
                "{}: source '{}' does not contain any known content. assuming content not set.",
                addon_id, source.path
            );
            ContentKind::Unknown
        };
        source_kinds.push((source.clone(), kind));
    }

    Classification {
        movie_sources,
        tv_sources,
        movie_content: into_content_map(new_movie_content),
        tv_content: into_content_map(new_tv_content),
        source_kinds,
    }
}

/// Fold entries into a path-keyed map; later entries overwrite earlier ones
fn into_content_map(entries: Vec<MediaContent>) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for entry in entries {
        map.insert(entry.path, entry.source);
    }
    map
}

impl Library {
    /// Run a full classification pass against the live library
    #[instrument(skip(self), fields(addon = %self.addon().id))]
    pub async fn classify(&self) -> Result<Classification> {
        let movie_content = self.get_movies().await?;
        let mut tv_content = self.get_tvshows().await?;
        tv_content.extend(self.get_episodes().await?);

        let sources = self.get_sources().await?;

        Ok(classify_content(
            &self.addon().id,
            &sources,
            &movie_content,
            &tv_content,
        ))
    }

    /// Video sources holding movies
    pub async fn get_movie_sources(&self) -> Result<Vec<Source>> {
        Ok(self.classify().await?.movie_sources)
    }

    /// Video sources holding TV content, repeated per matching path
    pub async fn get_tv_sources(&self) -> Result<Vec<Source>> {
        Ok(self.classify().await?.tv_sources)
    }

    /// Movie file path -> source label
    pub async fn get_movie_content(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.classify().await?.movie_content)
    }

    /// TV file path -> source label
    pub async fn get_tv_content(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.classify().await?.tv_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_movie_sources_are_deduplicated() {
        let sources = vec![Source::new("Movies", "/m")];
        let movies = paths(&["/m/a.mkv", "/m/b.mkv", "/m/c.mkv"]);

        let result = classify_content("test", &sources, &movies, &[]);

        assert_eq!(result.movie_sources, vec![Source::new("Movies", "/m")]);
        assert_eq!(result.movie_content.len(), 3);
    }

    #[test]
    fn test_tv_sources_repeat_per_match() {
        let sources = vec![Source::new("TV", "/t")];
        let tv = paths(&["/t/show", "/t/show/s01e01.mkv", "/t/show/s01e02.mkv"]);

        let result = classify_content("test", &sources, &[], &tv);

        assert_eq!(result.tv_sources.len(), 3);
        assert!(result.tv_sources.iter().all(|s| s == &sources[0]));
        assert_eq!(result.tv_content.len(), 3);
    }

    #[test]
    fn test_boundary_requires_separator() {
        let sources = vec![Source::new("Movies", "/movies")];
        let movies = paths(&["/moviesextra/x.mkv"]);

        let result = classify_content("test", &sources, &movies, &[]);

        assert!(result.movie_sources.is_empty());
        assert!(result.movie_content.is_empty());
        assert_eq!(result.source_kinds[0].1, ContentKind::Unknown);
    }

    #[test]
    fn test_movie_takes_priority_in_kind() {
        let sources = vec![Source::new("Mixed", "/mixed")];
        let movies = paths(&["/mixed/film.mkv"]);
        let tv = paths(&["/mixed/show/s01e01.mkv"]);

        let result = classify_content("test", &sources, &movies, &tv);

        assert_eq!(result.source_kinds[0].1, ContentKind::Movie);
        // Both lists still record their matches
        assert_eq!(result.movie_sources, sources);
        assert_eq!(result.tv_sources, sources);
    }

    #[test]
    fn test_later_label_wins_for_shared_path() {
        // Same root under two labels: the second source overwrites
        let sources = vec![Source::new("Films", "/m"), Source::new("Cinema", "/m")];
        let movies = paths(&["/m/a.mkv"]);

        let result = classify_content("test", &sources, &movies, &[]);

        assert_eq!(result.movie_sources.len(), 2);
        assert_eq!(result.movie_content.get("/m/a.mkv").map(String::as_str), Some("Cinema"));
    }

    #[test]
    fn test_nested_sources_both_match() {
        let sources = vec![Source::new("All", "/media"), Source::new("TV", "/media/tv")];
        let tv = paths(&["/media/tv/show/s01e01.mkv"]);

        let result = classify_content("test", &sources, &[], &tv);

        assert_eq!(result.tv_sources, sources);
        assert_eq!(
            result.tv_content.get("/media/tv/show/s01e01.mkv").map(String::as_str),
            Some("TV")
        );
        assert_eq!(result.source_kinds[0].1, ContentKind::Tv);
        assert_eq!(result.source_kinds[1].1, ContentKind::Tv);
    }
}
