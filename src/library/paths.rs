//! Path normalization for host paths.
//!
//! The host reports paths in a few encodings that have to be flattened
//! before they can be compared:
//!
//! ```text
//! C:\Movies\                            -> C:/Movies
//! stack://a/cd1.avi , a/cd2.avi          -> a/cd1.avi, a/cd2.avi
//! multipath://%2Fmnt%2Fa/%2Fmnt%2Fb/     -> /mnt/a, /mnt/b
//! ```

use percent_encoding::percent_decode_str;
use unicode_normalization::UnicodeNormalization;

/// Prefix of a multi-part (stacked) video file
pub const STACK_PREFIX: &str = "stack://";

/// Separator between the parts of a stacked path
pub const STACK_SEPARATOR: &str = " , ";

/// Prefix of a source that aggregates several roots
pub const MULTIPATH_PREFIX: &str = "multipath://";

/// Use forward slashes only and drop every trailing slash
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/").trim_end_matches('/').to_string()
}

/// Decompose (NFKD) and drop everything outside ASCII.
///
/// Meant for display names; paths are never passed through this.
pub fn normalize_string(name: &str) -> String {
    name.nfkd().filter(char::is_ascii).collect()
}

/// Expand stacked paths into their parts, passing other paths through.
///
/// Parts have their escaped commas (`,,`) restored. The returned iterator
/// is lazy and consumes `paths` once.
pub fn unstack<I>(paths: I) -> impl Iterator<Item = String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    paths.into_iter().flat_map(|path| {
        let path: String = path.into();
        if !path.starts_with(STACK_PREFIX) {
            return vec![path];
        }
        path[STACK_PREFIX.len()..]
            .split(STACK_SEPARATOR)
            .map(|part| part.replace(",,", ","))
            .collect()
    })
}

/// Split a multipath source into its percent-decoded roots
pub fn unstack_multipath(path: &str) -> Vec<String> {
    let Some(rest) = path.strip_prefix(MULTIPATH_PREFIX) else {
        return vec![path.to_string()];
    };

    // Anything after a second prefix occurrence is ignored
    let rest = rest.split(MULTIPATH_PREFIX).next().unwrap_or_default();

    rest.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .collect()
}
